use super::Error;

/// Error when a predicate has a shape that cannot be translated to SQL.
///
/// This occurs when:
/// - The predicate root is not a boolean expression (a bare literal or member)
/// - A NULL operand is used with an ordering operator (`<`, `<=`, `>`, `>=`)
/// - A member of one entity type is used in a predicate over another
#[derive(Debug)]
pub(super) struct InvalidPredicate {
    message: Box<str>,
}

impl std::error::Error for InvalidPredicate {}

impl core::fmt::Display for InvalidPredicate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid predicate: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid predicate error.
    pub fn invalid_predicate(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPredicate(InvalidPredicate {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid predicate error.
    pub fn is_invalid_predicate(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPredicate(_))
    }
}
