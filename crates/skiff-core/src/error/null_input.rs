use super::Error;

/// Error when a required argument of a public operation is absent.
#[derive(Debug)]
pub(super) struct NullInput {
    argument: Box<str>,
}

impl std::error::Error for NullInput {}

impl core::fmt::Display for NullInput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "argument `{}` must not be null", self.argument)
    }
}

impl Error {
    /// Creates a null input error naming the missing argument.
    pub fn null_input(argument: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullInput(NullInput {
            argument: argument.into().into(),
        }))
    }

    /// Returns `true` if this error is a null input error.
    pub fn is_null_input(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullInput(_))
    }
}
