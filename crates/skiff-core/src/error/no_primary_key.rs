use super::Error;

/// Error when a delete by instance targets an entity type without a primary
/// key.
#[derive(Debug)]
pub(super) struct NoPrimaryKey {
    entity: Box<str>,
}

impl std::error::Error for NoPrimaryKey {}

impl core::fmt::Display for NoPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity type `{}` does not define a primary key",
            self.entity
        )
    }
}

impl Error {
    /// Creates a missing primary key error for the named entity type.
    pub fn no_primary_key(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoPrimaryKey(NoPrimaryKey {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_no_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoPrimaryKey(_))
    }
}
