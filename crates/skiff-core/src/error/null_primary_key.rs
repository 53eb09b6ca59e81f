use super::Error;

/// Error when the primary key of an entity instance evaluates to null.
///
/// The same instance can be deleted later once its key is populated.
#[derive(Debug)]
pub(super) struct NullPrimaryKey {
    entity: Box<str>,
    member: Box<str>,
}

impl std::error::Error for NullPrimaryKey {}

impl core::fmt::Display for NullPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "primary key `{}` of entity type `{}` is null",
            self.member, self.entity
        )
    }
}

impl Error {
    /// Creates a null primary key error.
    pub fn null_primary_key(entity: impl Into<String>, member: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullPrimaryKey(NullPrimaryKey {
            entity: entity.into().into(),
            member: member.into().into(),
        }))
    }

    /// Returns `true` if this error is a null primary key error.
    pub fn is_null_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullPrimaryKey(_))
    }
}
