use super::Error;

/// Error when an entity type has no table mapping.
#[derive(Debug)]
pub(super) struct NoTable {
    entity: Box<str>,
}

impl std::error::Error for NoTable {}

impl core::fmt::Display for NoTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no table mapping for entity type `{}`", self.entity)
    }
}

impl Error {
    /// Creates a missing table mapping error for the named entity type.
    pub fn no_table(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoTable(NoTable {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing table mapping error.
    pub fn is_no_table(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoTable(_))
    }
}
