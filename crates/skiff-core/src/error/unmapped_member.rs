use super::Error;

/// Error when a predicate references a member that has no column.
#[derive(Debug)]
pub(super) struct UnmappedMember {
    entity: Box<str>,
    member: Box<str>,
}

impl std::error::Error for UnmappedMember {}

impl core::fmt::Display for UnmappedMember {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "member `{}` of entity type `{}` is not mapped to a column",
            self.member, self.entity
        )
    }
}

impl Error {
    /// Creates an unmapped member error.
    pub fn unmapped_member(entity: impl Into<String>, member: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappedMember(UnmappedMember {
            entity: entity.into().into(),
            member: member.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmapped member error.
    pub fn is_unmapped_member(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedMember(_))
    }
}
