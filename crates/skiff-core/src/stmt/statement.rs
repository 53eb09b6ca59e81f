use super::{Delete, Value};

/// A statement ready to be serialized.
///
/// Only deletes are translated; the enum leaves room for the other
/// statement kinds without changing the serializer entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
}

impl Statement {
    /// Values bound by the statement in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        match self {
            Self::Delete(delete) => delete.params(),
        }
    }
}
