use super::Descriptor;

use std::{any::TypeId, fmt, hash};

/// A type whose instances can be persisted.
///
/// The description is the only source of metadata the catalog reads; it is
/// usually produced by `#[derive(Entity)]`.
pub trait Entity: Sized + Send + Sync + 'static {
    fn describe() -> Descriptor<Self>;
}

/// Identifies an entity type at runtime.
///
/// Two values are equal when they refer to the same Rust type. The name is
/// only used for diagnostics.
#[derive(Clone, Copy)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
}

impl EntityType {
    pub fn of<E: 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: short_type_name(std::any::type_name::<E>()),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name without its module path.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityType {}

impl hash::Hash for EntityType {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityType({})", self.name)
    }
}

/// Strips the module path of the outermost type, keeping generic arguments
/// as they are.
fn short_type_name(full: &'static str) -> &'static str {
    let head_end = full.find('<').unwrap_or(full.len());

    match full[..head_end].rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}
