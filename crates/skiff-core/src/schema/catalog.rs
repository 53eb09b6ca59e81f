use super::{Entity, EntityType, TypeMapping};
use crate::Result;

use dashmap::DashMap;
use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

/// Resolves and caches the [`TypeMapping`] of every entity type it is asked
/// about.
///
/// The catalog is safe to share between threads. A type's mapping is built
/// at most once per successful resolution race: concurrent first lookups may
/// each build a candidate, but only one is stored and every caller receives
/// that one. Failed resolutions are not cached.
#[derive(Default)]
pub struct MappingCatalog {
    mappings: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl MappingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mapping for `E`, building it on first use.
    pub fn resolve<E: Entity>(&self) -> Result<Arc<TypeMapping<E>>> {
        let entity = EntityType::of::<E>();

        if let Some(mapping) = self.mappings.get(&entity.id()) {
            return Ok(downcast(mapping.value().clone()));
        }

        tracing::trace!(entity = %entity, "building type mapping");

        // Build outside of the map's shard lock. `E::describe` is user code.
        let mapping: Arc<dyn Any + Send + Sync> =
            Arc::new(TypeMapping::from_descriptor(E::describe())?);

        let stored = self
            .mappings
            .entry(entity.id())
            .or_insert(mapping)
            .value()
            .clone();

        Ok(downcast(stored))
    }

    /// Returns true if a mapping for `E` has already been built.
    pub fn contains<E: Entity>(&self) -> bool {
        self.mappings.contains_key(&TypeId::of::<E>())
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

fn downcast<E: Entity>(mapping: Arc<dyn Any + Send + Sync>) -> Arc<TypeMapping<E>> {
    mapping
        .downcast::<TypeMapping<E>>()
        .unwrap_or_else(|_| unreachable!("mapping stored under the wrong type id"))
}

impl fmt::Debug for MappingCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingCatalog")
            .field("len", &self.mappings.len())
            .finish()
    }
}
