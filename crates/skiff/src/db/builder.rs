use super::{Connect, Db};
use crate::{engine::Engine, Result};

use skiff_core::{
    driver::Driver,
    schema::{Entity, MappingCatalog},
};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Catalog shared with other `Db` instances. A new catalog is created
    /// when unset.
    catalog: Option<Arc<MappingCatalog>>,

    /// Entity types resolved eagerly when the `Db` is built
    registrations: Vec<fn(&MappingCatalog) -> Result<()>>,
}

impl Builder {
    pub fn catalog(&mut self, catalog: Arc<MappingCatalog>) -> &mut Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolves `E`'s mapping when the `Db` is built, so configuration
    /// errors surface before the first statement.
    pub fn register<E: Entity>(&mut self) -> &mut Self {
        self.registrations
            .push(|catalog| catalog.resolve::<E>().map(|_| ()));
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let catalog = self.catalog.clone().unwrap_or_default();

        for register in &self.registrations {
            register(&catalog)?;
        }

        let engine = Engine::new(catalog, driver.dialect());
        let session = driver.connect().await?;

        Ok(Db {
            engine: Arc::new(engine),
            driver: Arc::new(driver),
            session,
        })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("catalog", &self.catalog)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}
