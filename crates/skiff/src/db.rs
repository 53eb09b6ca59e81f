mod builder;
mod connect;

pub use builder::Builder;
pub use connect::Connect;

use crate::{engine::Engine, stmt, Result};

use skiff_core::{
    driver::{Dialect, Driver, Session},
    schema::{Entity, MappingCatalog},
    stmt::Value,
};

use std::sync::Arc;

/// A database handle bound to one session.
///
/// Operations take `&mut self`, so statements issued through one `Db` run one
/// after another. Use [`Db::open_session`] for independent work; the new
/// handle shares the mapping catalog but not the session.
pub struct Db {
    engine: Arc<Engine>,
    driver: Arc<dyn Driver>,
    session: Box<dyn Session>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url` with a fresh mapping catalog.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Opens another session on the same database.
    pub async fn open_session(&self) -> Result<Db> {
        let session = self.driver.connect().await?;

        Ok(Db {
            engine: self.engine.clone(),
            driver: self.driver.clone(),
            session,
        })
    }

    /// Deletes the row identified by `entity`'s primary key, returning the
    /// number of affected rows.
    ///
    /// Fails without contacting the database if `E` has no table or primary
    /// key, or if the key's value is null.
    pub async fn delete<E: Entity>(&mut self, entity: &E) -> Result<u64> {
        let stmt = self.engine.lower_delete_instance(entity)?;
        self.engine.exec(&mut *self.session, &stmt).await
    }

    /// Deletes every row of `E` matching `filter`.
    pub async fn delete_by<E: Entity>(&mut self, filter: stmt::Expr<bool>) -> Result<u64> {
        self.exec(stmt::Delete::<E>::new().filter(filter)).await
    }

    /// Execute a delete statement
    pub async fn exec<E: Entity>(&mut self, delete: stmt::Delete<E>) -> Result<u64> {
        let stmt = self.engine.lower_delete(delete)?;
        self.engine.exec(&mut *self.session, &stmt).await
    }

    /// Executes raw SQL that returns no rows.
    ///
    /// `sql` must use the placeholder syntax of [`Db::dialect`].
    pub async fn exec_sql(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        self.engine.exec_sql(&mut *self.session, sql, params).await
    }

    pub fn catalog(&self) -> &Arc<MappingCatalog> {
        self.engine.catalog()
    }

    pub fn dialect(&self) -> Dialect {
        self.engine.dialect()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// The session statements are executed on.
    pub fn session_mut(&mut self) -> &mut dyn Session {
        &mut *self.session
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("engine", &self.engine)
            .field("driver", &self.driver)
            .field("session", &self.session)
            .finish()
    }
}
