mod exec;
mod lower;

use crate::{stmt, Result};
use lower::LowerPredicate;
use skiff_core::{
    driver::Dialect,
    schema::{Entity, MappingCatalog},
    stmt::{Delete, Expr, Statement},
    Error,
};
use skiff_sql::Serializer;

use std::sync::Arc;

/// Turns entity operations into statements and runs them.
#[derive(Debug)]
pub(crate) struct Engine {
    catalog: Arc<MappingCatalog>,
    serializer: Serializer,
}

impl Engine {
    pub(crate) fn new(catalog: Arc<MappingCatalog>, dialect: Dialect) -> Self {
        Self {
            catalog,
            serializer: Serializer::for_dialect(dialect),
        }
    }

    pub(crate) fn catalog(&self) -> &Arc<MappingCatalog> {
        &self.catalog
    }

    pub(crate) fn dialect(&self) -> Dialect {
        self.serializer.dialect()
    }

    /// `DELETE FROM <table> WHERE <pk> = <value of the instance's key>`
    pub(crate) fn lower_delete_instance<E: Entity>(&self, entity: &E) -> Result<Statement> {
        let mapping = self.catalog.resolve::<E>()?;

        let Some(pk) = mapping.primary_key() else {
            return Err(Error::no_primary_key(mapping.entity().name()));
        };

        let value = pk.value(entity);

        if value.is_null() {
            return Err(Error::null_primary_key(mapping.entity().name(), pk.name()));
        }

        let filter = Expr::eq(Expr::column(mapping.table(), pk.column()), value);

        Ok(Delete::new(mapping.table(), filter)?.into())
    }

    pub(crate) fn lower_delete<E: Entity>(&self, delete: stmt::Delete<E>) -> Result<Statement> {
        // A missing condition is rejected before the type is resolved.
        let predicate = match delete.into_filter() {
            stmt::Filter::Missing => return Err(Error::null_input("filter")),
            stmt::Filter::All => None,
            stmt::Filter::Where(predicate) => Some(predicate),
        };

        let mapping = self.catalog.resolve::<E>()?;

        let stmt = match predicate {
            Some(predicate) => {
                let filter = LowerPredicate::new(&mapping).lower_root(&predicate)?;
                Delete::new(mapping.table(), filter)?
            }
            None => Delete::all(mapping.table()),
        };

        Ok(stmt.into())
    }
}
