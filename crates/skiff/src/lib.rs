pub mod db;
pub use db::Db;

mod engine;

pub mod stmt;
pub use stmt::Delete;

pub use skiff_core::{
    driver::{self, Dialect, Driver, Session},
    schema::{self, Entity, MappingCatalog},
    async_trait, Error, Result,
};

pub use skiff_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{Path, Value},
        Entity,
    };
    pub use skiff_core::schema::Descriptor;
}
