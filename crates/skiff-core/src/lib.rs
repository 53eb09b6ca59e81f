pub mod driver;
pub use driver::{Driver, Session};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Entity, MappingCatalog};

pub mod stmt;

/// A Result type alias that uses Skiff's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
