pub mod serializer;
pub use serializer::{Params, Placeholder, Rendered, Serializer};

pub use skiff_core::stmt::Statement;
