mod delete;
pub use delete::Delete;
pub(crate) use delete::Filter;

mod expr;
pub use expr::Expr;

mod into_expr;
pub use into_expr::IntoExpr;

mod path;
pub use path::Path;

pub use skiff_core::stmt::Value;
