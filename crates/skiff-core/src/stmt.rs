mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod op_binary;
pub use op_binary::BinaryOp;

mod predicate;
pub use predicate::{Predicate, PredicateMember};

mod statement;
pub use statement::Statement;

mod table_ref;
pub use table_ref::TableRef;

mod value;
pub use value::Value;

pub mod visit;
pub use visit::Visit;
