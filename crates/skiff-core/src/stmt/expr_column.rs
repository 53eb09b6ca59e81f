use super::Expr;

/// Reference to a column by name.
///
/// The table is kept so diagnostics can name it. Single table statements
/// render only the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    pub table: String,
    pub column: String,
}

impl Expr {
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        ExprColumn {
            table: table.into(),
            column: column.into(),
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
