use super::{visit, Expr, Statement, TableRef, Value};
use crate::{Error, Result};

/// `DELETE FROM <table> [WHERE <filter>]`
///
/// A filter is always boolean-shaped and never compares against a literal
/// null; [`Delete::new`] rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    table: TableRef,

    /// WHERE. `None` deletes every row.
    filter: Option<Expr>,
}

impl Delete {
    pub fn new(table: impl Into<TableRef>, filter: Expr) -> Result<Self> {
        let table = table.into();

        if !filter.is_boolean() {
            return Err(Error::invalid_predicate(format!(
                "DELETE filter is not a boolean expression; table={table}"
            )));
        }

        let mut null_comparison = false;

        visit::for_each_expr(&filter, |expr| {
            if let Expr::BinaryOp(expr) = expr {
                null_comparison |= expr.lhs.is_value_null() || expr.rhs.is_value_null();
            }
        });

        if null_comparison {
            return Err(Error::invalid_predicate(format!(
                "DELETE filter compares against a NULL literal, use IS NULL instead; table={table}"
            )));
        }

        Ok(Self {
            table,
            filter: Some(filter),
        })
    }

    /// A delete without a condition.
    pub fn all(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            filter: None,
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    pub fn params(&self) -> Vec<Value> {
        self.filter.as_ref().map(Expr::params).unwrap_or_default()
    }
}

impl Statement {
    pub fn is_delete(&self) -> bool {
        matches!(self, Statement::Delete(..))
    }

    /// Attempts to return a reference to an inner [`Delete`].
    pub fn as_delete(&self) -> Option<&Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
        }
    }
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Self {
        Self::Delete(src)
    }
}
