use super::IntoExpr;
use skiff_core::{schema::Entity, stmt::Predicate};

use std::{fmt, marker::PhantomData};

/// A typed delete over the rows of entity `E`.
///
/// A delete must either carry a condition or explicitly opt into deleting
/// every row with [`Delete::all`]. Executing a delete created with
/// [`Delete::new`] and never given a condition fails with a null input error.
pub struct Delete<E> {
    filter: Filter,
    _p: PhantomData<fn() -> E>,
}

#[derive(Debug, Clone)]
pub(crate) enum Filter {
    /// No condition was supplied
    Missing,

    /// Every row
    All,

    Where(Predicate),
}

impl<E: Entity> Delete<E> {
    pub fn new() -> Self {
        Self {
            filter: Filter::Missing,
            _p: PhantomData,
        }
    }

    /// A delete without a condition.
    pub fn all() -> Self {
        Self {
            filter: Filter::All,
            _p: PhantomData,
        }
    }

    /// Restricts the delete to rows matching `expr`. Repeated calls are
    /// combined with `AND`.
    pub fn filter(mut self, expr: impl IntoExpr<bool>) -> Self {
        let expr = expr.into_expr();

        self.filter = match self.filter {
            Filter::Missing | Filter::All => Filter::Where(expr.untyped),
            Filter::Where(existing) => Filter::Where(Predicate::and(existing, expr.untyped)),
        };

        self
    }

    pub(crate) fn into_filter(self) -> Filter {
        self.filter
    }
}

impl<E: Entity> Default for Delete<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Delete<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delete")
            .field("filter", &self.filter)
            .finish()
    }
}
