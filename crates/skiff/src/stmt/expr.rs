use super::IntoExpr;
use skiff_core::stmt::{Predicate, Value};

use std::{marker::PhantomData, ops::Not};

/// A typed predicate expression.
#[derive(Debug)]
pub struct Expr<T> {
    /// The un-typed expression
    pub(crate) untyped: Predicate,

    /// `T` is the type of the expression
    pub(crate) _p: PhantomData<fn() -> T>,
}

impl<T> Expr<T> {
    /// Create an expression from the given value.
    pub(crate) fn from_value(value: Value) -> Self {
        Self {
            untyped: Predicate::Value(value),
            _p: PhantomData,
        }
    }

    pub fn from_untyped(untyped: impl Into<Predicate>) -> Self {
        Self {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn cast<U>(self) -> Expr<U> {
        Expr {
            untyped: self.untyped,
            _p: PhantomData,
        }
    }

    pub fn into_untyped(self) -> Predicate {
        self.untyped
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(Predicate::and(self.untyped, rhs.into_expr().untyped))
    }

    /// Conjunction of every expression.
    ///
    /// An empty iterator yields the literal `true`, which is not a valid
    /// delete condition; use [`Delete::all`](super::Delete::all) to delete
    /// every row.
    pub fn and_all<E>(exprs: impl IntoIterator<Item = E>) -> Self
    where
        E: IntoExpr<bool>,
    {
        exprs
            .into_iter()
            .map(|expr| expr.into_expr().untyped)
            .reduce(Predicate::and)
            .map(Self::from_untyped)
            .unwrap_or_else(|| Self::from_value(Value::Bool(true)))
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(Predicate::or(self.untyped, rhs.into_expr().untyped))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        !self
    }
}

impl Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(Predicate::not(self.untyped))
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> From<Expr<T>> for Predicate {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}
