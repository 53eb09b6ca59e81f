use super::{Expr, IntoExpr};
use skiff_core::{
    schema::{Entity, EntityType},
    stmt::{BinaryOp, Predicate},
};

use std::{fmt, marker::PhantomData};

/// A typed reference to a member of entity `E` whose values have type `T`.
///
/// Paths are usually obtained from the `fields()` function generated by
/// `#[derive(Entity)]`.
pub struct Path<E, T> {
    name: &'static str,
    _p: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Path<E, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    /// Name of the referenced member.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Entity, T> Path<E, T> {
    pub(super) fn untyped(&self) -> Predicate {
        Predicate::member(EntityType::of::<E>(), self.name)
    }

    fn compare(self, op: BinaryOp, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(Predicate::binary_op(
            self.untyped(),
            op,
            rhs.into_expr().untyped,
        ))
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Ne, rhs)
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Ge, rhs)
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.compare(BinaryOp::Le, rhs)
    }

    pub fn is_null(self) -> Expr<bool> {
        Expr::from_untyped(Predicate::is_null(self.untyped()))
    }

    pub fn is_not_null(self) -> Expr<bool> {
        Expr::from_untyped(Predicate::is_not_null(self.untyped()))
    }
}

impl<E, T> Clone for Path<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Path<E, T> {}

impl<E, T> fmt::Debug for Path<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.name).finish()
    }
}
