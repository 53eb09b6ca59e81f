use super::{BinaryOp, Value};
use crate::schema::EntityType;

/// A condition over an entity's members, before it is mapped to columns.
///
/// Members are referenced by name. Lowering resolves each name against the
/// entity's mapping and produces an [`Expr`](super::Expr).
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),

    BinaryOp {
        lhs: Box<Predicate>,
        op: BinaryOp,
        rhs: Box<Predicate>,
    },

    IsNull {
        negate: bool,
        expr: Box<Predicate>,
    },

    Member(PredicateMember),

    Not(Box<Predicate>),

    Or(Vec<Predicate>),

    Value(Value),
}

/// A member of a specific entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateMember {
    pub entity: EntityType,
    pub name: &'static str,
}

impl Predicate {
    pub fn member(entity: EntityType, name: &'static str) -> Self {
        Self::Member(PredicateMember { entity, name })
    }

    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        match (lhs.into(), rhs.into()) {
            (Self::And(mut lhs), Self::And(rhs)) => {
                lhs.extend(rhs);
                Self::And(lhs)
            }
            (Self::And(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::And(lhs)
            }
            (lhs, rhs) => Self::And(vec![lhs, rhs]),
        }
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        match (lhs.into(), rhs.into()) {
            (Self::Or(mut lhs), Self::Or(rhs)) => {
                lhs.extend(rhs);
                Self::Or(lhs)
            }
            (Self::Or(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::Or(lhs)
            }
            (lhs, rhs) => Self::Or(vec![lhs, rhs]),
        }
    }

    pub fn not(expr: impl Into<Self>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::IsNull {
            negate: false,
            expr: Box::new(expr.into()),
        }
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Self::IsNull {
            negate: true,
            expr: Box::new(expr.into()),
        }
    }

    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }
}

impl From<Value> for Predicate {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<PredicateMember> for Predicate {
    fn from(value: PredicateMember) -> Self {
        Self::Member(value)
    }
}
