use super::{
    visit, ExprAnd, ExprBinaryOp, ExprColumn, ExprIsNull, ExprNot, ExprOr, Value, Visit,
};

/// A node of the relational expression tree.
///
/// This is the target of predicate lowering and the input of the SQL
/// serializer. Literal values are always carried as [`Expr::Value`] and are
/// bound as parameters when rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Reference to a column of the statement's target table
    Column(ExprColumn),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// Bound parameter
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Returns true if the expression is a literal null.
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(..))
    }

    /// Returns true if the node produces a boolean when evaluated by the
    /// database and may therefore stand as a WHERE clause.
    ///
    /// Bare literals and bare column references are not boolean-shaped, even
    /// when the literal is a `Value::Bool`.
    pub fn is_boolean(&self) -> bool {
        match self {
            Self::And(_) | Self::Or(_) | Self::Not(_) | Self::BinaryOp(_) | Self::IsNull(_) => true,
            Self::Column(_) | Self::Value(_) => false,
        }
    }

    /// Values bound by this expression, in depth-first left-to-right order.
    ///
    /// This is the order in which the serializer assigns placeholders.
    pub fn params(&self) -> Vec<Value> {
        struct Collect(Vec<Value>);

        impl Visit for Collect {
            fn visit_value(&mut self, i: &Value) {
                self.0.push(i.clone());
            }
        }

        let mut collect = Collect(vec![]);
        visit::visit_expr(&mut collect, self);
        collect.0
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::I64(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}
