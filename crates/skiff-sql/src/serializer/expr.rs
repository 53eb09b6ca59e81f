use super::{Delimited, Ident, Params, ToSql};

use skiff_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                let operands = expr.operands.iter().map(Junct);
                fmt!(f, Delimited(operands, " AND "));
            }
            BinaryOp(expr) => {
                assert!(!expr.lhs.is_value_null());
                assert!(!expr.rhs.is_value_null());

                fmt!(f, Operand(&expr.lhs), " ", &expr.op, " ", Operand(&expr.rhs));
            }
            Column(expr) => {
                fmt!(f, Ident(&expr.column));
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, Operand(&expr.expr), " IS NOT NULL");
                } else {
                    fmt!(f, Operand(&expr.expr), " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT (", &*expr.expr, ")");
            }
            Or(expr) => {
                let operands = expr.operands.iter().map(Junct);
                fmt!(f, Delimited(operands, " OR "));
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

/// An operand of `AND` or `OR`. Nested conjunctions and disjunctions are
/// parenthesized so the output never depends on operator precedence.
struct Junct<'a>(&'a stmt::Expr);

impl ToSql for Junct<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.0 {
            stmt::Expr::And(_) | stmt::Expr::Or(_) => fmt!(f, "(", self.0, ")"),
            expr => expr.to_sql(f),
        }
    }
}

/// An operand of a comparison or null check. Anything but a column or a
/// value is parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.0 {
            expr @ (stmt::Expr::Column(_) | stmt::Expr::Value(_)) => expr.to_sql(f),
            expr => fmt!(f, "(", expr, ")"),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
