use skiff_core::{
    schema::TypeMapping,
    stmt::{BinaryOp, Expr, ExprAnd, ExprOr, Predicate, PredicateMember},
    Error, Result,
};

/// Lowers a predicate over `E`'s members into a relational expression over
/// its table's columns.
pub(super) struct LowerPredicate<'a, E> {
    mapping: &'a TypeMapping<E>,
}

impl<'a, E> LowerPredicate<'a, E> {
    pub(super) fn new(mapping: &'a TypeMapping<E>) -> Self {
        Self { mapping }
    }

    /// Lowers a predicate that must stand on its own as a WHERE clause.
    pub(super) fn lower_root(&self, predicate: &Predicate) -> Result<Expr> {
        self.lower_boolean(predicate, "the delete condition")
    }

    fn lower_boolean(&self, predicate: &Predicate, position: &str) -> Result<Expr> {
        let expr = self.lower(predicate)?;

        if let Expr::Value(value) = &expr {
            return Err(Error::invalid_predicate(format!(
                "{position} is a {} literal, not a condition; entity={}",
                value.kind_name(),
                self.mapping.entity()
            )));
        }

        if !expr.is_boolean() {
            return Err(Error::invalid_predicate(format!(
                "{position} is not a boolean expression; entity={}",
                self.mapping.entity()
            )));
        }

        Ok(expr)
    }

    fn lower(&self, predicate: &Predicate) -> Result<Expr> {
        match predicate {
            Predicate::And(operands) => {
                let operands = self.lower_operands(operands, "AND")?;
                Ok(ExprAnd { operands }.into())
            }
            Predicate::BinaryOp { lhs, op, rhs } => self.lower_binary_op(lhs, *op, rhs),
            Predicate::IsNull { negate, expr } => {
                let expr = self.lower(expr)?;

                if expr.is_value() {
                    return Err(Error::invalid_predicate(format!(
                        "null check on a literal; entity={}",
                        self.mapping.entity()
                    )));
                }

                Ok(if *negate {
                    Expr::is_not_null(expr)
                } else {
                    Expr::is_null(expr)
                })
            }
            Predicate::Member(member) => self.lower_member(member),
            Predicate::Not(expr) => Ok(Expr::not(self.lower_boolean(expr, "the operand of NOT")?)),
            Predicate::Or(operands) => {
                let operands = self.lower_operands(operands, "OR")?;
                Ok(ExprOr { operands }.into())
            }
            Predicate::Value(value) => Ok(Expr::Value(value.clone())),
        }
    }

    fn lower_operands(&self, operands: &[Predicate], op: &str) -> Result<Vec<Expr>> {
        if operands.len() < 2 {
            return Err(Error::invalid_predicate(format!(
                "{op} requires at least two operands; entity={}",
                self.mapping.entity()
            )));
        }

        let position = format!("an operand of {op}");

        operands
            .iter()
            .map(|operand| self.lower_boolean(operand, &position))
            .collect()
    }

    /// Comparisons against a literal null become null checks. `=` maps to
    /// `IS NULL` and `<>` to `IS NOT NULL`; ordering operators have no null
    /// semantics and are rejected.
    fn lower_binary_op(&self, lhs: &Predicate, op: BinaryOp, rhs: &Predicate) -> Result<Expr> {
        let entity = self.mapping.entity();

        if lhs.is_value_null() && rhs.is_value_null() {
            return Err(Error::invalid_predicate(format!(
                "comparison between two null literals; entity={entity}"
            )));
        }

        let lhs = self.lower(lhs)?;
        let rhs = self.lower(rhs)?;

        let other = match (lhs.is_value_null(), rhs.is_value_null()) {
            (true, _) => rhs,
            (_, true) => lhs,
            _ => return Ok(Expr::binary_op(lhs, op, rhs)),
        };

        if op.is_ordering() {
            return Err(Error::invalid_predicate(format!(
                "`{op}` comparison against null; entity={entity}"
            )));
        }

        if !other.is_column() {
            return Err(Error::invalid_predicate(format!(
                "null comparison without a member operand; entity={entity}"
            )));
        }

        Ok(if op.is_eq() {
            Expr::is_null(other)
        } else {
            Expr::is_not_null(other)
        })
    }

    fn lower_member(&self, member: &PredicateMember) -> Result<Expr> {
        let entity = self.mapping.entity();

        if member.entity != entity {
            return Err(Error::invalid_predicate(format!(
                "member `{}` of entity type `{}` used in a predicate over `{entity}`",
                member.name, member.entity
            )));
        }

        match self.mapping.member(member.name) {
            Some(mapped) => Ok(Expr::column(self.mapping.table(), mapped.column())),
            None => Err(Error::unmapped_member(entity.name(), member.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_core::schema::{Descriptor, Entity, EntityType};
    use skiff_core::stmt::Value;

    struct Customer {
        id: i64,
        nick: Option<String>,
    }

    impl Entity for Customer {
        fn describe() -> Descriptor<Self> {
            Descriptor::<Self>::new()
                .table("Customer")
                .key("id", "Id", |c| Value::from(c.id))
                .column("nick", "Nick", |c| Value::from(&c.nick))
                .transient("display")
        }
    }

    fn member(name: &'static str) -> Predicate {
        Predicate::member(EntityType::of::<Customer>(), name)
    }

    fn lower(predicate: Predicate) -> Result<Expr> {
        let mapping = TypeMapping::from_descriptor(Customer::describe()).unwrap();
        LowerPredicate::new(&mapping).lower_root(&predicate)
    }

    fn nick() -> Expr {
        Expr::column("Customer", "Nick")
    }

    #[test]
    fn eq_null_is_null_check() {
        let eq = Predicate::binary_op(member("nick"), BinaryOp::Eq, Value::Null);
        assert_eq!(Expr::is_null(nick()), lower(eq).unwrap());

        let ne = Predicate::binary_op(Value::Null, BinaryOp::Ne, member("nick"));
        assert_eq!(Expr::is_not_null(nick()), lower(ne).unwrap());
    }

    #[test]
    fn ordering_against_null_is_rejected() {
        for op in [BinaryOp::Lt, BinaryOp::Le, BinaryOp::Gt, BinaryOp::Ge] {
            let err = lower(Predicate::binary_op(member("id"), op, Value::Null)).unwrap_err();
            assert!(err.is_invalid_predicate(), "{err}");
        }
    }

    #[test]
    fn null_without_member_is_rejected() {
        let both = Predicate::binary_op(Value::Null, BinaryOp::Eq, Value::Null);
        assert!(lower(both).unwrap_err().is_invalid_predicate());

        let literal = Predicate::binary_op(Value::I64(1), BinaryOp::Eq, Value::Null);
        assert!(lower(literal).unwrap_err().is_invalid_predicate());

        let check = Predicate::is_null(Value::Null);
        assert!(lower(check).unwrap_err().is_invalid_predicate());
    }

    #[test]
    fn non_boolean_roots_are_rejected() {
        assert!(lower(Predicate::Value(Value::Bool(true)))
            .unwrap_err()
            .is_invalid_predicate());
        assert!(lower(Predicate::Value(Value::Null))
            .unwrap_err()
            .is_invalid_predicate());
        assert!(lower(member("id")).unwrap_err().is_invalid_predicate());

        let and = Predicate::And(vec![
            Predicate::is_null(member("nick")),
            Predicate::Value(Value::Bool(true)),
        ]);
        assert!(lower(and).unwrap_err().is_invalid_predicate());
    }

    #[test]
    fn transient_and_unknown_members_are_unmapped() {
        let err = lower(Predicate::is_null(member("display"))).unwrap_err();
        assert!(err.is_unmapped_member());
        assert_eq!(
            "member `display` of entity type `Customer` is not mapped to a column",
            err.to_string()
        );

        let err = lower(Predicate::binary_op(member("missing"), BinaryOp::Eq, Value::I64(1)));
        assert!(err.unwrap_err().is_unmapped_member());
    }

    #[test]
    fn members_of_other_entities_are_rejected() {
        struct Other;

        let foreign = Predicate::member(EntityType::of::<Other>(), "id");
        let err = lower(Predicate::binary_op(foreign, BinaryOp::Eq, Value::I64(1))).unwrap_err();
        assert!(err.is_invalid_predicate());
    }

    #[test]
    fn combinators_keep_shape_and_order() {
        let predicate = Predicate::or(
            Predicate::binary_op(member("id"), BinaryOp::Gt, Value::I64(1)),
            Predicate::not(Predicate::is_not_null(member("nick"))),
        );

        let expected = Expr::or(
            Expr::gt(Expr::column("Customer", "Id"), Value::I64(1)),
            Expr::not(Expr::is_not_null(nick())),
        );

        assert_eq!(expected, lower(predicate).unwrap());
    }
}
