use super::{Ident, Params, ToSql};

use skiff_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table().name);

        match self.filter() {
            Some(filter) => {
                assert!(
                    filter.is_boolean(),
                    "DELETE filter is not a boolean expression; filter={filter:?}"
                );

                fmt!(f, "DELETE FROM ", table, " WHERE ", filter);
            }
            None => {
                fmt!(f, "DELETE FROM ", table);
            }
        }
    }
}
