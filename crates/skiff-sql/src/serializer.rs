#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use skiff_core::{
    driver::Dialect,
    stmt::{Statement, Value},
};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

/// A serialized statement with its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// SQL text with one placeholder per parameter
    pub sql: String,

    /// Parameters in placeholder order
    pub params: Vec<Value>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn for_dialect(dialect: Dialect) -> Self {
        let flavor = match dialect {
            Dialect::Mysql => Flavor::Mysql,
            Dialect::Postgresql => Flavor::Postgresql,
            Dialect::Sqlite => Flavor::Sqlite,
            Dialect::SqlServer => Flavor::SqlServer,
        };

        Self { flavor }
    }

    pub fn dialect(&self) -> Dialect {
        match self.flavor {
            Flavor::Mysql => Dialect::Mysql,
            Flavor::Postgresql => Dialect::Postgresql,
            Flavor::Sqlite => Dialect::Sqlite,
            Flavor::SqlServer => Dialect::SqlServer,
        }
    }

    /// Writes `stmt` as SQL, pushing every bound value to `params`.
    ///
    /// Literal values never appear in the returned text.
    ///
    /// Filters reaching the serializer are boolean-shaped and free of null
    /// literal comparisons; [`Delete::new`](skiff_core::stmt::Delete::new)
    /// guarantees both.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Serializes `stmt`, collecting its parameters.
    pub fn render(&self, stmt: &Statement) -> Rendered {
        let mut params = vec![];
        let sql = self.serialize(stmt, &mut params);

        Rendered { sql, params }
    }
}
