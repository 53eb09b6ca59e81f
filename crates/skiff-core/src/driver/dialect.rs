use std::fmt;

/// SQL dialects the serializer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// Looks a dialect up by the scheme of a connection URL.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "mysql" => Some(Self::Mysql),
            "postgres" | "postgresql" => Some(Self::Postgresql),
            "sqlite" => Some(Self::Sqlite),
            "mssql" | "sqlserver" => Some(Self::SqlServer),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::SqlServer => "sqlserver",
        })
    }
}
