use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
    SqlServer,
}

impl Flavor {
    /// Opening and closing identifier quotes.
    pub(super) fn quotes(self) -> (char, char) {
        match self {
            Self::Mysql => ('`', '`'),
            Self::Postgresql | Self::Sqlite => ('"', '"'),
            Self::SqlServer => ('[', ']'),
        }
    }
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn sql_server() -> Serializer {
        Serializer {
            flavor: Flavor::SqlServer,
        }
    }
}
