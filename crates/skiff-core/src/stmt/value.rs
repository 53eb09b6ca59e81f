use std::fmt;

/// A value bound to a statement parameter.
///
/// Values only ever reach SQL text as placeholders; the serializer never
/// inlines them.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Unsigned 32-bit integer
    U32(u32),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in diagnostics that must not print the value
    /// itself.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::F64(_) => "F64",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::U32(_) => "U32",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Self::F64(v) => v.fmt(f),
            Self::I32(v) => v.fmt(f),
            Self::I64(v) => v.fmt(f),
            Self::Null => f.write_str("NULL"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::U32(v) => v.fmt(f),
        }
    }
}

macro_rules! impl_from {
    ( $( $var:ident($t:ty) ;)* ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::$var(src)
                }
            }

            impl From<&$t> for Value {
                fn from(src: &$t) -> Self {
                    Self::$var(src.clone())
                }
            }

            impl From<&Option<$t>> for Value {
                fn from(src: &Option<$t>) -> Self {
                    match src {
                        Some(value) => Self::$var(value.clone()),
                        None => Self::Null,
                    }
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool);
    Bytes(Vec<u8>);
    F64(f64);
    I32(i32);
    I64(i64);
    String(String);
    U32(u32);
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_borrowed_option() {
        let nick = Some("ace".to_string());
        assert_eq!(Value::String("ace".to_string()), Value::from(&nick));
        assert_eq!(Value::Null, Value::from(&None::<String>));

        assert_eq!(Value::I64(7), Value::from(&Some(7i64)));
        assert_eq!(Value::Null, Value::from(&None::<u32>));
        assert_eq!(Value::Bytes(vec![1, 2]), Value::from(&Some(vec![1u8, 2])));
    }

    #[test]
    fn from_owned_option() {
        assert_eq!(Value::String("acme".to_string()), Value::from(Some("acme")));
        assert_eq!(Value::Null, Value::from(None::<bool>));
    }
}
