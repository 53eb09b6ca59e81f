mod driver;
mod invalid_connection_url;
mod invalid_predicate;
mod invalid_schema;
mod no_primary_key;
mod no_table;
mod null_input;
mod null_primary_key;
mod unmapped_member;

use driver::DriverError;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_predicate::InvalidPredicate;
use invalid_schema::InvalidSchema;
use no_primary_key::NoPrimaryKey;
use no_table::NoTable;
use null_input::NullInput;
use null_primary_key::NullPrimaryKey;
use std::sync::Arc;
use unmapped_member::UnmappedMember;

/// An error that can occur in Skiff.
///
/// Mapping and argument errors are raised before any SQL is sent to the
/// database. Errors returned by a [`Session`](crate::Session) are carried
/// through untouched as driver errors.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Driver(DriverError),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidPredicate(InvalidPredicate),
    InvalidSchema(InvalidSchema),
    NoPrimaryKey(NoPrimaryKey),
    NoTable(NoTable),
    NullInput(NullInput),
    NullPrimaryKey(NullPrimaryKey),
    UnmappedMember(UnmappedMember),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidPredicate(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            NoPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            NoTable(err) => core::fmt::Display::fmt(err, f),
            NullInput(err) => core::fmt::Display::fmt(err, f),
            NullPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            UnmappedMember(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown skiff error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for anyhow::Error {
    fn into_error(self) -> Error {
        Error::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::no_table("app::Customer")
            .context(anyhow::anyhow!("resolving mapping"))
            .context(anyhow::anyhow!("Customer delete"));

        assert_eq!(
            err.to_string(),
            "Customer delete: resolving mapping: no table mapping for entity type `app::Customer`"
        );
    }

    #[test]
    fn no_table_error() {
        let err = Error::no_table("app::Customer");
        assert!(err.is_no_table());
        assert!(!err.is_no_primary_key());
        assert_eq!(
            err.to_string(),
            "no table mapping for entity type `app::Customer`"
        );
    }

    #[test]
    fn no_primary_key_error() {
        let err = Error::no_primary_key("app::AuditLog");
        assert!(err.is_no_primary_key());
        assert_eq!(
            err.to_string(),
            "entity type `app::AuditLog` does not define a primary key"
        );
    }

    #[test]
    fn null_primary_key_error() {
        let err = Error::null_primary_key("app::Customer", "id");
        assert!(err.is_null_primary_key());
        assert_eq!(
            err.to_string(),
            "primary key `id` of entity type `app::Customer` is null"
        );
    }

    #[test]
    fn unmapped_member_error() {
        let err = Error::unmapped_member("app::Customer", "cached_score");
        assert!(err.is_unmapped_member());
        assert_eq!(
            err.to_string(),
            "member `cached_score` of entity type `app::Customer` is not mapped to a column"
        );
    }

    #[test]
    fn null_input_error() {
        let err = Error::null_input("condition");
        assert!(err.is_null_input());
        assert_eq!(err.to_string(), "argument `condition` must not be null");
    }

    #[test]
    fn invalid_predicate_error() {
        let err = Error::invalid_predicate("cannot compare with NULL using `<`");
        assert!(err.is_invalid_predicate());
        assert_eq!(
            err.to_string(),
            "invalid predicate: cannot compare with NULL using `<`"
        );
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("duplicate column `Id`");
        assert!(err.is_invalid_schema());
        assert_eq!(err.to_string(), "invalid schema: duplicate column `Id`");
    }

    #[test]
    fn driver_error_keeps_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer hung up");
        let err = Error::driver(io);
        assert!(err.is_driver());
        assert_eq!(err.to_string(), "peer hung up");
        assert!(std::error::Error::source(&err).is_some());
    }
}
