mod dialect;
pub use dialect::Dialect;

use crate::{async_trait, stmt::Value};

use std::fmt::Debug;

/// Opens sessions against a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect the database speaks. Statements executed through this
    /// driver's sessions are rendered for it.
    fn dialect(&self) -> Dialect;

    /// Open a new session.
    async fn connect(&self) -> crate::Result<Box<dyn Session>>;
}

/// A live database session.
///
/// Sessions are used by one caller at a time; concurrent work opens separate
/// sessions.
#[async_trait]
pub trait Session: Debug + Send + 'static {
    /// Execute a statement that returns no rows.
    ///
    /// `sql` uses the placeholder syntax of the driver's [`Dialect`] and
    /// `params` holds exactly one value per placeholder, in order. Returns
    /// the number of affected rows. Failures are reported with
    /// [`Error::driver`](crate::Error::driver).
    async fn exec_non_query(&mut self, sql: &str, params: &[Value]) -> crate::Result<u64>;
}
