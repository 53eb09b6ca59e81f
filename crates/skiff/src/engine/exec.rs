use super::Engine;
use crate::Result;
use skiff_core::{
    driver::Session,
    stmt::{Statement, Value},
};
use skiff_sql::Rendered;

impl Engine {
    /// Renders `stmt` for the session's dialect and executes it.
    pub(crate) async fn exec(&self, session: &mut dyn Session, stmt: &Statement) -> Result<u64> {
        let Rendered { sql, params } = self.serializer.render(stmt);

        self.exec_sql(session, &sql, &params).await
    }

    /// Executes SQL text as is. Errors raised by the session are returned
    /// unchanged.
    pub(crate) async fn exec_sql(
        &self,
        session: &mut dyn Session,
        sql: &str,
        params: &[Value],
    ) -> Result<u64> {
        // Parameter values are never traced, only their count.
        tracing::debug!(target: "skiff::sql", sql = %sql, params = params.len(), "executing statement");

        session.exec_non_query(sql, params).await
    }
}
