use async_trait::async_trait;
use tokio_postgres::types::ToSql;

use crate::error::PgAdapterError;
use crate::rows::{Row, Rows};
use crate::statement::Prepared;

/// The query surface shared by [`crate::Client`] and [`crate::Tx`].
///
/// Lets callers be generic over "something that can run queries" without
/// caring whether a transaction is open. Every method forwards directly to
/// the underlying driver handle.
#[async_trait]
pub trait Executor {
    /// Prepare a statement.
    ///
    /// # Errors
    /// Returns the driver's prepare error untouched.
    async fn prepare(&self, sql: &str) -> Result<Prepared, PgAdapterError>;

    /// Execute a statement and return the affected-row count.
    ///
    /// # Errors
    /// Returns the driver's execution error untouched.
    async fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, PgAdapterError>;

    /// Run a query and return a row cursor.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Rows, PgAdapterError>;

    /// Run a query expected to return exactly one row.
    ///
    /// Zero rows (or more than one) surface the driver's row-count error.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    async fn query_row(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Row, PgAdapterError>;

    /// Run a query expected to return zero or one row; zero rows is `None`,
    /// never a wrapper around nothing.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, PgAdapterError>;

    /// Execute a multi-statement script via the driver's batch interface.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    async fn batch_execute(&self, sql: &str) -> Result<(), PgAdapterError>;
}
