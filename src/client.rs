use async_trait::async_trait;
use deadpool_postgres::Object;
use tokio_postgres::types::ToSql;

use crate::error::PgAdapterError;
use crate::executor::Executor;
use crate::query;
use crate::rows::{Row, Rows};
use crate::statement::Prepared;
use crate::transaction::{Tx, TxBuilder};

/// A pooled connection, the executor half of the adapter.
///
/// Owns one checked-out deadpool object; dropping the `Client` returns the
/// connection to the pool. The query surface lives on the [`Executor`] impl.
pub struct Client {
    conn: Object,
}

impl Client {
    pub(crate) fn new(conn: Object) -> Self {
        Self { conn }
    }

    /// Begin a transaction with the driver's default characteristics.
    ///
    /// # Errors
    /// Returns the driver's begin error untouched.
    pub async fn transaction(&mut self) -> Result<Tx<'_>, PgAdapterError> {
        let tx = self.conn.transaction().await?;
        tracing::debug!("transaction started");
        Ok(Tx::new(tx))
    }

    /// Begin a transaction with explicit characteristics; options are
    /// forwarded unchanged to the driver's builder.
    pub fn build_transaction(&mut self) -> TxBuilder<'_> {
        TxBuilder::new(self.conn.build_transaction())
    }

    /// Execute a prepared statement and return the affected-row count.
    ///
    /// # Errors
    /// Returns the driver's execution error untouched.
    pub async fn execute_prepared(
        &self,
        prepared: &Prepared,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, PgAdapterError> {
        Ok(self.conn.execute(prepared.statement(), params).await?)
    }

    /// Run a prepared query and return a row cursor.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    pub async fn query_prepared(
        &self,
        prepared: &Prepared,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Rows, PgAdapterError> {
        query::query_statement(&**self.conn, prepared.statement(), params).await
    }

    /// Run a prepared query expected to return exactly one row.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    pub async fn query_row_prepared(
        &self,
        prepared: &Prepared,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Row, PgAdapterError> {
        Ok(Row::new(
            self.conn.query_one(prepared.statement(), params).await?,
        ))
    }

    /// Run a prepared query expected to return zero or one row.
    ///
    /// # Errors
    /// Returns the driver's error untouched.
    pub async fn query_opt_prepared(
        &self,
        prepared: &Prepared,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, PgAdapterError> {
        Ok(self
            .conn
            .query_opt(prepared.statement(), params)
            .await?
            .map(Row::new))
    }

    /// Access the underlying driver client.
    #[must_use]
    pub fn raw(&self) -> &tokio_postgres::Client {
        &self.conn
    }
}

#[async_trait]
impl Executor for Client {
    async fn prepare(&self, sql: &str) -> Result<Prepared, PgAdapterError> {
        query::prepare(&**self.conn, sql).await
    }

    async fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, PgAdapterError> {
        query::execute(&**self.conn, sql, params).await
    }

    async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Rows, PgAdapterError> {
        query::query(&**self.conn, sql, params).await
    }

    async fn query_row(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Row, PgAdapterError> {
        query::query_row(&**self.conn, sql, params).await
    }

    async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, PgAdapterError> {
        query::query_opt(&**self.conn, sql, params).await
    }

    async fn batch_execute(&self, sql: &str) -> Result<(), PgAdapterError> {
        query::batch_execute(&**self.conn, sql).await
    }
}
