use async_trait::async_trait;
use deadpool_postgres::{
    Transaction as PgTransaction, TransactionBuilder as PgTransactionBuilder,
};
use tokio_postgres::IsolationLevel;
use tokio_postgres::types::ToSql;

use crate::error::PgAdapterError;
use crate::executor::Executor;
use crate::query;
use crate::rows::{Row, Rows};
use crate::statement::{Prepared, StatementSource};

/// Transaction wrapper; same query surface as [`crate::Client`] plus
/// commit/rollback.
///
/// Both completions consume the value, so a transaction cannot be used after
/// either. Dropping an unfinished `Tx` leaves cleanup to the driver (implicit
/// rollback).
pub struct Tx<'a> {
    tx: PgTransaction<'a>,
}

impl<'a> Tx<'a> {
    pub(crate) fn new(tx: PgTransaction<'a>) -> Self {
        Self { tx }
    }

    /// Commit the transaction.
    ///
    /// # Errors
    /// Returns the driver's commit error untouched.
    pub async fn commit(self) -> Result<(), PgAdapterError> {
        self.tx.commit().await?;
        tracing::debug!("transaction committed");
        Ok(())
    }

    /// Roll back the transaction.
    ///
    /// # Errors
    /// Returns the driver's rollback error untouched.
    pub async fn rollback(self) -> Result<(), PgAdapterError> {
        self.tx.rollback().await?;
        tracing::debug!("transaction rolled back");
        Ok(())
    }

    /// Re-prepare an existing statement inside this transaction's session.
    ///
    /// Depends on the [`StatementSource`] capability rather than a concrete
    /// statement type.
    ///
    /// # Errors
    /// Returns `PgAdapterError::ForeignStatement` when the statement does not
    /// expose its SQL, or the driver's prepare error untouched.
    pub async fn rebind(&self, stmt: &dyn StatementSource) -> Result<Prepared, PgAdapterError> {
        let Some(sql) = stmt.rebind_sql() else {
            return Err(PgAdapterError::ForeignStatement(
                "statement does not expose its SQL for rebinding".to_string(),
            ));
        };
        query::prepare(&*self.tx, sql).await
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
        Ok(self.tx.execute(prepared.statement(), params).await?)
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
        query::query_statement(&*self.tx, prepared.statement(), params).await
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
            self.tx.query_one(prepared.statement(), params).await?,
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
            .tx
            .query_opt(prepared.statement(), params)
            .await?
            .map(Row::new))
    }

    /// Access the underlying driver transaction.
    #[must_use]
    pub fn raw(&self) -> &tokio_postgres::Transaction<'a> {
        &self.tx
    }
}

#[async_trait]
impl Executor for Tx<'_> {
    async fn prepare(&self, sql: &str) -> Result<Prepared, PgAdapterError> {
        query::prepare(&*self.tx, sql).await
    }

    async fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, PgAdapterError> {
        query::execute(&*self.tx, sql, params).await
    }

    async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Rows, PgAdapterError> {
        query::query(&*self.tx, sql, params).await
    }

    async fn query_row(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Row, PgAdapterError> {
        query::query_row(&*self.tx, sql, params).await
    }

    async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, PgAdapterError> {
        query::query_opt(&*self.tx, sql, params).await
    }

    async fn batch_execute(&self, sql: &str) -> Result<(), PgAdapterError> {
        query::batch_execute(&*self.tx, sql).await
    }
}

/// Builder for transactions with explicit characteristics; every option is
/// forwarded unchanged to the driver's builder.
pub struct TxBuilder<'a> {
    builder: PgTransactionBuilder<'a>,
}

impl<'a> TxBuilder<'a> {
    pub(crate) fn new(builder: PgTransactionBuilder<'a>) -> Self {
        Self { builder }
    }

    #[must_use]
    pub fn isolation_level(mut self, isolation_level: IsolationLevel) -> Self {
        self.builder = self.builder.isolation_level(isolation_level);
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.builder = self.builder.read_only(read_only);
        self
    }

    #[must_use]
    pub fn deferrable(mut self, deferrable: bool) -> Self {
        self.builder = self.builder.deferrable(deferrable);
        self
    }

    /// Start the transaction.
    ///
    /// # Errors
    /// Returns the driver's begin error untouched.
    pub async fn start(self) -> Result<Tx<'a>, PgAdapterError> {
        let tx = self.builder.start().await?;
        tracing::debug!("transaction started");
        Ok(Tx::new(tx))
    }
}
