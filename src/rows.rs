use std::fmt;
use std::pin::Pin;

use futures_util::TryStreamExt;
use tokio_postgres::row::RowIndex;
use tokio_postgres::types::{FromSql, Type};
use tokio_postgres::{RowStream, Statement};

use crate::Column;
use crate::error::PgAdapterError;

/// Cursor over a query's result rows.
///
/// Wraps the driver's [`RowStream`]; dropping the cursor before exhaustion
/// releases it and leaves the connection usable.
pub struct Rows {
    statement: Statement,
    stream: Pin<Box<RowStream>>,
    finished: bool,
}

impl Rows {
    pub(crate) fn new(statement: Statement, stream: RowStream) -> Self {
        Self {
            statement,
            stream: Box::pin(stream),
            finished: false,
        }
    }

    /// Advance the cursor.
    ///
    /// Yields `Ok(None)` once the result is exhausted; after end or error the
    /// cursor stays finished.
    ///
    /// # Errors
    /// Returns the driver's streaming error untouched.
    pub async fn next(&mut self) -> Result<Option<Row>, PgAdapterError> {
        if self.finished {
            return Ok(None);
        }
        match self.stream.try_next().await {
            Ok(Some(row)) => Ok(Some(Row::new(row))),
            Ok(None) => {
                self.finished = true;
                Ok(None)
            }
            Err(e) => {
                self.finished = true;
                Err(e.into())
            }
        }
    }

    /// Column names of the result, available even when no row matched.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.statement
            .columns()
            .iter()
            .map(|col| col.name().to_owned())
            .collect()
    }

    /// Driver-reported column types, one entry per column in result order.
    #[must_use]
    pub fn column_types(&self) -> Vec<Type> {
        self.statement
            .columns()
            .iter()
            .map(|col| col.type_().clone())
            .collect()
    }

    /// Rows affected per the command tag, once the stream has completed.
    #[must_use]
    pub fn rows_affected(&self) -> Option<u64> {
        self.stream.rows_affected()
    }
}

/// A single result row; column access delegates to the driver's `FromSql`.
pub struct Row {
    row: tokio_postgres::Row,
}

impl Row {
    pub(crate) fn new(row: tokio_postgres::Row) -> Self {
        Self { row }
    }

    /// Read a column by index or name.
    ///
    /// # Errors
    /// Returns the driver's conversion or bounds error untouched.
    pub fn try_get<'a, I, T>(&'a self, idx: I) -> Result<T, PgAdapterError>
    where
        I: RowIndex + fmt::Display,
        T: FromSql<'a>,
    {
        Ok(self.row.try_get(idx)?)
    }

    /// Columns of this row, as reported by the driver.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.row.columns()
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    /// Consume the wrapper and take the underlying driver row.
    #[must_use]
    pub fn into_inner(self) -> tokio_postgres::Row {
        self.row
    }
}
