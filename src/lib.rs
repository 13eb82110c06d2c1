//! Thin delegation wrappers over tokio-postgres and deadpool-postgres.
//!
//! Each type in this crate owns exactly one underlying driver handle and
//! forwards every call to it: [`Pool`] wraps the connection pool, [`Client`]
//! a checked-out connection, [`Tx`] an open transaction, [`Prepared`] a
//! prepared statement, and [`Rows`]/[`Row`] the result cursor. Returned
//! driver handles are rewrapped on the way out, so downstream code works
//! against this crate's types while the driver keeps defining all semantics:
//! pooling, cancellation, transaction isolation, value encoding.
//!
//! There is deliberately nothing else here. No retry logic, no placeholder
//! rewriting, no caching, no error classification beyond pass-through.

pub mod client;
pub mod error;
pub mod executor;
pub mod pool;
mod query;
pub mod rows;
pub mod statement;
pub mod transaction;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use client::Client;
pub use error::PgAdapterError;
pub use executor::Executor;
pub use pool::Pool;
pub use rows::{Row, Rows};
pub use statement::{Prepared, StatementSource};
pub use transaction::{Tx, TxBuilder};

// Driver vocabulary used in this crate's signatures, re-exported so callers
// don't need a direct tokio-postgres/deadpool-postgres dependency.
pub use deadpool_postgres::Config;
pub use tokio_postgres::types::{FromSql, ToSql, Type};
pub use tokio_postgres::{Column, IsolationLevel};

/// Convenient imports for common functionality.
pub mod prelude {
    pub use crate::{
        Client, Config, Executor, IsolationLevel, PgAdapterError, Pool, Prepared, Row, Rows,
        StatementSource, Tx, TxBuilder, Type,
    };
}
