use thiserror::Error;

/// Error type for all adapter operations.
///
/// Driver and pool failures pass through untouched in the transparent
/// variants; the string-carrying variants cover pool construction, and
/// [`ForeignStatement`](PgAdapterError::ForeignStatement) is the one error
/// this layer produces itself (see [`crate::Tx::rebind`]).
#[derive(Debug, Error)]
pub enum PgAdapterError {
    #[error(transparent)]
    PostgresError(#[from] tokio_postgres::Error),

    #[error(transparent)]
    PoolError(#[from] deadpool::managed::PoolError<tokio_postgres::Error>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Foreign statement: {0}")]
    ForeignStatement(String),
}
