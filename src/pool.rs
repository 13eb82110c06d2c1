use deadpool_postgres::{Config, Pool as DeadpoolPool, Runtime};
use tokio_postgres::NoTls;

use crate::client::Client;
use crate::error::PgAdapterError;

/// Connection pool wrapper; checkout yields a [`Client`].
///
/// Pooling behavior (sizing, recycling, wait semantics) is entirely
/// deadpool's; this type only validates the config up front and rewraps
/// checked-out connections.
#[derive(Clone, Debug)]
pub struct Pool {
    pool: DeadpoolPool,
}

impl Pool {
    /// Build a pool from a deadpool-postgres [`Config`].
    ///
    /// # Errors
    /// Returns `PgAdapterError::ConfigError` if required config fields are
    /// missing or `PgAdapterError::ConnectionError` if pool creation fails.
    pub fn new(cfg: Config) -> Result<Self, PgAdapterError> {
        if cfg.dbname.is_none() {
            return Err(PgAdapterError::ConfigError("dbname is required".to_string()));
        }
        if cfg.host.is_none() {
            return Err(PgAdapterError::ConfigError("host is required".to_string()));
        }
        if cfg.port.is_none() {
            return Err(PgAdapterError::ConfigError("port is required".to_string()));
        }
        if cfg.user.is_none() {
            return Err(PgAdapterError::ConfigError("user is required".to_string()));
        }
        if cfg.password.is_none() {
            return Err(PgAdapterError::ConfigError("password is required".to_string()));
        }

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| {
                PgAdapterError::ConnectionError(format!("Failed to create Postgres pool: {e}"))
            })?;

        Ok(Self { pool })
    }

    /// Check out a connection and wrap it.
    ///
    /// # Errors
    /// Returns the pool's checkout error untouched.
    pub async fn get(&self) -> Result<Client, PgAdapterError> {
        let conn = self.pool.get().await?;
        tracing::debug!("checked out postgres connection");
        Ok(Client::new(conn))
    }

    /// Access the underlying deadpool pool.
    #[must_use]
    pub fn raw(&self) -> &DeadpoolPool {
        &self.pool
    }
}
