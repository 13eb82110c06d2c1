//! Embedded PostgreSQL helpers for integration tests.
//!
//! Gated behind the `test-utils` feature; the embedded server comes from
//! `postgresql_embedded` with bundled binaries so tests need no external
//! database.

use std::sync::LazyLock;

use deadpool_postgres::Config;
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Runtime;

use crate::Pool;
use crate::executor::Executor;

/// Shared tokio runtime for test utilities to avoid creating multiple runtimes.
static SHARED_RUNTIME: LazyLock<Runtime> =
    LazyLock::new(|| Runtime::new().expect("Failed to create tokio runtime for test utilities"));

/// Represents a running embedded PostgreSQL instance.
pub struct EmbeddedPostgres {
    pub postgresql: PostgreSQL,
    pub port: u16,
    /// Working configuration pointing at the embedded server.
    pub config: Config,
}

/// Set up an embedded PostgreSQL instance with a freshly created database.
///
/// # Errors
/// Returns an error if the embedded server cannot be set up or started, if
/// database creation fails, or if the post-start connectivity check fails.
pub fn setup_postgres_embedded(dbname: &str) -> Result<EmbeddedPostgres, Box<dyn std::error::Error>> {
    SHARED_RUNTIME.block_on(async {
        let mut postgresql = PostgreSQL::default();

        postgresql.setup().await?;
        postgresql.start().await?;

        let port = postgresql.settings().port;
        let host = postgresql.settings().host.clone();
        let user = postgresql.settings().username.clone();
        let password = postgresql.settings().password.clone();

        postgresql.create_database(dbname).await?;

        let mut cfg = Config::new();
        cfg.dbname = Some(dbname.to_string());
        cfg.host = Some(host);
        cfg.port = Some(port);
        cfg.user = Some(user);
        cfg.password = Some(password);

        // Connectivity check through the adapter itself.
        let pool = Pool::new(cfg.clone())?;
        let client = pool.get().await?;
        client.execute("SELECT 1", &[]).await?;

        Ok(EmbeddedPostgres {
            postgresql,
            port,
            config: cfg,
        })
    })
}

/// Stop a previously started embedded PostgreSQL instance.
pub fn stop_postgres_embedded(postgres: EmbeddedPostgres) {
    let EmbeddedPostgres { postgresql, .. } = postgres;
    SHARED_RUNTIME.block_on(async move {
        let _ = postgresql.stop().await;
    });
}
