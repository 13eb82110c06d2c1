use std::sync::Arc;

use tokio_postgres::Statement;
use tokio_postgres::types::Type;

use crate::Column;

/// Prepared statement handle.
///
/// Wraps the driver's [`Statement`] and retains the SQL text so the statement
/// can be re-prepared in another session (see [`crate::Tx::rebind`]). The
/// driver frees the server-side statement when the last handle is dropped.
#[derive(Clone)]
pub struct Prepared {
    stmt: Statement,
    sql: Arc<String>,
}

impl Prepared {
    pub(crate) fn new(stmt: Statement, sql: Arc<String>) -> Self {
        Self { stmt, sql }
    }

    /// The underlying driver statement.
    #[must_use]
    pub fn statement(&self) -> &Statement {
        &self.stmt
    }

    /// The SQL text this statement was prepared from.
    #[must_use]
    pub fn sql(&self) -> &str {
        self.sql.as_str()
    }

    /// Columns of the result this statement produces, as reported by the driver.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.stmt.columns()
    }

    /// Types of the statement's parameters, as reported by the driver.
    #[must_use]
    pub fn params(&self) -> &[Type] {
        self.stmt.params()
    }
}

/// Capability interface for statements that can be rebound to a transaction.
///
/// [`crate::Tx::rebind`] re-prepares a statement inside the transaction's
/// session and needs its SQL text to do so. Statement types that cannot
/// supply it keep the default answer, and rebinding fails with
/// [`crate::PgAdapterError::ForeignStatement`] instead of assuming a
/// concrete type.
pub trait StatementSource: Send + Sync {
    /// SQL text to re-prepare, or `None` when this statement cannot be rebound.
    fn rebind_sql(&self) -> Option<&str> {
        None
    }
}

impl StatementSource for Prepared {
    fn rebind_sql(&self) -> Option<&str> {
        Some(self.sql())
    }
}

#[cfg(test)]
mod tests {
    use super::StatementSource;

    struct External;

    impl StatementSource for External {}

    #[test]
    fn capability_defaults_to_absent() {
        assert!(External.rebind_sql().is_none());
    }
}
