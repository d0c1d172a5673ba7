//! Target database connection wrapper.
//!
//! [`DriftDb`] owns a DuckDB [`Connection`] and provides helpers for opening
//! and transacting against the target database. Ledger bootstrap happens in
//! the migration runner, not here: opening a connection for `seed` must not
//! imply schema changes.

use crate::error::{EngineError, EngineResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the migration target.
///
/// Single-threaded — the connection is exclusively owned by one runner for
/// the duration of one invocation.
pub struct DriftDb {
    conn: Connection,
}

impl DriftDb {
    /// Open (or create) the target database at `path`.
    pub fn open(path: &Path) -> EngineResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| EngineError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Open an in-memory target database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> EngineResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| EngineError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open from a path string, handling the `:memory:` special case.
    pub fn open_str(path: &str) -> EngineResult<Self> {
        if path == ":memory:" {
            Self::open_memory()
        } else {
            Self::open(Path::new(path))
        }
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back on
    /// error.
    pub fn transaction<F, T>(&self, body: F) -> EngineResult<T>
    where
        F: FnOnce(&Connection) -> EngineResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| EngineError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(EngineError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }
}
