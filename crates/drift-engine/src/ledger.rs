//! Applied-state ledger for the migration runner.
//!
//! A single `drift_migrations` table records which migration identities have
//! been applied and in which batch. Rows are created exactly once per
//! identity on successful application, never updated, never deleted.

use crate::error::{EngineError, EngineResult};
use drift_core::MigrationId;
use duckdb::Connection;
use std::collections::BTreeSet;

/// Name of the tracking table in the target database.
pub const LEDGER_TABLE: &str = "drift_migrations";

/// Idempotently create the tracking table if it does not already exist.
///
/// Failure here is fatal for the invocation: without the ledger the engine
/// cannot compute the pending set.
pub fn ensure_schema(conn: &Connection) -> EngineResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS drift_migrations (
             identity   VARCHAR NOT NULL UNIQUE,
             batch      INTEGER NOT NULL CHECK (batch > 0),
             applied_at TIMESTAMP NOT NULL DEFAULT now()
         );",
    )
    .map_err(|e| EngineError::BootstrapError(format!("failed to create {LEDGER_TABLE}: {e}")))?;
    Ok(())
}

/// Return every previously recorded migration identity.
pub fn applied(conn: &Connection) -> EngineResult<BTreeSet<MigrationId>> {
    let mut stmt = conn
        .prepare("SELECT identity FROM drift_migrations")
        .map_err(|e| EngineError::LedgerError(format!("failed to read applied set: {e}")))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| EngineError::LedgerError(format!("failed to read applied set: {e}")))?;

    let mut set = BTreeSet::new();
    for row in rows {
        let identity =
            row.map_err(|e| EngineError::LedgerError(format!("failed to read applied set: {e}")))?;
        if let Some(id) = MigrationId::try_new(identity) {
            set.insert(id);
        }
    }
    Ok(set)
}

/// Return the highest recorded batch number, or 0 if none.
pub fn current_max_batch(conn: &Connection) -> EngineResult<i64> {
    conn.query_row(
        "SELECT COALESCE(MAX(batch), 0) FROM drift_migrations",
        [],
        |row| row.get(0),
    )
    .map_err(|e| EngineError::LedgerError(format!("failed to read max batch: {e}")))
}

/// Record one applied migration.
///
/// Propagates the store's uniqueness violation if the identity was already
/// recorded; the runner's pending-set computation makes that unreachable in
/// normal operation.
pub fn record(conn: &Connection, id: &MigrationId, batch: i64) -> EngineResult<()> {
    conn.execute(
        "INSERT INTO drift_migrations (identity, batch) VALUES (?, ?)",
        duckdb::params![id.as_str(), batch],
    )
    .map_err(|e| EngineError::LedgerError(format!("failed to record '{id}': {e}")))?;
    Ok(())
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
