//! Migration runner.
//!
//! One invocation walks discover → diff → apply: the pending set is the
//! discovered set minus the ledger's applied set, sorted ascending by
//! identity; every migration applied in the invocation shares one batch
//! number, strictly greater than all previously recorded batches.

use crate::connection::DriftDb;
use crate::error::{EngineError, EngineResult};
use crate::ledger;
use crate::source::MigrationSource;
use drift_core::MigrationId;
use std::time::Instant;

/// One successfully applied migration.
#[derive(Debug)]
pub struct AppliedMigration {
    pub id: MigrationId,
    pub duration_ms: u64,
}

/// Outcome of a fully successful `migrate` invocation.
#[derive(Debug)]
pub struct MigrateReport {
    /// The batch number assigned to this invocation, or `None` when there
    /// was nothing to do.
    pub batch: Option<i64>,
    pub applied: Vec<AppliedMigration>,
}

impl MigrateReport {
    pub fn nothing_to_do(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Orchestrates one migrate invocation against an exclusively owned
/// connection.
pub struct MigrationRunner<'a> {
    db: &'a DriftDb,
    source: &'a dyn MigrationSource,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(db: &'a DriftDb, source: &'a dyn MigrationSource) -> Self {
        Self { db, source }
    }

    /// Run all pending migrations to completion or first failure.
    ///
    /// Fail-fast: the first failing migration aborts the invocation;
    /// migrations already applied in the same batch stay recorded and later
    /// ones are never attempted. Re-running after a failure (or crash)
    /// re-discovers exactly the un-applied remainder. Precondition: at most
    /// one runner per target database at a time — there is no cross-process
    /// lock.
    pub fn run(&self) -> EngineResult<MigrateReport> {
        ledger::ensure_schema(self.db.conn())?;

        let discovered = self.source.discover()?;
        let applied = ledger::applied(self.db.conn())?;

        let mut pending: Vec<_> = discovered
            .into_iter()
            .filter(|(id, _)| !applied.contains(id))
            .collect();
        pending.sort_by(|a, b| a.0.cmp(&b.0));

        if pending.is_empty() {
            log::debug!("no pending migrations");
            return Ok(MigrateReport {
                batch: None,
                applied: Vec::new(),
            });
        }

        let batch = ledger::current_max_batch(self.db.conn())? + 1;
        log::debug!("applying {} migrations as batch {batch}", pending.len());

        let mut applied_now = Vec::with_capacity(pending.len());
        for (id, migration) in pending {
            let started = Instant::now();
            self.db
                .transaction(|conn| migration.up(conn))
                .map_err(|e| EngineError::MigrationFailed {
                    identity: id.to_string(),
                    message: e.to_string(),
                })?;
            ledger::record(self.db.conn(), &id, batch)?;
            log::debug!("applied {id} (batch {batch})");
            applied_now.push(AppliedMigration {
                id,
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        Ok(MigrateReport {
            batch: Some(batch),
            applied: applied_now,
        })
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
