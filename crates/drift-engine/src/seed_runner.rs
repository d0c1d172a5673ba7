//! Seeder runner.
//!
//! Seeders carry no applied-state: every invocation re-executes the full
//! matched set in ascending identity order. An optional filter narrows the
//! set to one exact identity.

use crate::connection::DriftDb;
use crate::error::{EngineError, EngineResult};
use crate::source::SeederSource;
use drift_core::SeederId;
use std::time::Instant;

/// One executed seeder.
#[derive(Debug)]
pub struct ExecutedSeeder {
    pub id: SeederId,
    pub duration_ms: u64,
}

/// Outcome of a `seed` invocation.
#[derive(Debug)]
pub enum SeedReport {
    /// The matched seeders that ran, in order. Empty when the directory had
    /// no seeders and no filter was given.
    Executed(Vec<ExecutedSeeder>),
    /// A filter was given and matched nothing. Not an error.
    NoMatch { filter: String },
}

/// Orchestrates one seed invocation.
pub struct SeederRunner<'a> {
    db: &'a DriftDb,
    source: &'a dyn SeederSource,
}

impl<'a> SeederRunner<'a> {
    pub fn new(db: &'a DriftDb, source: &'a dyn SeederSource) -> Self {
        Self { db, source }
    }

    /// Execute every matched seeder, or only the one whose identity equals
    /// `filter` exactly (no partial matching).
    ///
    /// Failure semantics mirror the migration runner: the first failing
    /// seeder aborts the invocation, and side effects of already-executed
    /// seeders are not undone.
    pub fn run(&self, filter: Option<&str>) -> EngineResult<SeedReport> {
        let mut matched = self.source.discover()?;
        matched.sort_by(|a, b| a.0.cmp(&b.0));

        if let Some(name) = filter {
            matched.retain(|(id, _)| id.as_str() == name);
            if matched.is_empty() {
                return Ok(SeedReport::NoMatch {
                    filter: name.to_string(),
                });
            }
        }

        let mut executed = Vec::with_capacity(matched.len());
        for (id, seeder) in matched {
            let started = Instant::now();
            self.db
                .transaction(|conn| seeder.run(conn))
                .map_err(|e| EngineError::SeederFailed {
                    identity: id.to_string(),
                    message: e.to_string(),
                })?;
            log::debug!("executed seeder {id}");
            executed.push(ExecutedSeeder {
                id,
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        Ok(SeedReport::Executed(executed))
    }
}

#[cfg(test)]
#[path = "seed_runner_test.rs"]
mod tests;
