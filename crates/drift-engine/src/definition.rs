//! Definition contracts and the SQL-file loaders.
//!
//! A migration exposes `up` and `down`; a seeder exposes `run`. The file
//! format splits a migration into sections introduced by `-- drift:up` and
//! `-- drift:down` marker lines; a seeder file's whole body is its run
//! script.

use crate::error::{EngineError, EngineResult};
use duckdb::Connection;
use std::path::Path;

/// A unit of schema change.
///
/// `down` is part of the contract but is never invoked by the migration
/// runner; rollback orchestration is out of scope.
pub trait Migration: std::fmt::Debug {
    fn up(&self, conn: &Connection) -> EngineResult<()>;
    fn down(&self, conn: &Connection) -> EngineResult<()>;
}

/// A unit of data population. Not idempotent by design: the engine
/// re-executes `run` on every invocation.
pub trait Seeder {
    fn run(&self, conn: &Connection) -> EngineResult<()>;
}

/// Marker line that opens the up section of a migration file.
pub const UP_MARKER: &str = "-- drift:up";
/// Marker line that opens the down section of a migration file.
pub const DOWN_MARKER: &str = "-- drift:down";

/// A migration loaded from a sectioned SQL file.
#[derive(Debug)]
pub struct SqlMigration {
    up_sql: String,
    down_sql: String,
}

impl SqlMigration {
    /// Parse a sectioned migration body.
    ///
    /// The up section is required; a missing down section leaves `down` a
    /// no-op. Errors are plain reasons so sources can attach the identity.
    pub fn parse(body: &str) -> Result<Self, String> {
        let mut section: Option<&str> = None;
        let mut up_sql = String::new();
        let mut down_sql = String::new();
        let mut saw_up = false;

        for line in body.lines() {
            match line.trim_end() {
                UP_MARKER => {
                    section = Some(UP_MARKER);
                    saw_up = true;
                }
                DOWN_MARKER => section = Some(DOWN_MARKER),
                _ => match section {
                    Some(UP_MARKER) => {
                        up_sql.push_str(line);
                        up_sql.push('\n');
                    }
                    Some(DOWN_MARKER) => {
                        down_sql.push_str(line);
                        down_sql.push('\n');
                    }
                    // Text before the first marker (header comments) is ignored.
                    _ => {}
                },
            }
        }

        if !saw_up {
            return Err(format!("missing '{UP_MARKER}' section"));
        }
        Ok(Self { up_sql, down_sql })
    }

    /// Load and parse a migration file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let body = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&body)
    }

    /// The raw SQL of the up section.
    pub fn up_sql(&self) -> &str {
        &self.up_sql
    }

    /// The raw SQL of the down section (may be empty).
    pub fn down_sql(&self) -> &str {
        &self.down_sql
    }
}

impl Migration for SqlMigration {
    fn up(&self, conn: &Connection) -> EngineResult<()> {
        conn.execute_batch(&self.up_sql).map_err(EngineError::from)
    }

    fn down(&self, conn: &Connection) -> EngineResult<()> {
        conn.execute_batch(&self.down_sql).map_err(EngineError::from)
    }
}

/// A seeder loaded from a plain SQL file.
pub struct SqlSeeder {
    run_sql: String,
}

impl SqlSeeder {
    pub fn new(run_sql: impl Into<String>) -> Self {
        Self {
            run_sql: run_sql.into(),
        }
    }

    /// Load a seeder file; the whole body is the run script.
    pub fn load(path: &Path) -> Result<Self, String> {
        let body = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Ok(Self::new(body))
    }
}

impl Seeder for SqlSeeder {
    fn run(&self, conn: &Connection) -> EngineResult<()> {
        conn.execute_batch(&self.run_sql).map_err(EngineError::from)
    }
}

#[cfg(test)]
#[path = "definition_test.rs"]
mod tests;
