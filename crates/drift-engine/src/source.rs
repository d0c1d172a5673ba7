//! Definition sources.
//!
//! A source produces an ordered sequence of (identity, definition) pairs.
//! Two implementations satisfy the same contract: a filesystem directory
//! scanner and a compiled-in registry populated by explicit registration
//! calls (for embedded use where no definition directory ships with the
//! binary).

use crate::definition::{Migration, Seeder, SqlMigration, SqlSeeder};
use crate::error::{EngineError, EngineResult};
use drift_core::naming;
use drift_core::{MigrationId, SeederId};
use std::path::{Path, PathBuf};

/// Produces migration definitions ordered ascending by identity.
///
/// Each `discover` call re-scans the underlying source; nothing is cached
/// across calls.
pub trait MigrationSource {
    fn discover(&self) -> EngineResult<Vec<(MigrationId, Box<dyn Migration>)>>;
}

/// Produces seeder definitions ordered ascending by identity.
pub trait SeederSource {
    fn discover(&self) -> EngineResult<Vec<(SeederId, Box<dyn Seeder>)>>;
}

/// Scans a directory for `YYYY_MM_DD_HHMMSS_<name>.sql` migration files.
pub struct DirectoryMigrations {
    dir: PathBuf,
}

impl DirectoryMigrations {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MigrationSource for DirectoryMigrations {
    fn discover(&self) -> EngineResult<Vec<(MigrationId, Box<dyn Migration>)>> {
        let mut found: Vec<(MigrationId, Box<dyn Migration>)> = Vec::new();
        for path in sql_files(&self.dir)? {
            let Some(id) = naming::migration_id_from_path(&path) else {
                log::warn!(
                    "ignoring {}: filename does not match <YYYY>_<MM>_<DD>_<HHMMSS>_<name>.sql",
                    path.display()
                );
                continue;
            };
            let migration = SqlMigration::load(&path).map_err(|reason| EngineError::LoadError {
                identity: id.to_string(),
                reason,
            })?;
            found.push((id, Box::new(migration)));
        }
        found.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(found)
    }
}

/// Scans a directory for `<Name>Seeder.sql` files.
pub struct DirectorySeeders {
    dir: PathBuf,
}

impl DirectorySeeders {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SeederSource for DirectorySeeders {
    fn discover(&self) -> EngineResult<Vec<(SeederId, Box<dyn Seeder>)>> {
        let mut found: Vec<(SeederId, Box<dyn Seeder>)> = Vec::new();
        for path in sql_files(&self.dir)? {
            let Some(id) = naming::seeder_id_from_path(&path) else {
                log::warn!(
                    "ignoring {}: seeder filenames must end in `Seeder.sql`",
                    path.display()
                );
                continue;
            };
            let seeder = SqlSeeder::load(&path).map_err(|reason| EngineError::LoadError {
                identity: id.to_string(),
                reason,
            })?;
            found.push((id, Box::new(seeder)));
        }
        found.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(found)
    }
}

/// List the `.sql` files directly inside `dir`. A missing directory yields
/// an empty set rather than an error.
fn sql_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|source| EngineError::DiscoveryError {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::DiscoveryError {
            dir: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == naming::DEFINITION_EXTENSION) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Factory producing a fresh migration instance per discovery call.
pub type MigrationFactory = Box<dyn Fn() -> Box<dyn Migration>>;
/// Factory producing a fresh seeder instance per discovery call.
pub type SeederFactory = Box<dyn Fn() -> Box<dyn Seeder>>;

/// Compiled-in migration manifest: an explicit identity → factory mapping.
#[derive(Default)]
pub struct RegistryMigrations {
    entries: Vec<(MigrationId, MigrationFactory)>,
}

impl RegistryMigrations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one migration. Registration order is irrelevant; discovery
    /// sorts by identity.
    pub fn with(
        mut self,
        id: MigrationId,
        factory: impl Fn() -> Box<dyn Migration> + 'static,
    ) -> Self {
        self.entries.push((id, Box::new(factory)));
        self
    }
}

impl MigrationSource for RegistryMigrations {
    fn discover(&self) -> EngineResult<Vec<(MigrationId, Box<dyn Migration>)>> {
        let mut found: Vec<(MigrationId, Box<dyn Migration>)> = self
            .entries
            .iter()
            .map(|(id, factory)| (id.clone(), factory()))
            .collect();
        found.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(found)
    }
}

/// Compiled-in seeder manifest.
#[derive(Default)]
pub struct RegistrySeeders {
    entries: Vec<(SeederId, SeederFactory)>,
}

impl RegistrySeeders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: SeederId, factory: impl Fn() -> Box<dyn Seeder> + 'static) -> Self {
        self.entries.push((id, Box::new(factory)));
        self
    }
}

impl SeederSource for RegistrySeeders {
    fn discover(&self) -> EngineResult<Vec<(SeederId, Box<dyn Seeder>)>> {
        let mut found: Vec<(SeederId, Box<dyn Seeder>)> = self
            .entries
            .iter()
            .map(|(id, factory)| (id.clone(), factory()))
            .collect();
        found.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(found)
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
