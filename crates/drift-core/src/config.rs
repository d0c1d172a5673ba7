//! Configuration types and parsing for drift.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from drift.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriftConfig {
    /// Project name
    pub name: String,

    /// Directory containing migration definition files
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// Directory containing seeder definition files
    #[serde(default = "default_seeders_dir")]
    pub seeders_dir: String,

    /// Target database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Target database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the DuckDB database file (`:memory:` for in-memory)
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_seeders_dir() -> String {
    "seeders".to_string()
}

fn default_database_path() -> String {
    "drift.duckdb".to_string()
}

impl DriftConfig {
    /// Conventional config filename at the project root.
    pub const FILE_NAME: &'static str = "drift.yml";

    /// Load configuration from `<root>/drift.yml`.
    pub fn load(root: &Path) -> CoreResult<Self> {
        Self::load_from(&root.join(Self::FILE_NAME))
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Migrations directory resolved against the project root.
    pub fn migrations_dir_absolute(&self, root: &Path) -> PathBuf {
        resolve(root, &self.migrations_dir)
    }

    /// Seeders directory resolved against the project root.
    pub fn seeders_dir_absolute(&self, root: &Path) -> PathBuf {
        resolve(root, &self.seeders_dir)
    }

    /// Database path resolved against the project root. `:memory:` is passed
    /// through untouched.
    pub fn database_path_absolute(&self, root: &Path) -> String {
        if self.database.path == ":memory:" {
            return self.database.path.clone();
        }
        resolve(root, &self.database.path).display().to_string()
    }
}

fn resolve(root: &Path, relative: &str) -> PathBuf {
    let path = Path::new(relative);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
