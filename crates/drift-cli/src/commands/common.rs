//! Shared helpers for command implementations.

use anyhow::{Context, Result};
use drift_core::DriftConfig;
use drift_engine::DriftDb;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Load the project config, honoring `--project-dir` and `--config`.
///
/// Returns the project root alongside the config so callers can resolve
/// relative paths.
pub fn load_config(global: &GlobalArgs) -> Result<(PathBuf, DriftConfig)> {
    let root = PathBuf::from(&global.project_dir);
    let config = match &global.config {
        Some(path) => DriftConfig::load_from(Path::new(path)),
        None => DriftConfig::load(&root),
    }
    .context("Failed to load project config")?;
    Ok((root, config))
}

/// Open the target database, honoring the `--target` path override.
pub fn open_db(global: &GlobalArgs, root: &Path, config: &DriftConfig) -> Result<DriftDb> {
    let db_path = match &global.target {
        Some(path) => path.clone(),
        None => config.database_path_absolute(root),
    };
    if global.verbose {
        eprintln!("[verbose] Target database: {db_path}");
    }
    DriftDb::open_str(&db_path).context("Failed to open target database")
}
