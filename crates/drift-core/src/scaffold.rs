//! Scaffolders for new migration and seeder definition files.

use crate::error::{CoreError, CoreResult};
use crate::naming;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Reject names that could escape the target directory or produce confusing
/// filenames.
fn validate_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.')
        || name.starts_with('-')
    {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "must not contain '/', '\\', '..', or start with '.' or '-'".to_string(),
        });
    }
    Ok(())
}

/// Write `content` to a new file at `dir/file_name`, creating `dir` first.
///
/// Refuses to overwrite an existing file.
fn write_stub(dir: &Path, file_name: &str, content: &str) -> CoreResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source,
    })?;

    let path = dir.join(file_name);
    if path.exists() {
        return Err(CoreError::ScaffoldTargetExists {
            path: path.display().to_string(),
        });
    }
    fs::write(&path, content).map_err(|source| CoreError::IoWithPath {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Scaffold a new migration file in `dir`.
///
/// The identity is `<current time to second precision>_<lowercased name>`;
/// the generated stub carries empty up/down sections.
pub fn scaffold_migration(dir: &Path, name: &str) -> CoreResult<PathBuf> {
    validate_name(name)?;

    let file_name = naming::migration_file_name(name, Local::now());
    let stem = file_name
        .strip_suffix(".sql")
        .unwrap_or(&file_name)
        .to_string();
    let operation = naming::derived_operation_name(&stem).unwrap_or_else(|| name.to_string());

    let content = format!(
        "-- Migration: {operation}\n\
         -- drift:up\n\
         \n\
         -- drift:down\n\
         \n"
    );
    write_stub(dir, &file_name, &content)
}

/// Scaffold a new seeder file in `dir`.
///
/// The identity is the given name verbatim (suffixed `Seeder` if needed)
/// with no timestamp prefix; the whole file body is the run operation.
pub fn scaffold_seeder(dir: &Path, name: &str) -> CoreResult<PathBuf> {
    validate_name(name)?;

    let file_name = naming::seeder_file_name(name);
    let identity = file_name.strip_suffix(".sql").unwrap_or(&file_name);

    let content = format!(
        "-- Seeder: {identity}\n\
         -- Statements below run on every `drift seed` invocation.\n\
         \n"
    );
    write_stub(dir, &file_name, &content)
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
