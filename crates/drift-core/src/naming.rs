//! Filename contracts for migration and seeder definition files.
//!
//! A migration file is named `<YYYY>_<MM>_<DD>_<HHMMSS>_<freeform_name>.sql`;
//! its identity is the filename without extension. A seeder file is any
//! `.sql` file whose stem ends in `Seeder`; its identity is the stem. The
//! derived operation name strips the timestamp prefix, title-cases each
//! underscore-separated segment, and concatenates them.

use crate::identity::{MigrationId, SeederId};
use chrono::{DateTime, Local};
use std::path::Path;

/// Extension shared by all definition files.
pub const DEFINITION_EXTENSION: &str = "sql";

/// Suffix that marks a file stem as a seeder definition.
pub const SEEDER_SUFFIX: &str = "Seeder";

/// Check whether `stem` starts with a `YYYY_MM_DD_HHMMSS_` timestamp prefix
/// followed by a non-empty name.
pub fn has_timestamp_prefix(stem: &str) -> bool {
    strip_timestamp_prefix(stem).is_some()
}

/// Return the freeform remainder after the timestamp prefix, or `None` if
/// `stem` does not match the migration filename pattern.
pub fn strip_timestamp_prefix(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    // YYYY_MM_DD_HHMMSS_ is 18 bytes; at least one byte of name must follow.
    if bytes.len() < 19 {
        return None;
    }
    let digit_runs: [(usize, usize); 4] = [(0, 4), (5, 2), (8, 2), (11, 6)];
    for (start, len) in digit_runs {
        if !bytes[start..start + len].iter().all(u8::is_ascii_digit) {
            return None;
        }
    }
    for sep in [4, 7, 10, 17] {
        if bytes[sep] != b'_' {
            return None;
        }
    }
    Some(&stem[18..])
}

/// Derive a migration identity from a path, or `None` if the file does not
/// match the migration filename pattern.
pub fn migration_id_from_path(path: &Path) -> Option<MigrationId> {
    let stem = definition_stem(path)?;
    if has_timestamp_prefix(stem) {
        MigrationId::try_new(stem)
    } else {
        None
    }
}

/// Derive a seeder identity from a path, or `None` if the file does not
/// match the seeder filename pattern.
pub fn seeder_id_from_path(path: &Path) -> Option<SeederId> {
    let stem = definition_stem(path)?;
    if stem.ends_with(SEEDER_SUFFIX) {
        SeederId::try_new(stem)
    } else {
        None
    }
}

/// Return the stem of a `.sql` file, or `None` for any other path.
fn definition_stem(path: &Path) -> Option<&str> {
    if !path
        .extension()
        .is_some_and(|e| e == DEFINITION_EXTENSION)
    {
        return None;
    }
    path.file_stem().and_then(|s| s.to_str())
}

/// Derive the operation name from a migration file stem.
///
/// The timestamp prefix is stripped, the remainder is split on underscores,
/// each segment is title-cased (first character uppercased, rest lowercased),
/// and the segments are concatenated. The case-folding is deliberately naive:
/// it does not reintroduce word boundaries inside a single unbroken word, so
/// `2025_07_21_114952_addfootobar` derives `Addfootobar`, not `AddFooToBar`.
pub fn derived_operation_name(stem: &str) -> Option<String> {
    let rest = strip_timestamp_prefix(stem)?;
    Some(rest.split('_').map(title_case).collect())
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Format the wall-clock timestamp prefix used by scaffolded migrations.
pub fn timestamp_prefix(now: DateTime<Local>) -> String {
    now.format("%Y_%m_%d_%H%M%S").to_string()
}

/// Build the filename for a new migration scaffolded at `now`.
///
/// The freeform part is the lowercased name, so the derived operation name
/// round-trips through [`derived_operation_name`] as the title-cased form of
/// the whole name.
pub fn migration_file_name(name: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        timestamp_prefix(now),
        name.to_lowercase(),
        DEFINITION_EXTENSION
    )
}

/// Build the filename for a new seeder. The `Seeder` suffix is appended if
/// the given name does not already carry it.
pub fn seeder_file_name(name: &str) -> String {
    if name.ends_with(SEEDER_SUFFIX) {
        format!("{name}.{DEFINITION_EXTENSION}")
    } else {
        format!("{name}{SEEDER_SUFFIX}.{DEFINITION_EXTENSION}")
    }
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
