//! Migrate command implementation

use anyhow::{Context, Result};
use drift_engine::{DirectoryMigrations, MigrationRunner};

use crate::cli::GlobalArgs;
use crate::commands::common;

/// Execute the migrate command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let (root, config) = common::load_config(global)?;
    let db = common::open_db(global, &root, &config)?;

    let migrations_dir = config.migrations_dir_absolute(&root);
    if global.verbose {
        eprintln!(
            "[verbose] Discovering migrations in {}",
            migrations_dir.display()
        );
    }

    let source = DirectoryMigrations::new(migrations_dir);
    let report = MigrationRunner::new(&db, &source)
        .run()
        .context("Migration run failed")?;

    if report.nothing_to_do() {
        println!("No pending migrations.");
        return Ok(());
    }

    for applied in &report.applied {
        println!("  ✓ {} ({} ms)", applied.id, applied.duration_ms);
    }
    println!();
    // batch is always set when anything was applied
    let batch = report.batch.unwrap_or_default();
    println!(
        "Applied {} migrations (batch {batch})",
        report.applied.len()
    );

    Ok(())
}
