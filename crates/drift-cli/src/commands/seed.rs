//! Seed command implementation

use anyhow::{Context, Result};
use drift_engine::{DirectorySeeders, SeedReport, SeederRunner};

use crate::cli::{GlobalArgs, SeedArgs};
use crate::commands::common;

/// Execute the seed command
pub fn execute(args: &SeedArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = common::load_config(global)?;
    let db = common::open_db(global, &root, &config)?;

    let seeders_dir = config.seeders_dir_absolute(&root);
    if global.verbose {
        eprintln!("[verbose] Discovering seeders in {}", seeders_dir.display());
    }

    let source = DirectorySeeders::new(&seeders_dir);
    let report = SeederRunner::new(&db, &source)
        .run(args.name.as_deref())
        .context("Seed run failed")?;

    match report {
        SeedReport::NoMatch { filter } => {
            println!("No seeder found with name '{filter}'.");
        }
        SeedReport::Executed(executed) if executed.is_empty() => {
            println!("No seeder files found in {}.", seeders_dir.display());
        }
        SeedReport::Executed(executed) => {
            for seeder in &executed {
                println!("  ✓ {} ({} ms)", seeder.id, seeder.duration_ms);
            }
            println!();
            println!("Executed {} seeders", executed.len());
        }
    }

    Ok(())
}
