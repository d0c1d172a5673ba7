//! Scaffold command implementations (make:migration, make:seeder)

use anyhow::{Context, Result};
use drift_core::scaffold;

use crate::cli::{GlobalArgs, MakeArgs};
use crate::commands::common;

/// Execute the make:migration command
pub fn migration(args: &MakeArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = common::load_config(global)?;
    let dir = config.migrations_dir_absolute(&root);

    let path = scaffold::scaffold_migration(&dir, &args.name)
        .context("Failed to scaffold migration")?;
    println!("Created {}", path.display());
    Ok(())
}

/// Execute the make:seeder command
pub fn seeder(args: &MakeArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = common::load_config(global)?;
    let dir = config.seeders_dir_absolute(&root);

    let path =
        scaffold::scaffold_seeder(&dir, &args.name).context("Failed to scaffold seeder")?;
    println!("Created {}", path.display());
    Ok(())
}
