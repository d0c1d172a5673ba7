//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Drift - schema migrations and data seeding for DuckDB projects
#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; omitted prints the command summary
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override target database path
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all pending migrations as one batch
    Migrate,

    /// Execute seeders (all, or one by exact name)
    Seed(SeedArgs),

    /// Scaffold a new timestamp-prefixed migration file
    #[command(name = "make:migration")]
    MakeMigration(MakeArgs),

    /// Scaffold a new seeder file; a `Seeder` suffix is appended to the
    /// name if missing (e.g. `Airport` creates `AirportSeeder.sql`)
    #[command(name = "make:seeder")]
    MakeSeeder(MakeArgs),
}

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Run only the seeder with this exact identity (e.g. AirportSeeder)
    pub name: Option<String>,
}

/// Arguments for the scaffold commands
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Name for the new definition
    pub name: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
