//! Drift CLI - schema migrations and data seeding for DuckDB projects
//!
//! The binary only parses arguments and dispatches; every failure is
//! threaded back here as a `Result` and decides the process exit code.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{make, migrate, seed};

fn main() -> Result<()> {
    // No command and unknown command both print the command summary and
    // exit 0; genuine usage errors (e.g. a missing scaffold name) keep
    // clap's nonzero exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::Migrate) => migrate::execute(&cli.global),
        Some(Commands::Seed(args)) => seed::execute(args, &cli.global),
        Some(Commands::MakeMigration(args)) => make::migration(args, &cli.global),
        Some(Commands::MakeSeeder(args)) => make::seeder(args, &cli.global),
    }
}
