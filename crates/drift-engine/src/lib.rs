//! drift-engine - the migration and seeding engine.
//!
//! Provides the DuckDB connection wrapper, the applied-state ledger, SQL
//! definition loaders, definition sources (directory scan or compiled-in
//! registry), and the two runners. The CLI in `drift-cli` is a thin
//! dispatcher over this crate.

pub mod connection;
pub mod definition;
pub mod error;
pub mod ledger;
pub mod runner;
pub mod seed_runner;
pub mod source;

pub use connection::DriftDb;
pub use definition::{Migration, Seeder, SqlMigration, SqlSeeder};
pub use error::{EngineError, EngineResult};
pub use runner::{AppliedMigration, MigrateReport, MigrationRunner};
pub use seed_runner::{ExecutedSeeder, SeedReport, SeederRunner};
pub use source::{
    DirectoryMigrations, DirectorySeeders, MigrationSource, RegistryMigrations, RegistrySeeders,
    SeederSource,
};
