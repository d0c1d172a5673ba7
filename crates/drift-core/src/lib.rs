//! drift-core - shared types for the Drift migration engine
//!
//! This crate provides definition identities, the filename contracts for
//! migration and seeder files, project configuration, and the scaffolders
//! that generate new definition stubs.

pub mod config;
pub mod error;
pub mod identity;
pub mod naming;
pub mod scaffold;

pub use config::{DatabaseConfig, DriftConfig};
pub use error::{CoreError, CoreResult};
pub use identity::{MigrationId, SeederId};
