//! Error types for the migration engine.

use thiserror::Error;

/// Engine errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to open the target database (M001).
    #[error("[M001] Database connection failed: {0}")]
    ConnectionError(String),

    /// The applied-state ledger table could not be created (M002).
    ///
    /// Fatal for the invocation: the engine cannot safely diff pending
    /// migrations without the ledger.
    #[error("[M002] Ledger bootstrap failed: {0}")]
    BootstrapError(String),

    /// A ledger read or insert failed (M003).
    #[error("[M003] Ledger query failed: {0}")]
    LedgerError(String),

    /// Transaction management error (M004).
    #[error("[M004] Transaction failed: {0}")]
    TransactionError(String),

    /// A discovered definition could not be loaded (M005).
    #[error("[M005] Definition '{identity}' failed to load: {reason}")]
    LoadError { identity: String, reason: String },

    /// A migration's up operation failed (M006). Already-applied migrations
    /// from the same batch stay recorded; later ones are never attempted.
    #[error("[M006] Migration '{identity}' failed: {message}")]
    MigrationFailed { identity: String, message: String },

    /// A seeder's run operation failed (M007).
    #[error("[M007] Seeder '{identity}' failed: {message}")]
    SeederFailed { identity: String, message: String },

    /// Definition discovery failed (M008).
    #[error("[M008] Discovery failed in {dir}: {source}")]
    DiscoveryError {
        dir: String,
        source: std::io::Error,
    },

    /// DuckDB driver error with preserved source chain (M009).
    #[error("[M009] DuckDB error: {0}")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;

impl From<duckdb::Error> for EngineError {
    fn from(err: duckdb::Error) -> Self {
        EngineError::DuckDb(err)
    }
}
