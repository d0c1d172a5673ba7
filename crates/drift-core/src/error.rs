//! Error types for drift-core

use thiserror::Error;

/// Core error type for Drift
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Definition name rejected by the scaffolder
    #[error("[E003] Invalid definition name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// E004: Scaffold target file already exists
    #[error("[E004] File already exists: {path}")]
    ScaffoldTargetExists { path: String },

    /// E005: IO error
    #[error("[E005] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E006: IO error with file path context
    #[error("[E006] Failed to write '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
