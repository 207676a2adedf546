//! Error types for ratchet-core

use thiserror::Error;

/// Core error type for Ratchet
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Migration root directory not found
    #[error("[E003] Migration root not found: {path}")]
    MigrationRootNotFound { path: String },

    /// E004: Two migration files declare the same version
    #[error("[E004] Duplicate migration version {version}: {path1} and {path2}")]
    DuplicateVersion {
        version: i64,
        path1: String,
        path2: String,
    },

    /// E005: IO error
    #[error("[E005] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E006: IO error with file path context
    #[error("[E006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E007: YAML parse error
    #[error("[E007] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
