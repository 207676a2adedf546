//! Error types for ratchet-migrate

use ratchet_core::{CoreError, Direction};
use ratchet_db::DbError;
use thiserror::Error;

/// Migration manager errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Invalid manager construction options (M001)
    #[error("[M001] Invalid migration configuration: {0}")]
    Config(String),

    /// Version table cannot be created or queried (M002)
    #[error("[M002] Version store failure: {0}")]
    Storage(String),

    /// A discovered migration file yields no resolvable change script (M003)
    #[error("[M003] Cannot load change script '{id}' from {path}: {reason}")]
    Load {
        id: String,
        path: String,
        reason: String,
    },

    /// A change script failed while being applied (M004)
    #[error("[M004] Migration {version} ({name}) failed during {direction}: {message}")]
    Script {
        version: i64,
        name: String,
        direction: Direction,
        message: String,
    },

    /// A transactional batch was rolled back (M005)
    #[error("[M005] Migration batch rolled back: {message}")]
    RolledBack { message: String },

    /// Change-script template rendering failed (M006)
    #[error("[M006] Template rendering failed for {path}")]
    Template {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// A SQL script with no down section was asked to go down (M007)
    #[error("[M007] Migration {path} has no down section and cannot be reversed")]
    Irreversible { path: String },

    /// Database error (M008)
    #[error("[M008] Database error: {0}")]
    Db(#[from] DbError),

    /// Discovery or configuration error from the core layer
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for MigrateError
pub type MigrateResult<T> = Result<T, MigrateError>;
