//! Migration manager for Ratchet.
//!
//! Orchestrates discovery, direction computation, and transactional or
//! script-by-script application of change scripts, tracking the single
//! schema-version integer in the target database.

pub mod error;
pub mod manager;
pub mod registry;
pub mod script;
pub mod sql;
pub mod version_store;

pub use error::{MigrateError, MigrateResult};
pub use manager::{ManagerOptions, MigrationManager, Outcome};
pub use registry::ScriptRegistry;
pub use script::ChangeScript;
pub use sql::SqlScript;
pub use version_store::VersionStore;
