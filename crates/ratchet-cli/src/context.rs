//! Runtime context for CLI commands

use anyhow::{Context, Result};
use ratchet_core::Config;
use ratchet_db::{Database, DuckDbBackend};
use ratchet_migrate::{ManagerOptions, MigrationManager};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded config and database connection
pub struct RuntimeContext {
    /// Project root directory
    pub root: PathBuf,

    /// Project configuration
    pub config: Config,

    /// Database connection shared with the manager and change scripts
    pub db: Arc<dyn Database>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let root = Path::new(&global.project_dir).to_path_buf();

        let config = if let Some(config_path) = &global.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        let db_path = global
            .database
            .clone()
            .unwrap_or_else(|| config.database.path.clone());
        // Relative database paths resolve against the project root, so
        // commands behave the same from any working directory.
        let db_path = if db_path == ":memory:" || Path::new(&db_path).is_absolute() {
            db_path
        } else {
            root.join(&db_path).display().to_string()
        };

        log::debug!("Opening {} database at {}", config.database.db_type, db_path);
        let db: Arc<dyn Database> =
            Arc::new(DuckDbBackend::new(&db_path).context("Failed to open database")?);

        Ok(Self {
            root,
            config,
            db,
            verbose: global.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Absolute migration root for this project
    pub fn migration_root(&self) -> PathBuf {
        self.config.migration_path_absolute(&self.root)
    }

    /// Build a migration manager with the configured transaction mode
    pub fn manager(&self) -> Result<MigrationManager> {
        self.manager_with(self.config.use_transaction)
    }

    /// Build a migration manager with an explicit transaction mode
    pub fn manager_with(&self, use_transaction: bool) -> Result<MigrationManager> {
        let options = ManagerOptions {
            root: self.migration_root(),
            namespace: self.config.namespace.clone(),
            table_prefix: self.config.table_prefix.clone(),
            use_transaction,
        };
        MigrationManager::new(Arc::clone(&self.db), options)
            .context("Failed to initialize migration manager")
    }
}
