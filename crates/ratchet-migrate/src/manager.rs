//! Migration manager
//!
//! Orchestrates discovery, direction computation, and application of
//! change scripts, updating the version store after each successfully
//! applied script.

use crate::error::{MigrateError, MigrateResult};
use crate::registry::ScriptRegistry;
use crate::version_store::VersionStore;
use ratchet_core::{find_migrations, Direction, MigrationRecord};
use ratchet_db::Database;
use std::path::PathBuf;
use std::sync::Arc;

/// Aggregate outcome of one `update_to` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every script in the catalog ran to completion
    Ok,
    /// The database already sits at the requested version
    AtCurrentVersion,
    /// The caller asked for a specific version no migration can reach
    NoMigrationsFound,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ok => write!(f, "ok"),
            Outcome::AtCurrentVersion => write!(f, "at current version"),
            Outcome::NoMigrationsFound => write!(f, "no migrations found"),
        }
    }
}

/// Manager construction options
#[derive(Debug, Clone)]
pub struct ManagerOptions {
    /// Root directory of the migration tree
    pub root: PathBuf,

    /// Logical prefix for resolving change-script identifiers
    pub namespace: String,

    /// Prefix applied to every table the manager and scripts touch
    pub table_prefix: String,

    /// Wrap each update run in a single database transaction
    pub use_transaction: bool,
}

impl ManagerOptions {
    /// Options with an empty namespace, no table prefix, and
    /// transactional application
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            namespace: String::new(),
            table_prefix: String::new(),
            use_transaction: true,
        }
    }
}

/// Applies change scripts to move the database between schema versions
pub struct MigrationManager {
    db: Arc<dyn Database>,
    registry: ScriptRegistry,
    store: VersionStore,
    root: PathBuf,
    table_prefix: String,
    use_transaction: bool,
    rolled_back: bool,
}

impl MigrationManager {
    /// Create a manager and make sure the version table exists.
    ///
    /// Fails with a configuration error when the migration root is not a
    /// directory; no partial state is created in that case.
    pub fn new(db: Arc<dyn Database>, options: ManagerOptions) -> MigrateResult<Self> {
        if !options.root.is_dir() {
            return Err(MigrateError::Config(format!(
                "migration root is not a directory: {}",
                options.root.display()
            )));
        }

        let store = VersionStore::new(Arc::clone(&db), &options.table_prefix);
        store.ensure_exists()?;

        Ok(Self {
            registry: ScriptRegistry::new(options.namespace),
            store,
            db,
            root: options.root,
            table_prefix: options.table_prefix,
            use_transaction: options.use_transaction,
            rolled_back: false,
        })
    }

    /// Mutable access to the script registry, for registering
    /// compiled-in change scripts
    pub fn registry_mut(&mut self) -> &mut ScriptRegistry {
        &mut self.registry
    }

    /// Read the current schema version from the store
    pub fn current_schema_version(&self) -> MigrateResult<i64> {
        self.store.current_version()
    }

    /// Administrative override: record a version without running any
    /// scripts. Negative input is clamped to 0.
    pub fn set_current_schema_version(&self, version: i64) -> MigrateResult<()> {
        self.store.set_version_clamped(version)
    }

    /// Whether the most recent `update_to` ended in a rollback
    pub fn is_rollback(&self) -> bool {
        self.rolled_back
    }

    /// Move the database to `target`, or to the latest discovered
    /// version when `target` is `None`.
    pub fn update_to(&mut self, target: Option<i64>) -> MigrateResult<Outcome> {
        self.rolled_back = false;

        let current = self.store.current_version()?;
        let target_version = target.unwrap_or(i64::MAX);
        log::debug!(
            "Updating from version {} towards {}",
            current,
            match target {
                Some(v) => v.to_string(),
                None => "latest".to_string(),
            }
        );

        if current == target_version {
            return Ok(Outcome::AtCurrentVersion);
        }

        let catalog = find_migrations(current, target_version, &self.root)?;
        if catalog.is_empty() {
            // Nothing newer exists when the target was "latest" - the
            // database is simply caught up. An explicit unreachable
            // target is reported distinctly.
            return Ok(if target.is_none() {
                Outcome::AtCurrentVersion
            } else {
                Outcome::NoMigrationsFound
            });
        }

        // Direction follows the requested move, not the catalog order.
        let direction = Direction::between(current, target_version);
        log::debug!(
            "Applying {} migration(s) {} from version {}",
            catalog.len(),
            direction,
            current
        );

        if self.use_transaction {
            self.apply_transactional(&catalog, direction)?;
        } else {
            for record in &catalog {
                self.apply_one(record, direction)?;
            }
        }

        Ok(Outcome::Ok)
    }

    /// Apply the whole catalog inside one transaction.
    ///
    /// Any failure rolls the transaction back - the version writes are
    /// part of it, so no partial updates survive - sets the rollback
    /// flag, and surfaces the original failure's message.
    fn apply_transactional(
        &mut self,
        catalog: &[MigrationRecord],
        direction: Direction,
    ) -> MigrateResult<()> {
        self.db.begin_transaction()?;

        for record in catalog {
            if let Err(e) = self.apply_one(record, direction) {
                return Err(self.roll_back(e.to_string()));
            }
        }

        if let Err(e) = self.db.commit() {
            return Err(self.roll_back(e.to_string()));
        }

        Ok(())
    }

    /// Roll back the open transaction and record it
    fn roll_back(&mut self, message: String) -> MigrateError {
        if let Err(e) = self.db.rollback() {
            log::warn!("Rollback after failed migration batch also failed: {}", e);
        }
        self.rolled_back = true;
        log::warn!("Migration batch rolled back: {}", message);
        MigrateError::RolledBack { message }
    }

    /// Resolve and run one script, then record the resulting version:
    /// the script's own version going up, one below it going down.
    fn apply_one(&self, record: &MigrationRecord, direction: Direction) -> MigrateResult<()> {
        let script = self.registry.resolve(record, &self.root)?;

        log::info!(
            "Applying migration {:03} ({}) {}",
            record.version,
            record.name,
            direction
        );

        let result = match direction {
            Direction::Up => script.up(self.db.as_ref(), &self.table_prefix),
            Direction::Down => script.down(self.db.as_ref(), &self.table_prefix),
        };
        result.map_err(|e| MigrateError::Script {
            version: record.version,
            name: record.name.clone(),
            direction,
            message: e.to_string(),
        })?;

        let next = match direction {
            Direction::Up => record.version,
            Direction::Down => record.version - 1,
        };
        self.store.set_version(next)
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
