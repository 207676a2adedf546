//! Change-script registry
//!
//! Change scripts are resolved purely from the filename-derived
//! identifier at application time. Compiled-in Rust scripts register a
//! factory under `<namespace><Name>`; anything unregistered falls back
//! to the SQL-file loader when the file carries a `.sql` extension.

use crate::error::{MigrateError, MigrateResult};
use crate::script::ChangeScript;
use crate::sql::SqlScript;
use ratchet_core::MigrationRecord;
use std::collections::HashMap;
use std::path::Path;

/// Constructor for a registered change script
pub type ScriptFactory = Box<dyn Fn() -> Box<dyn ChangeScript>>;

/// Registry mapping fully-qualified script identifiers to factories
pub struct ScriptRegistry {
    namespace: String,
    factories: HashMap<String, ScriptFactory>,
}

impl ScriptRegistry {
    /// Create an empty registry with the given identifier namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            factories: HashMap::new(),
        }
    }

    /// The fully-qualified identifier for a logical script name
    pub fn qualified_id(&self, name: &str) -> String {
        format!("{}{}", self.namespace, name)
    }

    /// Register a factory for the script named `name`.
    ///
    /// The name is the `<Name>` part of the migration file name; the
    /// registry qualifies it with its namespace. Registering the same
    /// name twice replaces the earlier factory.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn ChangeScript> + 'static,
    {
        self.factories
            .insert(self.qualified_id(name), Box::new(factory));
    }

    /// Resolve the change script for a discovered record.
    ///
    /// Registered factories win; `.sql` files load as [`SqlScript`];
    /// anything else is a load error.
    pub fn resolve(
        &self,
        record: &MigrationRecord,
        root: &Path,
    ) -> MigrateResult<Box<dyn ChangeScript>> {
        let id = self.qualified_id(&record.name);

        if let Some(factory) = self.factories.get(&id) {
            log::debug!("Resolved '{}' from the registry", id);
            return Ok(factory());
        }

        if record.extension.eq_ignore_ascii_case("sql") {
            let script = SqlScript::from_file(&root.join(&record.relative_path))?;
            return Ok(Box::new(script));
        }

        Err(MigrateError::Load {
            id,
            path: record.relative_path.display().to_string(),
            reason: "no registered change script and not a .sql file".to_string(),
        })
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
