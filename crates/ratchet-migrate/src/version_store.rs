//! Durable storage of the schema version
//!
//! The version lives in exactly one row of `<prefix>schema_version` in
//! the target database. The table is created and seeded with 0 on first
//! use.

use crate::error::{MigrateError, MigrateResult};
use ratchet_db::Database;
use std::sync::Arc;

/// Fixed base name of the version table, prefixed per configuration
pub const VERSION_TABLE: &str = "schema_version";

/// Reads and writes the single stored schema-version integer
pub struct VersionStore {
    db: Arc<dyn Database>,
    table: String,
}

impl VersionStore {
    /// Create a store for the `<table_prefix>schema_version` table
    pub fn new(db: Arc<dyn Database>, table_prefix: &str) -> Self {
        Self {
            table: format!("{}{}", table_prefix, VERSION_TABLE),
            db,
        }
    }

    /// The prefixed table name
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Create the version table and seed it with version 0 if needed.
    ///
    /// Idempotent - safe to call on every manager construction.
    pub fn ensure_exists(&self) -> MigrateResult<()> {
        self.db
            .execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {} (version BIGINT NOT NULL)",
                self.table
            ))
            .map_err(|e| {
                MigrateError::Storage(format!("failed to create {} table: {}", self.table, e))
            })?;

        let rows = self
            .db
            .query_int(&format!("SELECT COUNT(*) FROM {}", self.table))
            .map_err(|e| {
                MigrateError::Storage(format!("failed to query {} table: {}", self.table, e))
            })?;

        if rows == 0 {
            self.db
                .execute(&format!("INSERT INTO {} (version) VALUES (0)", self.table))
                .map_err(|e| {
                    MigrateError::Storage(format!("failed to seed {} table: {}", self.table, e))
                })?;
        }

        Ok(())
    }

    /// Read the single stored version
    pub fn current_version(&self) -> MigrateResult<i64> {
        self.db
            .query_int(&format!("SELECT version FROM {}", self.table))
            .map_err(|e| MigrateError::Storage(format!("failed to read schema version: {}", e)))
    }

    /// Overwrite the stored version
    pub fn set_version(&self, version: i64) -> MigrateResult<()> {
        self.db
            .execute(&format!(
                "UPDATE {} SET version = {}",
                self.table, version
            ))
            .map_err(|e| MigrateError::Storage(format!("failed to write schema version: {}", e)))?;
        Ok(())
    }

    /// Overwrite the stored version, clamping negative input to 0.
    ///
    /// Used by the administrative hard-set operation only; migration
    /// bookkeeping goes through [`set_version`](Self::set_version).
    pub fn set_version_clamped(&self, version: i64) -> MigrateResult<()> {
        self.set_version(version.max(0))
    }
}

#[cfg(test)]
#[path = "version_store_test.rs"]
mod tests;
