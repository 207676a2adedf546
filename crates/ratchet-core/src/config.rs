//! Configuration types and parsing for ratchet.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from ratchet.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing migration files, relative to the project root
    #[serde(default = "default_migration_path")]
    pub migration_path: String,

    /// Logical prefix for resolving change-script identifiers
    #[serde(default)]
    pub namespace: String,

    /// Prefix applied to every table the manager and scripts touch
    #[serde(default)]
    pub table_prefix: String,

    /// Wrap each migrate run in a single database transaction
    #[serde(default = "default_true")]
    pub use_transaction: bool,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// DuckDB (default)
    #[default]
    DuckDb,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database type
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_migration_path() -> String {
    "migrations".to_string()
}

fn default_true() -> bool {
    true
}

const DEFAULT_DB_PATH: &str = ":memory:";

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for ratchet.yml or ratchet.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("ratchet.yml");
        let yaml_path = dir.join("ratchet.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("ratchet.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.migration_path.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migration_path cannot be empty".to_string(),
            });
        }

        // The prefix is interpolated into table names, so restrict it to
        // identifier characters.
        if !self
            .table_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "table_prefix '{}' may only contain letters, digits, and underscores",
                    self.table_prefix
                ),
            });
        }

        Ok(())
    }

    /// Get the absolute migration root relative to a project root
    pub fn migration_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migration_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
