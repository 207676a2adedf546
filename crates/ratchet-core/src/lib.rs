//! Core library for Ratchet - shared types, config, and migration discovery.
//!
//! This crate knows nothing about databases. It parses `ratchet.yml`,
//! walks the migration root, and produces the ordered catalog the
//! migration manager applies.

pub mod config;
pub mod discovery;
pub mod error;

pub use config::{Config, DatabaseConfig, DbType};
pub use discovery::{find_migrations, Direction, MigrationRecord};
pub use error::{CoreError, CoreResult};
