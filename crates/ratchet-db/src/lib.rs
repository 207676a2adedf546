//! Database abstraction layer for Ratchet.
//!
//! The [`Database`] trait is the seam shared by the migration manager,
//! the version store, and every change script. The DuckDB backend is the
//! only implementation in-tree.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use crate::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
