//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use duckdb::Connection;
use std::path::Path;

/// DuckDB database backend
///
/// Holds the connection directly, without a mutex: migration runs are
/// single-threaded and strictly sequential.
pub struct DuckDbBackend {
    conn: Connection,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{}: {}", e, path.display())))?;
        Ok(Self { conn })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Borrow the underlying DuckDB connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl Database for DuckDbBackend {
    fn execute(&self, sql: &str) -> DbResult<usize> {
        self.conn
            .execute(sql, [])
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    fn query_int(&self, sql: &str) -> DbResult<i64> {
        self.conn
            .query_row(sql, [], |row| row.get(0))
            .map_err(|e| DbError::QueryError(format!("{}: {}", e, sql)))
    }

    fn relation_exists(&self, name: &str) -> DbResult<bool> {
        // Handle schema-qualified names
        let (schema, table) = if let Some(pos) = name.rfind('.') {
            (&name[..pos], &name[pos + 1..])
        } else {
            ("main", name)
        };

        let sql = format!(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = '{}' AND table_name = '{}'",
            schema, table
        );

        let count = self.query_int(&sql)?;
        Ok(count > 0)
    }

    fn begin_transaction(&self) -> DbResult<()> {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))
    }

    fn commit(&self) -> DbResult<()> {
        self.conn
            .execute_batch("COMMIT")
            .map_err(|e| DbError::TransactionError(format!("COMMIT failed: {e}")))
    }

    fn rollback(&self) -> DbResult<()> {
        self.conn
            .execute_batch("ROLLBACK")
            .map_err(|e| DbError::TransactionError(format!("ROLLBACK failed: {e}")))
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}
