//! SQL-file change scripts
//!
//! A migration file holds its forward and backward statements under
//! `-- up` and `-- down` section markers:
//!
//! ```sql
//! -- up
//! CREATE TABLE {{ prefix }}users (id BIGINT PRIMARY KEY, name TEXT);
//!
//! -- down
//! DROP TABLE {{ prefix }}users;
//! ```
//!
//! Each section is rendered through minijinja with a `prefix` variable
//! bound to the configured table prefix before execution.

use crate::error::{MigrateError, MigrateResult};
use crate::script::ChangeScript;
use minijinja::{context, Environment};
use ratchet_db::Database;
use std::path::{Path, PathBuf};

const UP_MARKER: &str = "-- up";
const DOWN_MARKER: &str = "-- down";

/// A change script parsed from a `.sql` file
#[derive(Debug, Clone)]
pub struct SqlScript {
    path: PathBuf,
    up_sql: String,
    down_sql: Option<String>,
}

impl SqlScript {
    /// Load and parse a script from a file
    pub fn from_file(path: &Path) -> MigrateResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| MigrateError::Load {
            id: path.display().to_string(),
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&source, path)
    }

    /// Parse script source into up/down sections
    ///
    /// Text before the first marker is ignored, so files can open with
    /// header comments. A script without an up section is malformed; a
    /// missing down section only fails if the script is ever reversed.
    pub fn parse(source: &str, path: &Path) -> MigrateResult<Self> {
        enum Section {
            Header,
            Up,
            Down,
        }

        let mut section = Section::Header;
        let mut up_sql = String::new();
        let mut down_sql = String::new();

        for line in source.lines() {
            let marker = line.trim().to_ascii_lowercase();
            if marker == UP_MARKER {
                section = Section::Up;
            } else if marker == DOWN_MARKER {
                section = Section::Down;
            } else {
                let target = match section {
                    Section::Header => continue,
                    Section::Up => &mut up_sql,
                    Section::Down => &mut down_sql,
                };
                target.push_str(line);
                target.push('\n');
            }
        }

        if up_sql.trim().is_empty() {
            return Err(MigrateError::Load {
                id: path.display().to_string(),
                path: path.display().to_string(),
                reason: format!("no `{}` section found", UP_MARKER),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            up_sql,
            down_sql: Some(down_sql).filter(|sql| !sql.trim().is_empty()),
        })
    }

    /// Render a section with the table prefix bound as `prefix`
    fn render(&self, sql: &str, table_prefix: &str) -> MigrateResult<String> {
        let env = Environment::new();
        env.render_str(sql, context! { prefix => table_prefix })
            .map_err(|e| MigrateError::Template {
                path: self.path.display().to_string(),
                source: e,
            })
    }
}

impl ChangeScript for SqlScript {
    fn up(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()> {
        let sql = self.render(&self.up_sql, table_prefix)?;
        db.execute_batch(&sql)?;
        Ok(())
    }

    fn down(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()> {
        let down_sql = self.down_sql.as_deref().ok_or_else(|| {
            MigrateError::Irreversible {
                path: self.path.display().to_string(),
            }
        })?;
        let sql = self.render(down_sql, table_prefix)?;
        db.execute_batch(&sql)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sql_test.rs"]
mod tests;
