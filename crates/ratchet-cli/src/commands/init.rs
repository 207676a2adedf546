//! Init command implementation - scaffolds a new Ratchet project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

const EXAMPLE_MIGRATION: &str = "\
-- Example change script. Statements under `-- up` run when migrating
-- forward; statements under `-- down` reverse them.

-- up
CREATE TABLE {{ prefix }}example (
    id BIGINT PRIMARY KEY,
    name TEXT NOT NULL
);

-- down
DROP TABLE {{ prefix }}example;
";

/// Execute the init command
pub(crate) fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    scaffold(Path::new("."), args)
}

/// Create the project directory tree under `parent`
pub(crate) fn scaffold(parent: &Path, args: &InitArgs) -> Result<()> {
    let project_dir = parent.join(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Ratchet project: {}\n", args.name);

    let migrations_dir = project_dir.join("migrations");
    fs::create_dir_all(&migrations_dir)
        .with_context(|| format!("Failed to create directory: {}", migrations_dir.display()))?;

    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let safe_db_path = args.database_path.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{name}"
version: "1.0.0"

migration_path: migrations
table_prefix: ""
use_transaction: true

database:
  type: duckdb
  path: "{db_path}"
"#,
        name = safe_name,
        db_path = safe_db_path,
    );

    let config_path = project_dir.join("ratchet.yml");
    fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let example_path = migrations_dir.join("001-CreateExample.sql");
    fs::write(&example_path, EXAMPLE_MIGRATION)
        .with_context(|| format!("Failed to write {}", example_path.display()))?;

    println!("  Created: {}", config_path.display());
    println!("  Created: {}", example_path.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  ratchet migrate");

    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
