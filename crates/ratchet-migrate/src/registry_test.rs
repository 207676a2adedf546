use super::*;
use crate::error::MigrateResult;
use ratchet_db::{Database, DuckDbBackend};
use std::path::PathBuf;

struct CreateAccounts;

impl ChangeScript for CreateAccounts {
    fn up(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()> {
        db.execute_batch(&format!(
            "CREATE TABLE {}accounts (id BIGINT)",
            table_prefix
        ))?;
        Ok(())
    }

    fn down(&self, db: &dyn Database, table_prefix: &str) -> MigrateResult<()> {
        db.execute_batch(&format!("DROP TABLE {}accounts", table_prefix))?;
        Ok(())
    }
}

fn record(version: i64, name: &str, rel: &str, ext: &str) -> MigrationRecord {
    MigrationRecord {
        version,
        name: name.to_string(),
        relative_path: PathBuf::from(rel),
        extension: ext.to_string(),
    }
}

#[test]
fn test_registered_factory_wins() {
    let mut registry = ScriptRegistry::new("app::");
    registry.register("CreateAccounts", || Box::new(CreateAccounts));

    let rec = record(1, "CreateAccounts", "001-CreateAccounts.rs", "rs");
    let script = registry.resolve(&rec, Path::new("/nowhere")).unwrap();

    let db = DuckDbBackend::in_memory().unwrap();
    script.up(&db, "t_").unwrap();
    assert!(db.relation_exists("t_accounts").unwrap());
}

#[test]
fn test_sql_fallback() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("001-CreateUsers.sql"),
        "-- up\nCREATE TABLE users (id BIGINT);\n",
    )
    .unwrap();

    let registry = ScriptRegistry::new("");
    let rec = record(1, "CreateUsers", "001-CreateUsers.sql", "sql");
    let script = registry.resolve(&rec, dir.path()).unwrap();

    let db = DuckDbBackend::in_memory().unwrap();
    script.up(&db, "").unwrap();
    assert!(db.relation_exists("users").unwrap());
}

#[test]
fn test_unresolvable_record_is_a_load_error() {
    let registry = ScriptRegistry::new("app::");
    let rec = record(2, "Unknown", "002-Unknown.rs", "rs");

    let result = registry.resolve(&rec, Path::new("/nowhere"));
    assert!(
        matches!(result, Err(MigrateError::Load { ref id, .. }) if id == "app::Unknown"),
        "expected Load error, got: {:?}",
        result.err()
    );
}

#[test]
fn test_qualified_id() {
    let registry = ScriptRegistry::new("billing::");
    assert_eq!(registry.qualified_id("CreateUsers"), "billing::CreateUsers");
}
