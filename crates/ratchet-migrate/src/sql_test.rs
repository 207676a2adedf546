use super::*;
use ratchet_db::DuckDbBackend;

fn script(source: &str) -> SqlScript {
    SqlScript::parse(source, Path::new("001-Test.sql")).unwrap()
}

#[test]
fn test_parse_up_and_down() {
    let s = script(
        "-- up\nCREATE TABLE users (id BIGINT);\n\n-- down\nDROP TABLE users;\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "").unwrap();
    assert!(db.relation_exists("users").unwrap());

    s.down(&db, "").unwrap();
    assert!(!db.relation_exists("users").unwrap());
}

#[test]
fn test_header_comments_ignored() {
    let s = script(
        "-- Creates the users table.\n-- Part of the initial schema.\n\n-- up\nCREATE TABLE users (id BIGINT);\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "").unwrap();
    assert!(db.relation_exists("users").unwrap());
}

#[test]
fn test_markers_are_case_insensitive() {
    let s = script("-- UP\nCREATE TABLE t (id BIGINT);\n-- Down\nDROP TABLE t;\n");

    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "").unwrap();
    s.down(&db, "").unwrap();
    assert!(!db.relation_exists("t").unwrap());
}

#[test]
fn test_missing_up_section_is_a_load_error() {
    let result = SqlScript::parse("SELECT 1;\n", Path::new("001-Bad.sql"));
    assert!(matches!(result, Err(MigrateError::Load { .. })));
}

#[test]
fn test_missing_down_section_fails_on_down_only() {
    let s = script("-- up\nCREATE TABLE t (id BIGINT);\n");

    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "").unwrap();

    let result = s.down(&db, "");
    assert!(matches!(result, Err(MigrateError::Irreversible { .. })));
}

#[test]
fn test_prefix_rendering() {
    let s = script(
        "-- up\nCREATE TABLE {{ prefix }}users (id BIGINT);\n-- down\nDROP TABLE {{ prefix }}users;\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "app_").unwrap();
    assert!(db.relation_exists("app_users").unwrap());
    assert!(!db.relation_exists("users").unwrap());

    s.down(&db, "app_").unwrap();
    assert!(!db.relation_exists("app_users").unwrap());
}

#[test]
fn test_template_error_reported() {
    let s = script("-- up\nCREATE TABLE {{ prefix (id BIGINT);\n");

    let db = DuckDbBackend::in_memory().unwrap();
    let result = s.up(&db, "");
    assert!(matches!(result, Err(MigrateError::Template { .. })));
}

#[test]
fn test_sql_failure_propagates_as_db_error() {
    let s = script("-- up\nNOT EVEN SQL;\n");

    let db = DuckDbBackend::in_memory().unwrap();
    let result = s.up(&db, "");
    assert!(matches!(result, Err(MigrateError::Db(_))));
}

#[test]
fn test_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("001-CreateUsers.sql");
    std::fs::write(&path, "-- up\nCREATE TABLE users (id BIGINT);\n").unwrap();

    let s = SqlScript::from_file(&path).unwrap();
    let db = DuckDbBackend::in_memory().unwrap();
    s.up(&db, "").unwrap();
    assert!(db.relation_exists("users").unwrap());
}

#[test]
fn test_from_missing_file_is_a_load_error() {
    let result = SqlScript::from_file(Path::new("/nonexistent/001-X.sql"));
    assert!(matches!(result, Err(MigrateError::Load { .. })));
}
