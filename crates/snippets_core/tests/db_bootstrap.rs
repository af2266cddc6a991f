use rusqlite::Connection;
use snippets_core::db::schema::SCHEMA_VERSION;
use snippets_core::{open_db, open_db_in_memory, DbError};
use std::error::Error;

#[test]
fn open_db_in_memory_creates_snippets_table() {
    let conn = open_db_in_memory().expect("in-memory db should open");

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_eq!(
        column_names(&conn, "snippets"),
        vec!["keyword".to_string(), "message".to_string()]
    );
}

#[test]
fn opening_same_file_twice_keeps_existing_rows() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("snippets.db");

    let first = open_db(&path).expect("first open should succeed");
    first
        .execute(
            "INSERT INTO snippets (keyword, message) VALUES ('kept', 'still here');",
            [],
        )
        .expect("seed row should insert");
    drop(first);

    let second = open_db(&path).expect("reopen should succeed");
    assert_eq!(schema_version(&second), SCHEMA_VERSION);
    let message: String = second
        .query_row(
            "SELECT message FROM snippets WHERE keyword = 'kept';",
            [],
            |row| row.get(0),
        )
        .expect("seed row should survive reopen");
    assert_eq!(message, "still here");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).expect("raw sqlite open should succeed");
    conn.execute_batch("PRAGMA user_version = 42;")
        .expect("user_version should be writable");
    drop(conn);

    match open_db(&path).expect_err("newer schema must be rejected") {
        DbError::UnsupportedSchemaVersion {
            db_version,
            supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_a_directory_fails_with_sqlite_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    let err = open_db(dir.path()).expect_err("a directory is not a database");
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn sqlite_error_message_is_not_repeated_by_its_source() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    let err = open_db(dir.path()).expect_err("a directory is not a database");
    let source = err.source().expect("sqlite errors keep their cause");
    assert_eq!(err.to_string(), "sqlite error");
    assert_ne!(source.to_string(), err.to_string());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("user_version should be readable")
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .expect("table_info should prepare");
    stmt.query_map([], |row| row.get::<_, String>("name"))
        .expect("table_info should run")
        .collect::<Result<Vec<_>, _>>()
        .expect("column names should decode")
}
