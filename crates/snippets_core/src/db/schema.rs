//! Snippet table bootstrap.
//!
//! There is exactly one schema version. Opening an empty database creates
//! the table and stamps the version; opening an already stamped database
//! is a no-op.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_SNIPPETS_SQL: &str = "CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY NOT NULL,
    message TEXT NOT NULL
);";

/// Creates the `snippets` table when missing and records the schema version.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let current = current_user_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            supported: SCHEMA_VERSION,
        });
    }

    if current == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_SNIPPETS_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
