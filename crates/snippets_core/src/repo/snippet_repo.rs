//! Snippet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide upsert, fetch, catalog and substring search over `snippets`.
//! - Keep the insert-then-update fallback inside the persistence boundary.
//!
//! # Invariants
//! - Upsert leaves exactly one row for the name, holding the new text.
//! - Only a primary-key/unique violation triggers the update fallback;
//!   every other SQLite failure propagates.
//! - Catalog order is ascending by `keyword` (BINARY collation).

use crate::db::DbError;
use crate::model::snippet::{FetchOutcome, Snippet, UpsertOutcome};
use rusqlite::{
    ffi, params, Connection, ErrorCode, OptionalExtension, Transaction, TransactionBehavior,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snippet persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The insert collided with an existing name, but the follow-up update
    /// found no row to change.
    UpsertConflict(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(_) => write!(f, "snippet store operation failed"),
            Self::UpsertConflict(name) => write!(
                f,
                "snippet `{name}` disappeared between insert and update"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UpsertConflict(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store operations over named snippets.
pub trait SnippetRepository {
    fn upsert_snippet(&self, snippet: &Snippet) -> RepoResult<UpsertOutcome>;
    fn fetch_snippet(&self, name: &str) -> RepoResult<FetchOutcome>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
    fn search_snippets(&self, substring: &str) -> RepoResult<Vec<Snippet>>;
}

/// SQLite-backed snippet repository.
pub struct SqliteSnippetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnippetRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn begin_write(&self) -> rusqlite::Result<Transaction<'conn>> {
        // IMMEDIATE takes the write lock up front so two processes cannot both
        // pass the insert check before either commits.
        Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)
    }
}

impl SnippetRepository for SqliteSnippetRepository<'_> {
    fn upsert_snippet(&self, snippet: &Snippet) -> RepoResult<UpsertOutcome> {
        let tx = self.begin_write()?;
        let inserted = tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2);",
            params![snippet.name.as_str(), snippet.text.as_str()],
        );

        match inserted {
            Ok(_) => {
                tx.commit()?;
                return Ok(UpsertOutcome::Inserted);
            }
            Err(err) if is_unique_violation(&err) => tx.rollback()?,
            Err(err) => return Err(err.into()),
        }

        let tx = self.begin_write()?;
        let changed = tx.execute(
            "UPDATE snippets SET message = ?1 WHERE keyword = ?2;",
            params![snippet.text.as_str(), snippet.name.as_str()],
        )?;
        if changed == 0 {
            return Err(RepoError::UpsertConflict(snippet.name.clone()));
        }
        tx.commit()?;

        Ok(UpsertOutcome::Updated)
    }

    fn fetch_snippet(&self, name: &str) -> RepoResult<FetchOutcome> {
        let text = self
            .conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(text.into())
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT keyword FROM snippets ORDER BY keyword ASC;")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(names)
    }

    fn search_snippets(&self, substring: &str) -> RepoResult<Vec<Snippet>> {
        // instr() is a case-sensitive byte match; LIKE would fold ASCII case
        // and treat `%`/`_` in the keyword as wildcards.
        let mut stmt = self.conn.prepare(
            "SELECT keyword, message
             FROM snippets
             WHERE instr(message, ?1) > 0
             ORDER BY keyword ASC;",
        )?;
        let hits = stmt
            .query_map([substring], |row| {
                Ok(Snippet {
                    name: row.get("keyword")?,
                    text: row.get("message")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(hits)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_unique_violation;
    use crate::db::open_db_in_memory;
    use rusqlite::params;

    #[test]
    fn duplicate_keyword_is_classified_as_unique_violation() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        conn.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2);",
            params!["dup", "first"],
        )
        .expect("first insert should succeed");

        let err = conn
            .execute(
                "INSERT INTO snippets (keyword, message) VALUES (?1, ?2);",
                params!["dup", "second"],
            )
            .expect_err("duplicate keyword must fail");
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn not_null_violation_is_not_a_unique_violation() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let err = conn
            .execute(
                "INSERT INTO snippets (keyword, message) VALUES (?1, NULL);",
                ["orphan"],
            )
            .expect_err("null message must fail");
        assert!(!is_unique_violation(&err));
    }

    #[test]
    fn syntax_error_is_not_a_unique_violation() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let err = conn
            .execute("INSERT INTO nowhere VALUES (1);", [])
            .expect_err("unknown table must fail");
        assert!(!is_unique_violation(&err));
    }
}
