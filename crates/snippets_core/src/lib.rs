//! Core persistence and use-case logic for the snippet store.
//!
//! A snippet is a named piece of text kept in a single SQLite table. This
//! crate owns the table bootstrap, the four store operations and logging.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::snippet::{FetchOutcome, Snippet, UpsertOutcome};
pub use repo::snippet_repo::{RepoError, RepoResult, SnippetRepository, SqliteSnippetRepository};
pub use service::snippet_service::SnippetService;
