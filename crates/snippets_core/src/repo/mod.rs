//! Repository layer for snippet persistence.
//!
//! # Responsibility
//! - Define the four store operations as a trait.
//! - Isolate SQLite query details from the service and the CLI.
//!
//! # Invariants
//! - At most one row exists per snippet name.
//! - Absence on lookup is reported as `FetchOutcome::NotFound`, not as an error.

pub mod snippet_repo;
