//! Domain model for named text snippets.
//!
//! # Invariants
//! - A snippet is identified by its `name`; at most one exists per name.
//! - Snippets are overwritten in place, never deleted.

pub mod snippet;
