//! Core use-case services.
//!
//! # Responsibility
//! - Expose the store operations as use-case entry points.
//! - Emit operation-level log events around repository calls.

pub mod snippet_service;
