//! Snippet use-case service.
//!
//! # Responsibility
//! - Provide put/get/catalog/search entry points for callers.
//! - Delegate persistence to a [`SnippetRepository`].
//!
//! # Invariants
//! - Snippet text never reaches the log; names and sizes do.
//! - Service APIs never bypass repository contracts.

use crate::logging::error_chain;
use crate::model::snippet::{FetchOutcome, Snippet};
use crate::repo::snippet_repo::{RepoResult, SnippetRepository};
use log::{debug, error, info};

/// Use-case service wrapper for snippet operations.
pub struct SnippetService<R: SnippetRepository> {
    repo: R,
}

impl<R: SnippetRepository> SnippetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores `text` under `name`, replacing any previous text.
    ///
    /// Returns the stored pair.
    pub fn put(&self, name: impl Into<String>, text: impl Into<String>) -> RepoResult<Snippet> {
        let snippet = Snippet::new(name, text);
        info!(
            "event=snippet_put module=service status=start name={:?} text_len={}",
            snippet.name,
            snippet.text.len()
        );

        let outcome = self
            .repo
            .upsert_snippet(&snippet)
            .inspect_err(|err| log_failure("snippet_put", err))?;

        debug!(
            "event=snippet_put module=service status=ok name={:?} outcome={}",
            snippet.name,
            outcome.as_str()
        );
        Ok(snippet)
    }

    /// Looks up the text stored under `name`.
    pub fn get(&self, name: &str) -> RepoResult<FetchOutcome> {
        info!("event=snippet_get module=service status=start name={name:?}");

        let outcome = self
            .repo
            .fetch_snippet(name)
            .inspect_err(|err| log_failure("snippet_get", err))?;

        debug!(
            "event=snippet_get module=service status=ok name={name:?} found={}",
            outcome.is_found()
        );
        Ok(outcome)
    }

    /// Lists every stored name in ascending order.
    pub fn catalog(&self) -> RepoResult<Vec<String>> {
        info!("event=snippet_catalog module=service status=start");

        let names = self
            .repo
            .list_names()
            .inspect_err(|err| log_failure("snippet_catalog", err))?;

        debug!(
            "event=snippet_catalog module=service status=ok count={}",
            names.len()
        );
        Ok(names)
    }

    /// Returns every snippet whose text contains `keyword`.
    pub fn search(&self, keyword: &str) -> RepoResult<Vec<Snippet>> {
        info!(
            "event=snippet_search module=service status=start keyword_len={}",
            keyword.len()
        );

        let hits = self
            .repo
            .search_snippets(keyword)
            .inspect_err(|err| log_failure("snippet_search", err))?;

        debug!(
            "event=snippet_search module=service status=ok count={}",
            hits.len()
        );
        Ok(hits)
    }
}

fn log_failure(event: &str, err: &dyn std::error::Error) {
    error!(
        "event={event} module=service status=error error={}",
        error_chain(err)
    );
}
