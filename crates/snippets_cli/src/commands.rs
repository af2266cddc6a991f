//! Command dispatcher: one subcommand, one service call, printed result.
//!
//! # Invariants
//! - Errors are never caught here; they propagate to `main`.
//! - All output goes through the provided writer.

use crate::cli::Command;
use anyhow::Result;
use log::info;
use snippets_core::{FetchOutcome, SnippetRepository, SnippetService};
use std::io::Write;

/// Printed by `get` when no snippet exists under the requested name.
pub const NOT_FOUND_MESSAGE: &str = "404: Snippet Not Found";

/// Runs `command` against `service` and writes its human-readable result.
pub fn dispatch<R, W>(service: &SnippetService<R>, command: Command, out: &mut W) -> Result<()>
where
    R: SnippetRepository,
    W: Write,
{
    let command_name = command.name();
    info!("event=command_dispatch module=cli status=start command={command_name}");

    match command {
        Command::Put { name, snippet } => {
            let stored = service.put(name, snippet)?;
            writeln!(out, "Stored '{}' as '{}'", stored.text, stored.name)?;
        }
        Command::Get { name } => {
            let text = match service.get(&name)? {
                FetchOutcome::Found(text) => text,
                FetchOutcome::NotFound => NOT_FOUND_MESSAGE.to_string(),
            };
            writeln!(out, "Retrieved snippet: '{text}'")?;
        }
        Command::Catalog => {
            for keyword in service.catalog()? {
                writeln!(out, "{keyword}")?;
            }
        }
        Command::Search { keyword } => {
            for hit in service.search(&keyword)? {
                writeln!(out, "'{}': '{}'", hit.name, hit.text)?;
            }
        }
    }

    out.flush()?;
    info!("event=command_dispatch module=cli status=ok command={command_name}");
    Ok(())
}
