//! `snippets`: store and retrieve named snippets of text.
//!
//! ```text
//! snippets put <name> <snippet>
//! snippets get <name>
//! snippets catalog
//! snippets search <keyword>
//! ```

mod cli;
mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::RuntimeConfig;
use snippets_core::{init_logging, open_db, SnippetService, SqliteSnippetRepository};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RuntimeConfig::resolve(&cli.options)?;

    // A broken log directory must not block the command itself.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(&config.db_path).with_context(|| {
        format!(
            "failed to open snippet database `{}`",
            config.db_path.display()
        )
    })?;
    let service = SnippetService::new(SqliteSnippetRepository::new(&conn));

    let stdout = std::io::stdout();
    commands::dispatch(&service, cli.command, &mut stdout.lock())
        .context("snippet command failed")
}
