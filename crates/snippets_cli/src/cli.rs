//! Command-line surface for the snippet tool.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Store and retrieve snippets of text
#[derive(Parser, Debug)]
#[command(name = "snippets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// SQLite file holding the snippets table
    #[arg(long, global = true, env = "SNIPPETS_DB", default_value = "snippets.db")]
    pub db: PathBuf,

    /// Directory for snippets*.log files (default: current directory)
    #[arg(long, global = true, env = "SNIPPETS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, global = true, env = "SNIPPETS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a snippet, replacing any snippet with the same name
    Put {
        /// Name of the snippet
        name: String,
        /// Snippet text
        snippet: String,
    },

    /// Print the snippet stored under a name
    Get {
        /// Name of the snippet
        name: String,
    },

    /// List all snippet names
    Catalog,

    /// Print every snippet whose text contains a keyword
    Search {
        /// Case-sensitive text to look for
        keyword: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Put { .. } => "put",
            Self::Get { .. } => "get",
            Self::Catalog => "catalog",
            Self::Search { .. } => "search",
        }
    }
}
