//! Runtime configuration resolved from global CLI options.
//!
//! Flags take precedence over `SNIPPETS_*` environment variables (clap
//! handles both); unset values fall back to the current directory and the
//! build's default log level.

use crate::cli::GlobalOptions;
use anyhow::{Context, Result};
use snippets_core::default_log_level;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub db_path: PathBuf,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl RuntimeConfig {
    pub fn resolve(options: &GlobalOptions) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Ok(Self::resolve_in(options, &cwd))
    }

    fn resolve_in(options: &GlobalOptions, cwd: &Path) -> Self {
        let log_dir = match &options.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };

        Self {
            db_path: options.db.clone(),
            log_dir,
            log_level: options
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeConfig;
    use crate::cli::GlobalOptions;
    use std::path::{Path, PathBuf};

    fn options(log_dir: Option<&str>, log_level: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            db: PathBuf::from("snippets.db"),
            log_dir: log_dir.map(PathBuf::from),
            log_level: log_level.map(str::to_string),
        }
    }

    #[test]
    fn defaults_to_cwd_and_build_log_level() {
        let config = RuntimeConfig::resolve_in(&options(None, None), Path::new("/work"));
        assert_eq!(config.log_dir, PathBuf::from("/work"));
        assert_eq!(config.log_level, snippets_core::default_log_level());
        assert_eq!(config.db_path, PathBuf::from("snippets.db"));
    }

    #[test]
    fn relative_log_dir_is_anchored_at_cwd() {
        let config =
            RuntimeConfig::resolve_in(&options(Some("logs"), Some("warn")), Path::new("/work"));
        assert_eq!(config.log_dir, PathBuf::from("/work/logs"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn absolute_log_dir_is_kept() {
        let config =
            RuntimeConfig::resolve_in(&options(Some("/var/log/snip"), None), Path::new("/work"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/snip"));
    }
}
