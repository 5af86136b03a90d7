//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter when no `-v` is given
const LOG_ENV: &str = "RUST_LOG";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Edge list path, with `~` expanded
    pub input: PathBuf,
    /// Separator between the two nodes of an edge
    pub separator: String,
    /// Quiet mode
    pub quiet: bool,
    /// Filter directives for the log subscriber
    pub log_filter: String,
}

impl Config {
    /// Build config from CLI args, falling back to the environment for logging
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let separator = args.separator.trim().to_string();
        if separator.is_empty() {
            return Err(CliError::Config(
                "Separator must contain a non-whitespace character".to_string(),
            ));
        }

        Ok(Config {
            input: expand_tilde(&args.input),
            separator,
            quiet: args.quiet,
            log_filter: resolve_log_filter(args.verbose, std::env::var(LOG_ENV).ok()),
        })
    }

    /// Install a stderr log subscriber using `log_filter`
    pub fn init_logging(&self) -> Result<(), CliError> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .map_err(|e| CliError::Logging(format!("bad filter {:?}: {}", self.log_filter, e)))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CliError::Logging(e.to_string()))
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

/// `-v` flags win over the environment; with neither, only warnings are shown
fn resolve_log_filter(verbose: u8, env_filter: Option<String>) -> String {
    match (verbose, env_filter) {
        (0, Some(env)) if !env.trim().is_empty() => env,
        (0, _) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
