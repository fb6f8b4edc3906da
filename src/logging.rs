//! Tracing subscriber setup.
//!
//! Subcommands log to stderr. The TUI owns the terminal, so it logs to
//! `triage.log` in the config directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::config_dir;
use crate::error::{Result, TriageError};

/// Environment variable holding the log filter (e.g. `debug`, `triage_desk=trace`)
pub const LOG_ENV: &str = "TRIAGE_LOG";

/// Log file name inside the config directory
pub const LOG_FILE: &str = "triage.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr for one-shot commands
pub fn init_cli_logging() {
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file for the full-screen TUI, returning the file's path
pub fn init_tui_logging() -> Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TriageError::Other(format!("failed to initialise logging: {e}")))?;

    Ok(path)
}
