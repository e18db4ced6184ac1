//! Logging setup for the Tasklist client.
//!
//! Both front ends log through `tracing`. Where the output goes depends on the
//! front end, since the TUI owns the terminal while it runs:
//!
//! | Front end | `TASKLIST_LOG_FILE` set | Not set |
//! |-----------|-------------------------|---------|
//! | shell | file, default `info` | stderr, default `warn` |
//! | tui | file, default `info` | no subscriber |
//!
//! `RUST_LOG` overrides the default filter in every case.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Default filter when logging to a file.
const FILE_DEFAULT_FILTER: &str = "info";

/// Default filter when logging to stderr.
const STDERR_DEFAULT_FILTER: &str = "warn";

/// Where log output should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Write to stderr when no log file is configured.
    StderrFallback,
    /// Only log when a log file is configured.
    FileOnly,
}

/// Initializes the global `tracing` subscriber.
///
/// Does nothing when `target` is [`LogTarget::FileOnly`] and no log file is
/// configured.
///
/// # Errors
///
/// Returns an error if the log file or its parent directory cannot be created.
pub fn init_logging(config: &Config, target: LogTarget) -> io::Result<()> {
    match (&config.log_file, target) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(FILE_DEFAULT_FILTER))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .init();
        }
        (None, LogTarget::StderrFallback) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(STDERR_DEFAULT_FILTER))
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .init();
        }
        (None, LogTarget::FileOnly) => {}
    }
    Ok(())
}

/// Opens `path` for appending, creating it and any missing parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
