//! Tasklist - a minimal task list for the terminal.
//!
//! # Commands
//!
//! - `tasklist` or `tasklist tui`: Full-screen terminal interface
//! - `tasklist shell`: Line-oriented command shell on stdin/stdout
//!
//! # Environment Variables
//!
//! See the [`config`](tasklist_client::config) module for available
//! configuration options.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tasklist_client::config::Config;
use tasklist_client::locale::Locale;
use tasklist_client::logging::{init_logging, LogTarget};
use tasklist_client::shell::Shell;
use tasklist_client::tui;

/// Tasklist - a minimal task list for the terminal.
///
/// Add, complete and delete tasks, with running totals.
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    TASKLIST_LOCALE     Display language: en or ja (default: en)
    TASKLIST_LOG_FILE   Append logs to this file
    NO_COLOR            Disable colors in the TUI
    RUST_LOG            Log filter (default: info for files, warn for stderr)

EXAMPLES:
    # Start the terminal interface
    tasklist

    # Japanese interface
    tasklist --locale ja

    # Scripted session
    printf 'add buy milk\\ntoggle 1\\njson\\n' | tasklist shell
")]
struct Cli {
    /// Display language (overrides TASKLIST_LOCALE).
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start the full-screen terminal interface (default).
    Tui,

    /// Read commands from stdin, one per line.
    ///
    /// Type `help` for the list of commands. End of input quits.
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_locale_override(cli.locale);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_logging(&config, LogTarget::FileOnly).context("Failed to initialize logging")?;
            tui::run(&config).context("Terminal interface failed")
        }
        Command::Shell => {
            init_logging(&config, LogTarget::StderrFallback)
                .context("Failed to initialize logging")?;
            run_shell(&config)
        }
    }
}

/// Runs the line shell on stdin and stdout.
fn run_shell(config: &Config) -> Result<()> {
    info!(locale = %config.locale, "Launching shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config.locale.messages());
    shell.run().context("Shell session failed")?;

    let summary = shell.model().summarize();
    info!(
        total = summary.total,
        completed = summary.completed,
        "Shell exited"
    );

    Ok(())
}
