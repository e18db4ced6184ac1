//! Terminal user interface for the task list.
//!
//! Built with [`ratatui`] on the [`crossterm`] backend. The loop is
//! synchronous: poll for one event, apply it to the [`AppState`], redraw.
//!
//! # Submodules
//!
//! - [`app`]: state, focus, key handling, event polling, theme and symbols
//! - [`ui`]: frame layout
//! - [`terminal`]: raw mode and alternate screen setup with panic-safe cleanup
//! - [`widgets`]: header, input bar, task list, footer and notice

pub mod app;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::{AppState, EventHandler, Focus, Symbols, Theme, TuiEvent};
pub use terminal::{install_panic_hook, Tui};

use tracing::info;

use crate::config::Config;
use crate::error::{Result, TuiError};

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns [`TuiError`] if the terminal cannot be set up, drawn to or read
/// from.
pub fn run(config: &Config) -> Result<()> {
    install_panic_hook();

    let mut state = AppState::new(config.locale.messages());
    let events = EventHandler::new();
    let mut tui = Tui::new().map_err(TuiError::TerminalInit)?;

    info!(locale = %config.locale, "TUI started");

    while !state.should_quit() {
        tui.draw(|frame| ui::render(frame, &state))
            .map_err(TuiError::Render)?;

        let event = events
            .next()
            .map_err(|e| TuiError::Event(e.to_string()))?;
        state.handle_event(event);
    }

    tui.restore().map_err(TuiError::TerminalInit)?;

    let summary = state.model.summarize();
    info!(
        total = summary.total,
        completed = summary.completed,
        "TUI exited"
    );

    Ok(())
}
