//! Terminal session guard for the Tasklist TUI.
//!
//! [`Tui`] puts the terminal into raw mode on the alternate screen and puts it
//! back when dropped. [`install_panic_hook`] does the same before a panic
//! message is printed, so a crash never leaves the shell unusable.
//!
//! ```ignore
//! use tasklist_client::tui::{install_panic_hook, Tui};
//!
//! install_panic_hook();
//! let mut tui = Tui::new()?;
//! tui.draw(|frame| ui::render(frame, &state))?;
//! tui.restore()?;
//! ```

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Leaves the alternate screen and raw mode.
///
/// Both steps are attempted even if the first one fails; the first error is
/// returned.
fn leave_terminal() -> io::Result<()> {
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

/// Installs a panic hook that restores the terminal, then runs the previous hook.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal();
        previous(info);
    }));
}

/// Owns the terminal for the lifetime of the TUI.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Enters raw mode and the alternate screen and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up. Any step that
    /// already took effect is undone first.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let setup = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match setup {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = leave_terminal();
                Err(e)
            }
        }
    }

    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render).map(|_| ())
    }

    /// Gives the terminal back to the shell, reporting any failure.
    ///
    /// Later calls, and the eventual drop, do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal state cannot be restored.
    pub fn restore(&mut self) -> io::Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        leave_terminal()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
