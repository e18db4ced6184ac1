//! Application state and event handling for the Tasklist TUI.
//!
//! The main types are:
//!
//! - [`AppState`]: the task list model plus everything the screen shows
//!   around it (input buffer, focus, selection, pending notice)
//! - [`Focus`]: which control receives keyboard input
//! - [`TuiEvent`]: events that drive the loop
//! - [`EventHandler`]: synchronous terminal polling with a tick fallback
//! - [`Theme`] and [`Symbols`]: styling and glyphs
//!
//! # Architecture
//!
//! Every key press is turned into at most one model operation by
//! [`AppState::handle_key`]. The loop then redraws the whole screen from the
//! state, so a frame is always a projection of the current model:
//!
//! ```text
//! EventHandler::next() --> AppState::handle_event() --> ui::render()
//!         ^                                                  |
//!         +--------------------------------------------------+
//! ```

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, info};

use tasklist_model::{TaskId, TaskListModel, ValidationError};

use crate::locale::Messages;
use crate::view::ListView;

// =============================================================================
// Focus
// =============================================================================

/// Control that currently receives keyboard input.
///
/// Tab moves forward through [`Focus::Input`], [`Focus::AddButton`] and
/// [`Focus::List`]; Shift+Tab moves backward. Both ends wrap.
///
/// # Example
///
/// ```
/// use tasklist_client::tui::app::Focus;
///
/// assert_eq!(Focus::default(), Focus::Input);
/// assert_eq!(Focus::Input.next(), Focus::AddButton);
/// assert_eq!(Focus::Input.previous(), Focus::List);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text field. Printable keys edit the input.
    #[default]
    Input,

    /// The add button. Enter or Space submits the input.
    AddButton,

    /// The task list. Arrow keys select, Space toggles, `d` deletes.
    List,
}

impl Focus {
    /// Returns the next control in tab order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Input,
        }
    }

    /// Returns the previous control in tab order.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::AddButton => Focus::Input,
            Focus::List => Focus::AddButton,
        }
    }
}

// =============================================================================
// Theme and Symbols
// =============================================================================

/// Color theme for the TUI.
///
/// Completed tasks are always marked by their checkbox symbol and crossed-out
/// text as well as by color, so nothing relies on color alone.
///
/// # NO_COLOR Support
///
/// [`Theme::from_env()`] returns [`Theme::monochrome()`] when the `NO_COLOR`
/// environment variable is set.
#[derive(Debug, Clone)]
pub struct Theme {
    // Tasks
    /// Style for pending task text (default: terminal default).
    pub task_pending: Style,
    /// Style for completed task text (default: dark gray, crossed out).
    pub task_completed: Style,
    /// Style for the checkbox of a completed task (default: green).
    pub checkbox_checked: Style,
    /// Style for the checkbox of a pending task (default: gray).
    pub checkbox_unchecked: Style,
    /// Style applied on top of the selected row (default: reversed).
    pub row_selected: Style,
    /// Style for the delete control (default: red).
    pub delete: Style,

    // Statistics
    /// Style for the total count (default: white).
    pub stat_total: Style,
    /// Style for the completed count (default: green).
    pub stat_completed: Style,

    // Form
    /// Style for the focused input text (default: cyan bold).
    pub input_focused: Style,
    /// Style for the unfocused input text (default: gray).
    pub input_unfocused: Style,
    /// Style for the add button when focused (default: black on magenta).
    pub button_focused: Style,
    /// Style for the add button when unfocused (default: magenta).
    pub button: Style,

    // Notice
    /// Border and text style of the validation notice (default: yellow bold).
    pub notice: Style,

    // Layout
    /// Style for unfocused borders (default: dark gray).
    pub border: Style,
    /// Style for focused borders (default: cyan).
    pub border_focused: Style,
    /// Style for titles (default: white bold).
    pub title: Style,
    /// Style for secondary text (default: gray).
    pub text_secondary: Style,
    /// Style for muted text such as placeholders (default: dark gray).
    pub text_muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            task_pending: Style::default(),
            task_completed: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            checkbox_checked: Style::default().fg(Color::Green),
            checkbox_unchecked: Style::default().fg(Color::Gray),
            row_selected: Style::default().add_modifier(Modifier::REVERSED),
            delete: Style::default().fg(Color::Red),

            stat_total: Style::default().fg(Color::White),
            stat_completed: Style::default().fg(Color::Green),

            input_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input_unfocused: Style::default().fg(Color::Gray),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            button: Style::default().fg(Color::Magenta),

            notice: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            text_secondary: Style::default().fg(Color::Gray),
            text_muted: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Creates a theme that uses only modifiers, no colors.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            task_pending: Style::default(),
            task_completed: Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            checkbox_checked: Style::default().add_modifier(Modifier::BOLD),
            checkbox_unchecked: Style::default(),
            row_selected: Style::default().add_modifier(Modifier::REVERSED),
            delete: Style::default().add_modifier(Modifier::UNDERLINED),

            stat_total: Style::default(),
            stat_completed: Style::default().add_modifier(Modifier::BOLD),

            input_focused: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            input_unfocused: Style::default().add_modifier(Modifier::DIM),
            button_focused: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            button: Style::default(),

            notice: Style::default().add_modifier(Modifier::BOLD),

            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            text_secondary: Style::default().add_modifier(Modifier::DIM),
            text_muted: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Returns [`Theme::monochrome()`] if `NO_COLOR` is set, the default theme otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }
}

/// Glyphs used by the TUI (unicode or ASCII).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Checkbox of a completed task.
    pub checked: &'static str,
    /// Checkbox of a pending task.
    pub unchecked: &'static str,
    /// Marker in front of the selected row.
    pub pointer: &'static str,
    /// Text cursor shown at the end of the focused input.
    pub cursor: &'static str,
    /// Separator between key hints.
    pub bullet: &'static str,
    /// Key name for moving the selection up and down.
    pub up_down: &'static str,
}

/// Unicode symbol set for modern terminals.
pub const UNICODE_SYMBOLS: Symbols = Symbols {
    checked: "☑",
    unchecked: "☐",
    pointer: "›",
    cursor: "█",
    bullet: "•",
    up_down: "↑/↓",
};

/// ASCII symbol set for limited terminals.
pub const ASCII_SYMBOLS: Symbols = Symbols {
    checked: "[x]",
    unchecked: "[ ]",
    pointer: ">",
    cursor: "_",
    bullet: "*",
    up_down: "Up/Down",
};

impl Symbols {
    /// Picks ASCII symbols for the Linux console and VT100 terminals, unicode otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var("TERM")
            .map(|t| t.contains("linux") || t.contains("vt100"))
            .unwrap_or(false)
        {
            ASCII_SYMBOLS
        } else {
            UNICODE_SYMBOLS
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Everything the TUI shows, plus the model it drives.
///
/// # Example
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use tasklist_client::locale::Locale;
/// use tasklist_client::tui::app::AppState;
///
/// let mut state = AppState::new(Locale::En.messages());
/// for c in "milk".chars() {
///     state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
/// }
/// state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
///
/// assert_eq!(state.model.len(), 1);
/// assert!(state.input.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    /// The task list.
    pub model: TaskListModel,

    /// Raw contents of the input field.
    pub input: String,

    /// Control receiving keyboard input.
    pub focus: Focus,

    /// Index of the selected row in the list.
    pub selected: usize,

    /// Blocking notice waiting to be dismissed.
    pub notice: Option<&'static str>,

    /// Flag indicating the user asked to exit.
    pub should_quit: bool,

    /// Localized strings.
    pub messages: &'static Messages,

    /// Theme configuration.
    pub theme: Theme,

    /// Symbol set (unicode or ASCII).
    pub symbols: Symbols,
}

impl AppState {
    /// Creates a state with an empty list, input focus and auto-detected styling.
    #[must_use]
    pub fn new(messages: &'static Messages) -> Self {
        Self {
            model: TaskListModel::new(),
            input: String::new(),
            focus: Focus::default(),
            selected: 0,
            notice: None,
            should_quit: false,
            messages,
            theme: Theme::from_env(),
            symbols: Symbols::detect(),
        }
    }

    /// Projects the model for rendering.
    #[must_use]
    pub fn view(&self) -> ListView {
        ListView::project(&self.model, self.messages)
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns `true` while a notice is waiting to be dismissed.
    #[must_use]
    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    /// Id of the selected task, if the list is not empty.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.model.tasks().get(self.selected).map(|task| task.id)
    }

    /// Submits the input field to the model.
    ///
    /// This is the only submission path; Enter in the input field and the add
    /// button both end up here. On success the input is cleared and the new
    /// task is selected. On rejection the notice is raised and the input is
    /// left as typed.
    pub fn submit_input(&mut self) {
        match self.model.add(&self.input) {
            Ok(task) => {
                info!(id = %task.id, "Task added");
                self.input.clear();
                self.selected = self.model.len().saturating_sub(1);
            }
            Err(ValidationError::EmptyText) => {
                debug!("Empty task submitted");
                self.notice = Some(self.messages.empty_text_notice);
            }
        }
    }

    /// Toggles the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Err(e) = self.model.toggle(id) {
                debug!(error = %e, "Ignoring toggle of missing task");
            }
        }
    }

    /// Deletes the selected task and keeps the selection in range.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            match self.model.remove(id) {
                Ok(()) => info!(id = %id, "Task removed"),
                Err(e) => debug!(error = %e, "Ignoring removal of missing task"),
            }
        }
        self.clamp_selection();
    }

    /// Moves the selection one row down, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.model.len() {
            self.selected += 1;
        }
    }

    /// Moves the selection one row up, stopping at the first row.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.model.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Applies a [`TuiEvent`] to the state.
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) => self.handle_key(key),
            TuiEvent::Tick | TuiEvent::Resize(..) => {}
        }
    }

    /// Applies a key press to the state.
    ///
    /// While a notice is showing, only the keys that dismiss it (and Ctrl+C)
    /// have any effect.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit_input();
                }
            }
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            _ => {}
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Events that drive the TUI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// No input arrived within the tick interval.
    Tick,

    /// A key was pressed.
    Key(KeyEvent),

    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),
}

/// Default tick rate for the event handler.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Polls the terminal for input.
///
/// Each call to [`EventHandler::next`] blocks for at most one tick interval.
/// Input is handled strictly one event at a time on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a handler with the default tick rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
        }
    }

    /// Waits up to one tick for the next event.
    ///
    /// Returns [`TuiEvent::Tick`] when nothing arrived in time or when the
    /// event is of a kind the TUI ignores (mouse, focus, paste).
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            Ok(convert_crossterm_event(event::read()?).unwrap_or(TuiEvent::Tick))
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

/// Converts a crossterm event to a [`TuiEvent`].
///
/// Returns `None` for event kinds the TUI does not use.
fn convert_crossterm_event(event: CrosstermEvent) -> Option<TuiEvent> {
    match event {
        CrosstermEvent::Key(key_event) => Some(TuiEvent::Key(key_event)),
        CrosstermEvent::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
        CrosstermEvent::Mouse(_) => None,
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
        CrosstermEvent::Paste(_) => None,
    }
}
