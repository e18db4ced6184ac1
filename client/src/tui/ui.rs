//! Frame composition for the Tasklist TUI.
//!
//! [`render`] lays the widgets out top to bottom and draws the notice on top
//! when one is pending:
//!
//! ```text
//! ┌──────────── header ─────────────┐  HEADER_HEIGHT
//! ├──────── input │ [ Add ] ────────┤  INPUT_BAR_HEIGHT
//! │                                 │
//! │         task list               │  remaining rows
//! │                                 │
//! ├──────── stats footer ───────────┤  STATS_FOOTER_HEIGHT
//! └─────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::tui::app::{AppState, Focus};
use crate::tui::widgets::{
    HeaderWidget, InputBarWidget, NoticeWidget, StatsFooterWidget, TaskListWidget, HEADER_HEIGHT,
    INPUT_BAR_HEIGHT, STATS_FOOTER_HEIGHT,
};

/// Draws the whole screen from the current state.
///
/// # Example
///
/// ```ignore
/// use tasklist_client::tui::ui::render;
///
/// terminal.draw(|frame| render(frame, &state))?;
/// ```
pub fn render(frame: &mut Frame, state: &AppState) {
    let view = state.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_BAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATS_FOOTER_HEIGHT),
        ])
        .split(area);

    frame.render_widget(
        HeaderWidget::new(state.messages.title, &state.theme),
        chunks[0],
    );
    frame.render_widget(
        InputBarWidget::new(
            &state.input,
            state.focus,
            state.messages,
            &state.theme,
            &state.symbols,
        ),
        chunks[1],
    );
    frame.render_widget(
        TaskListWidget::new(
            &view,
            state.selected,
            state.focus == Focus::List,
            state.messages,
            &state.theme,
            &state.symbols,
        ),
        chunks[2],
    );
    frame.render_widget(
        StatsFooterWidget::new(
            &view,
            state.focus,
            state.messages,
            &state.theme,
            &state.symbols,
        ),
        chunks[3],
    );

    if let Some(notice) = state.notice {
        frame.render_widget(NoticeWidget::new(notice, state.messages, &state.theme), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::tui::app::UNICODE_SYMBOLS;
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_terminal_with_size(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn rendered_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = create_test_terminal_with_size(width, height);
        terminal.draw(|frame| render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn english_state() -> AppState {
        let mut state = AppState::new(Locale::En.messages());
        state.symbols = UNICODE_SYMBOLS;
        state
    }

    #[test]
    fn empty_state_shows_title_input_and_placeholder() {
        let state = english_state();
        let text = rendered_text(&state, 80, 24);

        assert!(text.contains("Task List"));
        assert!(text.contains("Enter a new task..."));
        assert!(text.contains("[ Add ]"));
        assert!(text.contains("no tasks yet — add one"));
        assert!(!text.contains("Total:"));
    }

    #[test]
    fn tasks_and_counts_are_rendered() {
        let mut state = english_state();
        let first = state.model.add("task1").unwrap();
        state.model.add("task2").unwrap();
        state.model.toggle(first.id).unwrap();

        let text = rendered_text(&state, 80, 24);
        assert!(text.contains("☑ task1"));
        assert!(text.contains("☐ task2"));
        assert!(text.contains("Total: 2 | Completed: 1"));
        assert!(!text.contains("no tasks yet"));
    }

    #[test]
    fn notice_overlays_screen() {
        let mut state = english_state();
        state.notice = Some(state.messages.empty_text_notice);

        let text = rendered_text(&state, 80, 24);
        assert!(text.contains("enter a task"));
    }

    #[test]
    fn render_with_minimum_terminal_size() {
        let mut state = english_state();
        state.model.add("task").unwrap();
        state.notice = Some(state.messages.empty_text_notice);
        rendered_text(&state, 1, 1);
        rendered_text(&state, 20, 5);
    }

    #[test]
    fn render_with_monochrome_theme() {
        let mut state = english_state();
        state.theme = crate::tui::app::Theme::monochrome();
        state.model.add("task").unwrap();
        let text = rendered_text(&state, 60, 20);
        assert!(text.contains("task"));
    }
}
