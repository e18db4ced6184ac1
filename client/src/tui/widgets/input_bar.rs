//! Input field and add button.
//!
//! ```text
//! ┌──────────────────────────────────┐┌───────┐
//! │ Enter a new task...              ││[ Add ]│
//! └──────────────────────────────────┘└───────┘
//! ```
//!
//! When the typed text is wider than the field, the field scrolls so the end
//! of the text and the cursor stay visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::locale::Messages;
use crate::tui::app::{Focus, Symbols, Theme};

/// Height of the input bar in rows.
pub const INPUT_BAR_HEIGHT: u16 = 3;

/// Text field with its add button.
#[derive(Debug)]
pub struct InputBarWidget<'a> {
    input: &'a str,
    focus: Focus,
    messages: &'a Messages,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> InputBarWidget<'a> {
    /// Creates the input bar.
    #[must_use]
    pub fn new(
        input: &'a str,
        focus: Focus,
        messages: &'a Messages,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            input,
            focus,
            messages,
            theme,
            symbols,
        }
    }

    fn button_label(&self) -> String {
        format!("[ {} ]", self.messages.add_label)
    }

    /// Builds the contents of the text field.
    fn field_line(&self) -> Line<'a> {
        let focused = self.focus == Focus::Input;
        let mut spans = Vec::with_capacity(2);

        if self.input.is_empty() {
            if focused {
                spans.push(Span::styled(self.symbols.cursor, self.theme.input_focused));
            }
            spans.push(Span::styled(
                self.messages.input_placeholder,
                self.theme.text_muted,
            ));
        } else {
            let style = if focused {
                self.theme.input_focused
            } else {
                self.theme.input_unfocused
            };
            spans.push(Span::styled(self.input, style));
            if focused {
                spans.push(Span::styled(self.symbols.cursor, style));
            }
        }

        Line::from(spans)
    }
}

impl Widget for InputBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = self.button_label();
        let button_width = u16::try_from(Span::raw(label.as_str()).width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(button_width)])
            .split(area);

        // Text field
        let field_block = Block::default().borders(Borders::ALL).border_style(
            if self.focus == Focus::Input {
                self.theme.border_focused
            } else {
                self.theme.border
            },
        );
        let inner = field_block.inner(chunks[0]);
        field_block.render(chunks[0], buf);

        if inner.width > 0 && inner.height > 0 {
            let line = self.field_line();
            let overflow = line.width().saturating_sub(usize::from(inner.width));
            let offset = u16::try_from(overflow).unwrap_or(u16::MAX);
            Paragraph::new(line)
                .scroll((0, offset))
                .render(inner, buf);
        }

        // Add button
        let button_focused = self.focus == Focus::AddButton;
        let button_block = Block::default().borders(Borders::ALL).border_style(
            if button_focused {
                self.theme.border_focused
            } else {
                self.theme.border
            },
        );
        let button_style = if button_focused {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        Paragraph::new(Line::from(Span::styled(label, button_style)))
            .alignment(Alignment::Center)
            .block(button_block)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::tui::app::{ASCII_SYMBOLS, UNICODE_SYMBOLS};
    use crate::tui::widgets::test_support::buffer_lines;

    fn render(input: &str, focus: Focus, width: u16) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, INPUT_BAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        InputBarWidget::new(
            input,
            focus,
            Locale::En.messages(),
            &theme,
            &UNICODE_SYMBOLS,
        )
        .render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn shows_placeholder_and_button_when_empty() {
        let lines = render("", Focus::AddButton, 50);
        assert!(lines[1].contains("Enter a new task..."));
        assert!(lines[1].contains("[ Add ]"));
    }

    #[test]
    fn shows_cursor_when_focused() {
        let lines = render("milk", Focus::Input, 50);
        assert!(lines[1].contains("milk█"));

        let lines = render("milk", Focus::List, 50);
        assert!(lines[1].contains("milk"));
        assert!(!lines[1].contains('█'));
    }

    #[test]
    fn long_input_scrolls_to_end() {
        let text = "abcdefghijklmnopqrstuvwxyz0123456789";
        let lines = render(text, Focus::Input, 30);
        assert!(lines[1].contains("6789█"));
        assert!(!lines[1].contains("abc"));
    }

    #[test]
    fn field_line_uses_symbol_set() {
        let theme = Theme::default();
        let widget = InputBarWidget::new(
            "",
            Focus::Input,
            Locale::En.messages(),
            &theme,
            &ASCII_SYMBOLS,
        );
        let line = widget.field_line();
        assert_eq!(line.spans[0].content, "_");
        assert_eq!(line.spans[1].content, "Enter a new task...");
    }

    #[test]
    fn button_label_is_localized() {
        let theme = Theme::default();
        let widget = InputBarWidget::new(
            "",
            Focus::Input,
            Locale::Ja.messages(),
            &theme,
            &UNICODE_SYMBOLS,
        );
        assert_eq!(widget.button_label(), "[ 追加 ]");
    }

    #[test]
    fn handles_tiny_area() {
        render("text", Focus::Input, 3);
    }
}
