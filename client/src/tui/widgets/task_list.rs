//! Task list widget.
//!
//! Each row shows the selection pointer, a checkbox, the task text and the
//! delete label on the right edge:
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │› ☐ buy milk                    [Delete]│
//! │  ☑ walk the dog                [Delete]│
//! └────────────────────────────────────────┘
//! ```
//!
//! With no tasks, the localized placeholder is centered in the box instead.
//! The list scrolls so the selected row is always visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::locale::Messages;
use crate::tui::app::{Symbols, Theme};
use crate::view::{ListView, TaskRow};

/// Scrolling list of task rows.
#[derive(Debug)]
pub struct TaskListWidget<'a> {
    view: &'a ListView,
    selected: usize,
    focused: bool,
    messages: &'a Messages,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> TaskListWidget<'a> {
    /// Creates the list widget.
    #[must_use]
    pub fn new(
        view: &'a ListView,
        selected: usize,
        focused: bool,
        messages: &'a Messages,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            view,
            selected,
            focused,
            messages,
            theme,
            symbols,
        }
    }

    /// Index of the first visible row for a list area of `height` rows.
    fn scroll_offset(&self, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        (self.selected + 1).saturating_sub(height)
    }

    fn delete_label(&self) -> String {
        format!("[{}]", self.messages.delete_label)
    }

    /// Builds the left part of a row: pointer, checkbox and text.
    fn row_line(&self, row: &'a TaskRow, is_selected: bool) -> Line<'a> {
        let pointer = if is_selected && self.focused {
            self.symbols.pointer
        } else {
            " "
        };
        let (checkbox, checkbox_style, text_style) = if row.completed {
            (
                self.symbols.checked,
                self.theme.checkbox_checked,
                self.theme.task_completed,
            )
        } else {
            (
                self.symbols.unchecked,
                self.theme.checkbox_unchecked,
                self.theme.task_pending,
            )
        };

        Line::from(vec![
            Span::styled(pointer, self.theme.text_secondary),
            Span::raw(" "),
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(row.text.as_str(), text_style),
        ])
    }
}

impl Widget for TaskListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focused {
                self.theme.border_focused
            } else {
                self.theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if let Some(placeholder) = self.view.placeholder {
            let y = inner.y + inner.height.saturating_sub(1) / 2;
            Paragraph::new(Line::from(Span::styled(placeholder, self.theme.text_muted)))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            return;
        }

        let label = self.delete_label();
        let label_width = u16::try_from(Span::raw(label.as_str()).width()).unwrap_or(u16::MAX);
        let show_label = inner.width > label_width.saturating_add(8);
        let text_width = if show_label {
            inner.width - label_width - 1
        } else {
            inner.width
        };

        let height = usize::from(inner.height);
        let offset = self.scroll_offset(height);

        for (i, row) in self.view.rows.iter().enumerate().skip(offset).take(height) {
            let y = inner.y + u16::try_from(i - offset).unwrap_or(0);
            let is_selected = i == self.selected;

            buf.set_line(inner.x, y, &self.row_line(row, is_selected), text_width);
            if show_label {
                buf.set_span(
                    inner.right() - label_width,
                    y,
                    &Span::styled(label.as_str(), self.theme.delete),
                    label_width,
                );
            }
            if is_selected && self.focused {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), self.theme.row_selected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::tui::app::{ASCII_SYMBOLS, UNICODE_SYMBOLS};
    use crate::tui::widgets::test_support::{buffer_lines, buffer_text};
    use ratatui::style::Modifier;
    use tasklist_model::TaskListModel;

    fn view_of(tasks: &[(&str, bool)]) -> ListView {
        let mut model = TaskListModel::new();
        for (text, done) in tasks {
            let task = model.add(text).unwrap();
            if *done {
                model.toggle(task.id).unwrap();
            }
        }
        ListView::project(&model, Locale::En.messages())
    }

    fn render(
        view: &ListView,
        selected: usize,
        focused: bool,
        symbols: &Symbols,
        area: Rect,
    ) -> Buffer {
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        TaskListWidget::new(
            view,
            selected,
            focused,
            Locale::En.messages(),
            &theme,
            symbols,
        )
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let view = view_of(&[]);
        let buf = render(&view, 0, false, &UNICODE_SYMBOLS, Rect::new(0, 0, 40, 5));
        assert!(buffer_text(&buf).contains("no tasks yet — add one"));
    }

    #[test]
    fn rows_show_checkbox_text_and_delete() {
        let view = view_of(&[("buy milk", false), ("walk", true)]);
        let buf = render(&view, 0, true, &UNICODE_SYMBOLS, Rect::new(0, 0, 40, 5));
        let lines = buffer_lines(&buf);

        assert!(lines[1].contains("› ☐ buy milk"));
        assert!(lines[1].trim_end().ends_with("[Delete]│"));
        assert!(lines[2].contains("  ☑ walk"));
        assert!(lines[2].contains("[Delete]"));
    }

    #[test]
    fn ascii_symbols_are_used() {
        let view = view_of(&[("a", true), ("b", false)]);
        let buf = render(&view, 0, false, &ASCII_SYMBOLS, Rect::new(0, 0, 40, 5));
        let text = buffer_text(&buf);
        assert!(text.contains("[x] a"));
        assert!(text.contains("[ ] b"));
    }

    #[test]
    fn completed_text_is_crossed_out() {
        let view = view_of(&[("done", true)]);
        let buf = render(&view, 0, false, &UNICODE_SYMBOLS, Rect::new(0, 0, 40, 3));
        // Border, pointer, space, checkbox, space.
        let cell = &buf.content[40 + 5];
        assert_eq!(cell.symbol(), "d");
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn pointer_hidden_when_unfocused() {
        let view = view_of(&[("a", false)]);
        let buf = render(&view, 0, false, &UNICODE_SYMBOLS, Rect::new(0, 0, 40, 3));
        assert!(!buffer_text(&buf).contains('›'));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let view = view_of(&[("t0", false), ("t1", false), ("t2", false), ("t3", false)]);
        // Two visible rows.
        let buf = render(&view, 3, true, &UNICODE_SYMBOLS, Rect::new(0, 0, 40, 4));
        let text = buffer_text(&buf);
        assert!(text.contains("t2"));
        assert!(text.contains("› ☐ t3"));
        assert!(!text.contains("t0"));
    }

    #[test]
    fn narrow_area_drops_delete_label() {
        let view = view_of(&[("a", false)]);
        let buf = render(&view, 0, false, &UNICODE_SYMBOLS, Rect::new(0, 0, 12, 3));
        assert!(!buffer_text(&buf).contains("[Delete]"));
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        let view = view_of(&[]);
        let theme = Theme::default();
        let mut widget = TaskListWidget::new(
            &view,
            0,
            true,
            Locale::En.messages(),
            &theme,
            &UNICODE_SYMBOLS,
        );
        assert_eq!(widget.scroll_offset(3), 0);
        widget.selected = 5;
        assert_eq!(widget.scroll_offset(3), 3);
        assert_eq!(widget.scroll_offset(0), 0);
    }

    #[test]
    fn handles_zero_area() {
        let view = view_of(&[("a", false)]);
        render(&view, 0, true, &UNICODE_SYMBOLS, Rect::new(0, 0, 0, 0));
    }
}
