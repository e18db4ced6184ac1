//! Modal notice popup.
//!
//! Drawn on top of the rest of the screen when a submission is rejected. The
//! area under the popup is cleared first so the list does not show through.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::locale::Messages;
use crate::tui::app::Theme;

/// Keys that dismiss the notice, as listed in its hint line.
const DISMISS_KEYS: &str = "Enter/Esc/Space";

/// Centered popup with a message and a dismiss hint.
#[derive(Debug)]
pub struct NoticeWidget<'a> {
    message: &'a str,
    messages: &'a Messages,
    theme: &'a Theme,
}

impl<'a> NoticeWidget<'a> {
    /// Creates a notice for the given message.
    #[must_use]
    pub fn new(message: &'a str, messages: &'a Messages, theme: &'a Theme) -> Self {
        Self {
            message,
            messages,
            theme,
        }
    }

    fn dismiss_hint(&self) -> String {
        format!("{DISMISS_KEYS} {}", self.messages.hint_dismiss)
    }

    /// Computes the popup rectangle centered in `area`.
    fn popup_area(&self, area: Rect) -> Rect {
        let content_width = Span::raw(self.message)
            .width()
            .max(Span::raw(self.dismiss_hint()).width());
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(6)
            .min(area.width);
        let height = 4.min(area.height);

        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for NoticeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.notice);

        Paragraph::new(vec![
            Line::from(Span::styled(self.message, self.theme.notice)),
            Line::from(Span::styled(self.dismiss_hint(), self.theme.text_muted)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(popup, buf);
    }
}
