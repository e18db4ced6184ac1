//! Title bar widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::Theme;

/// Height of the header in rows (border, title, border).
pub const HEADER_HEIGHT: u16 = 3;

/// Bordered bar showing the localized application title.
#[derive(Debug)]
pub struct HeaderWidget<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> HeaderWidget<'a> {
    /// Creates a header for the given title.
    #[must_use]
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        Paragraph::new(Line::from(Span::styled(self.title, self.theme.title)))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
