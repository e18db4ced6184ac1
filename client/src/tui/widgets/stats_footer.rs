//! Statistics footer widget.
//!
//! Shows the counts line while the list has tasks, and the key hints for the
//! focused control:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Total: 3 | Completed: 1                      │
//! │ ↑/↓ select • Space toggle • d delete • Tab … │
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::locale::Messages;
use crate::tui::app::{Focus, Symbols, Theme};
use crate::view::ListView;

/// Height of the stats footer in rows: border, counts, hints, border.
pub const STATS_FOOTER_HEIGHT: u16 = 4;

/// Separator between the two counts.
const SEPARATOR: &str = " | ";

/// Counts and key hints.
#[derive(Debug)]
pub struct StatsFooterWidget<'a> {
    view: &'a ListView,
    focus: Focus,
    messages: &'a Messages,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> StatsFooterWidget<'a> {
    /// Creates the footer.
    #[must_use]
    pub fn new(
        view: &'a ListView,
        focus: Focus,
        messages: &'a Messages,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            view,
            focus,
            messages,
            theme,
            symbols,
        }
    }

    /// Builds the counts line, or `None` when the list is empty.
    ///
    /// The text matches [`ListView::counts_line`]; only styling is added.
    fn counts_line(&self) -> Option<Line<'a>> {
        self.view.counts_line.as_ref()?;

        let counts = self.view.counts;
        Some(Line::from(vec![
            Span::styled(
                format!("{}: ", self.messages.total_label),
                self.theme.text_secondary,
            ),
            Span::styled(counts.total.to_string(), self.theme.stat_total),
            Span::styled(SEPARATOR, self.theme.text_muted),
            Span::styled(
                format!("{}: ", self.messages.completed_label),
                self.theme.text_secondary,
            ),
            Span::styled(counts.completed.to_string(), self.theme.stat_completed),
        ]))
    }

    /// Key hints for the focused control, e.g. `Space toggle`.
    fn hints(&self) -> Vec<String> {
        let m = self.messages;
        let mut hints = match self.focus {
            Focus::Input => vec![format!("Enter {}", m.hint_add)],
            Focus::AddButton => vec![format!("Enter/Space {}", m.hint_add)],
            Focus::List => vec![
                format!("{} {}", self.symbols.up_down, m.hint_select),
                format!("Space {}", m.hint_toggle),
                format!("d {}", m.hint_delete),
            ],
        };
        hints.push(format!("Tab {}", m.hint_next));
        hints.push(format!("Esc {}", m.hint_quit));
        hints
    }

    fn hints_line(&self) -> Line<'a> {
        let separator = format!(" {} ", self.symbols.bullet);
        let mut spans = Vec::new();
        for (i, hint) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(separator.clone(), self.theme.text_muted));
            }
            spans.push(Span::styled(hint, self.theme.text_muted));
        }
        Line::from(spans)
    }
}

impl Widget for StatsFooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let lines = vec![
            self.counts_line().unwrap_or_default(),
            self.hints_line(),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
