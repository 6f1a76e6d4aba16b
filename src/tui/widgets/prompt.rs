//! Filter prompt widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// The filter input line with a match counter.
pub struct Prompt<'a> {
    query: &'a str,
    matched: usize,
    total: usize,
    theme: &'a Theme,
    cursor_visible: bool,
}

impl<'a> Prompt<'a> {
    pub fn new(query: &'a str, matched: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            matched,
            total,
            theme,
            cursor_visible: true,
        }
    }

    /// Set the blink state for the cursor.
    pub fn blink(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    fn build_line(&self, width: u16) -> Line<'a> {
        let counter = format!("{}/{} ", self.matched, self.total);
        let mut spans = vec![Span::styled(" > ", self.theme.prompt())];

        let input_len = if self.query.is_empty() {
            let placeholder = "Type to filter scripts";
            spans.push(Span::styled(placeholder, self.theme.placeholder()));
            placeholder.chars().count()
        } else {
            spans.push(Span::styled(self.query.to_string(), self.theme.script()));
            let cursor = if self.cursor_visible { "_" } else { " " };
            spans.push(Span::styled(cursor, self.theme.prompt()));
            self.query.chars().count() + 1
        };

        let used = 3 + input_len + counter.len();
        let padding = (width as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(counter, self.theme.footer()));

        Line::from(spans)
    }
}

impl Widget for Prompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(self.build_line(area.width)).render(area, buf);
    }
}
