//! Footer widget with keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("Enter", "run"),
    ("Ctrl+U", "clear"),
    ("Esc", "cancel"),
];

/// Footer widget showing keybinding hints.
pub struct Footer<'a> {
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Build the footer line, dropping action names when space is short.
    fn build_line(&self, width: u16) -> Line<'a> {
        let full_width: usize = HINTS
            .iter()
            .map(|(key, action)| key.chars().count() + action.len() + 3)
            .sum();
        let show_actions = (width as usize) >= full_width + 1;

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", self.theme.footer()));
            }
            spans.push(Span::styled(*key, self.theme.key()));
            if show_actions {
                spans.push(Span::styled(format!(" {action} "), self.theme.footer()));
            }
        }

        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(self.build_line(area.width)).render(area, buf);
    }
}
