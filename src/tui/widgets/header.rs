//! Header widget for the quick-pick.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Header showing the project name on the left and runner info on the right.
pub struct Header<'a> {
    title: &'a str,
    info: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, info: &'a str, theme: &'a Theme) -> Self {
        Self { title, info, theme }
    }

    fn build_line(&self, width: u16) -> Line<'a> {
        let width = width as usize;
        let info = format!(" {} ", self.info);
        let info_len = info.chars().count();

        // One leading space plus at least one space before the info.
        let max_title = width.saturating_sub(info_len + 2);
        let title = truncate_with_ellipsis(self.title, max_title);
        let title_len = title.chars().count();

        let padding = width.saturating_sub(1 + title_len + info_len);

        Line::from(vec![
            Span::styled(" ", self.theme.header()),
            Span::styled(title, self.theme.header()),
            Span::styled(" ".repeat(padding), self.theme.header()),
            Span::styled(info, self.theme.header_info()),
        ])
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        Paragraph::new(line)
            .style(self.theme.header())
            .render(area, buf);
    }
}

/// Truncate a string with an ellipsis if it exceeds `max_len` characters.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{truncated}…")
    }
}
