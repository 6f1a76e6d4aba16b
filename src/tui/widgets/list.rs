//! Pick list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::filter::get_match_indices;
use crate::select::PickItem;
use crate::tui::theme::Theme;
use crate::tui::widgets::header::truncate_with_ellipsis;

/// Width reserved for the cursor marker.
const MARKER_WIDTH: usize = 3;

/// Pick items, one per row, with package separators between groups.
pub struct PickList<'a> {
    items: &'a [&'a PickItem],
    selected: Option<usize>,
    scroll_offset: usize,
    query: &'a str,
    theme: &'a Theme,
}

impl<'a> PickList<'a> {
    pub fn new(items: &'a [&'a PickItem], selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            scroll_offset: 0,
            query: "",
            theme,
        }
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Highlight characters of labels matching this query.
    pub fn query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    fn separator_line(&self, label: &str, width: usize) -> Line<'a> {
        let label = truncate_with_ellipsis(label, width.saturating_sub(4));
        let rule = width.saturating_sub(label.chars().count() + 3);
        Line::from(vec![
            Span::styled("─ ", self.theme.separator()),
            Span::styled(label, self.theme.separator()),
            Span::styled(format!(" {}", "─".repeat(rule)), self.theme.separator()),
        ])
    }

    fn script_line(&self, label: &str, description: &str, selected: bool, width: usize) -> Line<'a> {
        let base = if selected {
            self.theme.selected()
        } else {
            self.theme.script()
        };

        let marker = if selected { " > " } else { "   " };
        let mut spans = vec![Span::styled(marker, base)];

        let label_width = width.saturating_sub(MARKER_WIDTH);
        let label = truncate_with_ellipsis(label, label_width);
        spans.extend(self.highlighted(&label, base));

        // The command follows the label when there is room for it.
        let used = MARKER_WIDTH + label.chars().count();
        let room = width.saturating_sub(used + 2);
        if room > 3 {
            spans.push(Span::styled("  ", base));
            spans.push(Span::styled(
                truncate_with_ellipsis(description, room),
                self.theme.description(),
            ));
        }

        Line::from(spans)
    }

    /// Split `label` into spans with matched characters highlighted.
    fn highlighted(&self, label: &str, base: Style) -> Vec<Span<'a>> {
        let matched = get_match_indices(self.query, label);
        if matched.is_empty() {
            return vec![Span::styled(label.to_string(), base)];
        }

        label
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let style = if matched.contains(&i) {
                    base.patch(self.theme.highlight())
                } else {
                    base
                };
                Span::styled(c.to_string(), style)
            })
            .collect()
    }
}

impl Widget for PickList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let rows = self
            .items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(area.height as usize);

        for (row, (pos, item)) in rows.enumerate() {
            let line = match item {
                PickItem::Separator { label } => self.separator_line(label, width),
                PickItem::Script(target) => self.script_line(
                    &target.script,
                    &target.command,
                    self.selected == Some(pos),
                    width,
                ),
            };
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

/// Shown in place of the list when nothing matches.
pub struct EmptyList<'a> {
    theme: &'a Theme,
}

impl<'a> EmptyList<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for EmptyList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "   No scripts match the filter",
                self.theme.warning(),
            )),
            Line::from(Span::styled(
                "   Press Backspace or Ctrl+U to edit it",
                self.theme.placeholder(),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
