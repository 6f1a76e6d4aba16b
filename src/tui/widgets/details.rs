//! Details panel for the highlighted script.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::select::ScriptTarget;
use crate::tui::theme::Theme;
use crate::tui::widgets::header::truncate_with_ellipsis;

/// Shows the full command and package of the highlighted script.
pub struct Details<'a> {
    target: Option<&'a ScriptTarget>,
    theme: &'a Theme,
}

impl<'a> Details<'a> {
    pub fn new(target: Option<&'a ScriptTarget>, theme: &'a Theme) -> Self {
        Self { target, theme }
    }

    fn build_lines(&self, width: u16, height: u16) -> Vec<Line<'a>> {
        let Some(target) = self.target else {
            return vec![Line::from(Span::styled(
                " No script selected",
                self.theme.placeholder(),
            ))];
        };

        let room = (width as usize).saturating_sub(3);
        let command = Line::from(vec![
            Span::styled(" $ ", self.theme.key()),
            Span::styled(
                truncate_with_ellipsis(&target.command, room),
                self.theme.description(),
            ),
        ]);

        if height < 2 {
            return vec![command];
        }

        let location = format!("{} · {}", target.package_name, target.detail());
        vec![
            command,
            Line::from(Span::styled(
                format!("   {}", truncate_with_ellipsis(&location, room)),
                self.theme.detail(),
            )),
        ]
    }
}

impl Widget for Details<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = self.build_lines(area.width, area.height);
        Paragraph::new(lines).render(area, buf);
    }
}
