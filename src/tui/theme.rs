//! Color theme for the quick-pick.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme as ThemeConfig;

/// Resolved colors for every part of the quick-pick.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header_bg: Color,
    pub header_fg: Color,

    pub prompt_fg: Color,
    pub placeholder_fg: Color,

    pub script_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub highlight_fg: Color,
    pub separator_fg: Color,

    pub description_fg: Color,
    pub detail_fg: Color,

    pub footer_fg: Color,
    pub key_fg: Color,

    pub warning_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_bg: Color::Blue,
            header_fg: Color::White,

            prompt_fg: Color::Yellow,
            placeholder_fg: Color::DarkGray,

            script_fg: Color::White,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            highlight_fg: Color::Yellow,
            separator_fg: Color::Cyan,

            description_fg: Color::Gray,
            detail_fg: Color::DarkGray,

            footer_fg: Color::DarkGray,
            key_fg: Color::Cyan,

            warning_fg: Color::Yellow,
        }
    }
}

impl Theme {
    /// Create a theme from configuration.
    pub fn new(config: &ThemeConfig) -> Self {
        match config {
            ThemeConfig::Default => Self::default(),
            ThemeConfig::Minimal => Self::minimal(),
            ThemeConfig::None => Self::no_color(),
        }
    }

    /// Minimal theme with fewer colors.
    pub fn minimal() -> Self {
        Self {
            header_bg: Color::Reset,
            header_fg: Color::White,

            prompt_fg: Color::White,
            placeholder_fg: Color::DarkGray,

            script_fg: Color::Reset,
            selected_bg: Color::Reset,
            selected_fg: Color::White,
            highlight_fg: Color::White,
            separator_fg: Color::DarkGray,

            description_fg: Color::DarkGray,
            detail_fg: Color::DarkGray,

            footer_fg: Color::DarkGray,
            key_fg: Color::White,

            warning_fg: Color::White,
        }
    }

    /// No colors, for monochrome terminals.
    pub fn no_color() -> Self {
        Self {
            header_bg: Color::Reset,
            header_fg: Color::Reset,
            prompt_fg: Color::Reset,
            placeholder_fg: Color::Reset,
            script_fg: Color::Reset,
            selected_bg: Color::Reset,
            selected_fg: Color::Reset,
            highlight_fg: Color::Reset,
            separator_fg: Color::Reset,
            description_fg: Color::Reset,
            detail_fg: Color::Reset,
            footer_fg: Color::Reset,
            key_fg: Color::Reset,
            warning_fg: Color::Reset,
        }
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Right-aligned header info (runner, workspace source).
    pub fn header_info(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    pub fn prompt(&self) -> Style {
        Style::default()
            .fg(self.prompt_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.placeholder_fg)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn script(&self) -> Style {
        Style::default().fg(self.script_fg)
    }

    /// The highlighted row.
    pub fn selected(&self) -> Style {
        if self.selected_bg == Color::Reset {
            Style::default()
                .fg(self.selected_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Characters of the label matched by the filter.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Package group header.
    pub fn separator(&self) -> Style {
        Style::default()
            .fg(self.separator_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn description(&self) -> Style {
        Style::default().fg(self.description_fg)
    }

    pub fn detail(&self) -> Style {
        Style::default()
            .fg(self.detail_fg)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.footer_fg)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.key_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning_fg)
    }
}
