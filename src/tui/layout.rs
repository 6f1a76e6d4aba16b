//! Layout calculations for the quick-pick.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal dimensions for the full layout.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// Height of the details panel in the full layout.
const DETAILS_HEIGHT: u16 = 3;

/// Main layout areas.
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    /// Project name and runner.
    pub header: Rect,
    /// Filter input.
    pub prompt: Rect,
    /// Pick items.
    pub list: Rect,
    /// Command and directory of the highlighted script.
    pub details: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

impl MainLayout {
    /// Calculate the layout for the given area.
    pub fn new(area: Rect) -> Self {
        let details_height = if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            1
        } else {
            DETAILS_HEIGHT
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(details_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            prompt: chunks[1],
            list: chunks[2],
            details: chunks[3],
            footer: chunks[4],
        }
    }

    /// Rows available for pick items.
    pub fn list_rows(&self) -> usize {
        self.list.height as usize
    }
}
