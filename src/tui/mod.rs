//! TUI module for runx.
//!
//! The quick-pick: a filter prompt over a list of scripts grouped by
//! package.

mod app;
mod input;
mod layout;
mod theme;
mod ui;
mod widgets;

pub use app::{App, Outcome};
pub use theme::Theme;
pub use ui::run_tui;
