//! Custom widgets for the quick-pick.

mod details;
mod footer;
mod header;
mod list;
mod prompt;

pub use details::Details;
pub use footer::Footer;
pub use header::Header;
pub use list::{EmptyList, PickList};
pub use prompt::Prompt;
