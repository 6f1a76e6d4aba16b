//! Filter module for runx.
//!
//! Fuzzy filtering of quick-pick items by label, description and detail.

mod fuzzy;

pub use fuzzy::{filter_items, get_match_indices, item_score, MatchFields};
