//! Script selection.
//!
//! Turns discovered packages into either a script to start right away or a
//! list for the quick-pick, and resolves `--package`/`--script` lookups.

mod item;
mod lookup;
mod plan;

pub use item::{PickItem, ScriptTarget};
pub use lookup::{filter_packages, find_script};
pub use plan::{plan_selection, SelectionOptions, SelectionPlan};
