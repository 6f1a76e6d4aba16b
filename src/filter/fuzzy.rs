//! Fuzzy matching implementation.
//!
//! Uses SkimMatcherV2 for fuzzy matching with scoring.

use std::sync::OnceLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::config::PickerConfig;
use crate::select::PickItem;

/// Global matcher instance, initialized once and reused across calls.
static GLOBAL_MATCHER: OnceLock<SkimMatcherV2> = OnceLock::new();

fn global_matcher() -> &'static SkimMatcherV2 {
    GLOBAL_MATCHER.get_or_init(SkimMatcherV2::default)
}

/// Which item fields a query is matched against. The label always is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFields {
    /// The script's shell command.
    pub description: bool,
    /// The package directory.
    pub detail: bool,
}

impl Default for MatchFields {
    fn default() -> Self {
        Self {
            description: true,
            detail: true,
        }
    }
}

impl From<&PickerConfig> for MatchFields {
    fn from(picker: &PickerConfig) -> Self {
        Self {
            description: picker.match_on_description,
            detail: picker.match_on_detail,
        }
    }
}

/// Score a single script item against a query.
///
/// Label matches score highest; description matches are halved and detail
/// matches quartered so a hit on the script name ranks first. Separators
/// never match.
pub fn item_score(query: &str, item: &PickItem, fields: MatchFields) -> Option<i64> {
    let PickItem::Script(target) = item else {
        return None;
    };

    if query.is_empty() {
        return Some(0);
    }

    let query = query.to_lowercase();
    let score = |text: &str| global_matcher().fuzzy_match(&text.to_lowercase(), &query);

    let label = score(&target.script);
    let description = fields
        .description
        .then(|| score(&target.command).map(|s| s / 2))
        .flatten();
    let detail = fields
        .detail
        .then(|| score(&target.detail()).map(|s| s / 4))
        .flatten();

    [label, description, detail].into_iter().flatten().max()
}

/// Filter pick items by a query.
///
/// Returns the indices of visible items in their original order. A
/// separator is visible only if at least one script under it matches.
///
/// # Examples
///
/// ```
/// use runx::filter::{filter_items, MatchFields};
/// use runx::package::{MonorepoPackage, Scripts};
/// use runx::select::{PickItem, ScriptTarget};
///
/// let web = MonorepoPackage::new("web", "/repo/web", Scripts::from_pairs([("dev", "vite"), ("lint", "eslint .")]));
/// let items = vec![
///     PickItem::separator("web"),
///     PickItem::Script(ScriptTarget::new(&web, web.scripts.get("dev").unwrap())),
///     PickItem::Script(ScriptTarget::new(&web, web.scripts.get("lint").unwrap())),
/// ];
///
/// assert_eq!(filter_items("dev", &items, MatchFields::default()), vec![0, 1]);
/// ```
pub fn filter_items(query: &str, items: &[PickItem], fields: MatchFields) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let mut visible = Vec::with_capacity(items.len().min(32));
    let mut pending_separator = None;

    for (idx, item) in items.iter().enumerate() {
        if item.is_separator() {
            pending_separator = Some(idx);
            continue;
        }

        if item_score(query, item, fields).is_some() {
            if let Some(sep) = pending_separator.take() {
                visible.push(sep);
            }
            visible.push(idx);
        }
    }

    visible
}

/// Get the indices of matched characters in the text, for highlighting.
///
/// # Examples
///
/// ```
/// use runx::filter::get_match_indices;
///
/// let indices = get_match_indices("bd", "build");
/// assert_eq!(indices, vec![0, 4]);
/// ```
pub fn get_match_indices(query: &str, text: &str) -> Vec<usize> {
    if query.is_empty() || text.is_empty() {
        return Vec::new();
    }

    global_matcher()
        .fuzzy_indices(&text.to_lowercase(), &query.to_lowercase())
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}
