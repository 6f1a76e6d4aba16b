//! Application state for the quick-pick.

use crate::filter::{filter_items, MatchFields};
use crate::select::{PickItem, ScriptTarget};

/// How the quick-pick ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked a script.
    Accepted(ScriptTarget),
    /// The user closed the picker.
    Cancelled,
}

/// Quick-pick state: the full item list, the filter query and a cursor over
/// the items the query leaves visible.
pub struct App {
    items: Vec<PickItem>,
    fields: MatchFields,
    /// Shown on the left of the header.
    title: String,
    /// Shown on the right of the header.
    info: String,

    query: String,
    /// Indices into `items`, in display order.
    visible: Vec<usize>,
    /// Position in `visible` of the highlighted script. Never a separator.
    selected: Option<usize>,
    scroll_offset: usize,

    outcome: Option<Outcome>,
}

impl App {
    /// Create a new quick-pick over `items`.
    pub fn new(
        items: Vec<PickItem>,
        fields: MatchFields,
        title: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        let mut app = Self {
            items,
            fields,
            title: title.into(),
            info: info.into(),
            query: String::new(),
            visible: Vec::new(),
            selected: None,
            scroll_offset: 0,
            outcome: None,
        };
        app.update_visible();
        app
    }

    // ==================== Getters ====================

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible items in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &PickItem> + '_ {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Position of the highlighted row among the visible items.
    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted script.
    pub fn selected_script(&self) -> Option<&ScriptTarget> {
        self.selected
            .and_then(|pos| self.items[self.visible[pos]].as_script())
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Number of scripts currently shown.
    pub fn matched_count(&self) -> usize {
        self.visible_items().filter(|i| !i.is_separator()).count()
    }

    /// Number of scripts overall.
    pub fn total_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_separator()).count()
    }

    /// Whether the picker has been accepted or cancelled.
    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// Consume the app, treating an unfinished picker as cancelled.
    pub fn into_outcome(self) -> Outcome {
        self.outcome.unwrap_or(Outcome::Cancelled)
    }

    // ==================== Query ====================

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.update_visible();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.update_visible();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.update_visible();
        }
    }

    /// Recompute visible items and put the cursor on the first script.
    fn update_visible(&mut self) {
        self.visible = filter_items(&self.query, &self.items, self.fields);
        self.selected = self.script_positions().first().copied();
        self.scroll_offset = 0;
    }

    /// Positions in `visible` that hold scripts.
    fn script_positions(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter(|&(_, &i)| !self.items[i].is_separator())
            .map(|(pos, _)| pos)
            .collect()
    }

    // ==================== Navigation ====================

    /// Move to the previous script, wrapping to the last.
    pub fn move_up(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let positions = self.script_positions();
        self.selected = positions
            .iter()
            .rev()
            .find(|&&pos| pos < current)
            .or_else(|| positions.last())
            .copied();
    }

    /// Move to the next script, wrapping to the first.
    pub fn move_down(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let positions = self.script_positions();
        self.selected = positions
            .iter()
            .find(|&&pos| pos > current)
            .or_else(|| positions.first())
            .copied();
    }

    pub fn move_to_first(&mut self) {
        self.selected = self.script_positions().first().copied();
    }

    pub fn move_to_last(&mut self) {
        self.selected = self.script_positions().last().copied();
    }

    /// Move up by roughly a page of rows, without wrapping.
    pub fn page_up(&mut self, rows: usize) {
        let Some(current) = self.selected else {
            return;
        };
        let target = current.saturating_sub(rows.max(1));
        let positions = self.script_positions();
        self.selected = positions
            .iter()
            .copied()
            .find(|&pos| pos >= target)
            .or(Some(current));
    }

    /// Move down by roughly a page of rows, without wrapping.
    pub fn page_down(&mut self, rows: usize) {
        let Some(current) = self.selected else {
            return;
        };
        let target = current + rows.max(1);
        let positions = self.script_positions();
        self.selected = positions
            .iter()
            .copied()
            .rev()
            .find(|&pos| pos <= target)
            .or(Some(current));
    }

    /// Adjust the scroll offset so the cursor fits in `height` rows.
    ///
    /// A script directly under a separator pulls the separator into view.
    pub fn ensure_visible(&mut self, height: usize) {
        let Some(pos) = self.selected else {
            self.scroll_offset = 0;
            return;
        };
        if height == 0 {
            return;
        }

        let top = match pos.checked_sub(1) {
            Some(prev) if self.items[self.visible[prev]].is_separator() => prev,
            _ => pos,
        };

        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if pos >= self.scroll_offset + height {
            self.scroll_offset = pos + 1 - height;
        }
    }

    // ==================== Actions ====================

    /// Accept the highlighted script. Does nothing when nothing matches.
    pub fn accept(&mut self) {
        if let Some(target) = self.selected_script().cloned() {
            self.outcome = Some(Outcome::Accepted(target));
        }
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }
}
