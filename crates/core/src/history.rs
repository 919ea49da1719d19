//! Linear undo/redo history of template content snapshots.
//!
//! Every content-changing editor action records a full snapshot. The history
//! is an ordered list plus a cursor; recording after an undo drops the redo
//! branch, so there is never more than one future.

use serde::Serialize;

/// A navigable sequence of content snapshots.
///
/// Invariants: `entries` is never empty and `cursor < entries.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentHistory {
    entries: Vec<String>,
    cursor: usize,
    is_dirty: bool,
}

impl ContentHistory {
    /// Seed a history with a single clean snapshot.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            entries: vec![content.into()],
            cursor: 0,
            is_dirty: false,
        }
    }

    /// Record a new snapshot after the cursor.
    ///
    /// Any snapshots past the cursor (the redo branch) are discarded first.
    /// Identical content is still recorded as its own entry.
    pub fn record(&mut self, content: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(content.into());
        self.cursor = self.entries.len() - 1;
        self.is_dirty = true;
    }

    /// Step back one snapshot. Returns `false` (and changes nothing) at the
    /// first entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.is_dirty = true;
        true
    }

    /// Step forward one snapshot. Returns `false` (and changes nothing) at
    /// the last entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.is_dirty = true;
        true
    }

    pub fn current_content(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of snapshots held, always at least one.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Clear the dirty flag after the caller has persisted the content.
    ///
    /// Navigation state is left untouched.
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(contents: &[&str]) -> ContentHistory {
        let mut history = ContentHistory::new(contents[0]);
        for content in &contents[1..] {
            history.record(*content);
        }
        history
    }

    // -- new --

    #[test]
    fn new_history_has_single_clean_entry() {
        let history = ContentHistory::new("<p>Certificate</p>");
        assert_eq!(history.entries(), ["<p>Certificate</p>"]);
        assert_eq!(history.cursor(), 0);
        assert!(!history.is_dirty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_content_is_a_valid_seed() {
        let history = ContentHistory::new("");
        assert_eq!(history.current_content(), "");
        assert_eq!(history.entry_count(), 1);
    }

    // -- record --

    #[test]
    fn record_appends_and_advances_cursor() {
        let history = history_of(&["a", "b", "c"]);
        assert_eq!(history.entries(), ["a", "b", "c"]);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current_content(), "c");
    }

    #[test]
    fn record_sets_dirty() {
        let mut history = ContentHistory::new("a");
        history.record("b");
        assert!(history.is_dirty());
    }

    #[test]
    fn record_identical_content_still_creates_entry() {
        let mut history = ContentHistory::new("same");
        history.record("same");
        assert_eq!(history.entry_count(), 2);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn record_after_undo_discards_redo_branch() {
        let mut history = history_of(&["A", "B", "C"]);
        assert!(history.undo());
        assert_eq!(history.current_content(), "B");

        history.record("D");
        assert_eq!(history.entries(), ["A", "B", "D"]);
        assert_eq!(history.cursor(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn record_after_undo_to_start_keeps_only_seed() {
        let mut history = history_of(&["A", "B", "C"]);
        history.undo();
        history.undo();
        history.record("X");
        assert_eq!(history.entries(), ["A", "X"]);
    }

    // -- undo / redo --

    #[test]
    fn undo_then_redo_restores_content() {
        let mut history = history_of(&["v0", "v1", "v2"]);
        let before = history.current_content().to_string();
        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history.current_content(), before);
    }

    #[test]
    fn undo_at_start_is_noop() {
        let mut history = ContentHistory::new("v0");
        let before = history.clone();
        assert!(!history.undo());
        assert_eq!(history, before);
    }

    #[test]
    fn redo_at_end_is_noop() {
        let mut history = history_of(&["v0", "v1"]);
        let before = history.clone();
        assert!(!history.redo());
        assert_eq!(history, before);
    }

    #[test]
    fn undo_marks_dirty_even_when_back_at_seed() {
        let mut history = history_of(&["v0", "v1"]);
        history.mark_saved();
        history.undo();
        assert_eq!(history.current_content(), "v0");
        assert!(history.is_dirty());
    }

    #[test]
    fn walk_through_scenario() {
        let mut history = ContentHistory::new("v0");
        history.record("v1");
        history.record("v2");

        history.undo();
        assert_eq!(history.current_content(), "v1");
        history.undo();
        assert_eq!(history.current_content(), "v0");
        history.undo();
        assert_eq!(history.current_content(), "v0");
        history.redo();
        assert_eq!(history.current_content(), "v1");
    }

    // -- mark_saved --

    #[test]
    fn mark_saved_clears_dirty_only() {
        let mut history = history_of(&["a", "b"]);
        history.mark_saved();
        assert!(!history.is_dirty());
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.entry_count(), 2);
    }

    #[test]
    fn serializes_state_for_the_editor_surface() {
        let history = history_of(&["a", "b"]);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["entries"], serde_json::json!(["a", "b"]));
        assert_eq!(json["cursor"], 1);
        assert_eq!(json["is_dirty"], true);
    }
}
