//! Comment Tracker (spec.md §4.1, §9 "Comment dedup").
//!
//! De-duplicates comment capture: a block comment matched once while
//! probing the tail of a failed chunk attempt and again at the start of
//! the next can otherwise be registered twice. Keyed on the byte offset
//! where the comment began.

use std::collections::HashSet;

pub(crate) struct CommentTracker {
    seen: HashSet<usize>,
}

impl CommentTracker {
    pub(crate) fn new() -> Self {
        Self { seen: HashSet::new() }
    }

    /// Returns `true` the first time `pos` is seen, `false` on every
    /// subsequent call for the same position.
    pub(crate) fn record(&mut self, pos: usize) -> bool {
        self.seen.insert(pos)
    }
}
