#[cfg(test)]
mod tests {
    use crate::CommentTracker;

    #[test]
    fn first_record_at_a_position_returns_true() {
        let mut tracker = CommentTracker::new();
        assert!(tracker.record(4));
    }

    #[test]
    fn repeat_record_at_the_same_position_returns_false() {
        let mut tracker = CommentTracker::new();
        assert!(tracker.record(4));
        assert!(!tracker.record(4));
    }

    #[test]
    fn distinct_positions_are_tracked_independently() {
        let mut tracker = CommentTracker::new();
        assert!(tracker.record(4));
        assert!(tracker.record(9));
        assert!(!tracker.record(4));
        assert!(!tracker.record(9));
    }

    /// A block comment probed once while `map_literal` speculatively parses
    /// `1 /* c */ + 2)` as a `key:` candidate (fails on the missing `:`,
    /// resets) and again once `paren_list` falls back to parsing the same
    /// span as a plain expression must only be recorded once (spec.md
    /// §4.6, "Comment dedup") — `reset` rewinds the cursor but not the
    /// tracker, which is the mechanism under test here.
    #[test]
    fn backtracking_over_the_same_comment_does_not_duplicate_it() {
        let root = crate::Parser::new("$x: (1 /* c */ + 2);")
            .parse()
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        let comments =
            root.children.iter().filter(|s| matches!(s.kind, cascade_ast::StatementKind::Comment(_))).count();
        assert_eq!(comments, 1);
    }
}
