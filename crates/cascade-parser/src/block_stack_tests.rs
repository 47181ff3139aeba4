#[cfg(test)]
mod tests {
    use cascade_ast::{BlockKind, StatementKind};
    use cascade_position::SourceTag;

    use crate::BlockStack;

    fn tag(pos: usize) -> SourceTag {
        SourceTag::new(0, pos)
    }

    #[test]
    fn finish_root_on_an_empty_document_yields_no_children() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        let root = stack.finish_root();
        assert!(root.is_root);
        assert!(root.children.is_empty());
    }

    #[test]
    fn append_statement_flushes_pending_comments_first() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        stack.push_pending_comment(tag(0), "/* c */".to_string());
        stack.append_statement(StatementKind::Break, tag(10));
        let root = stack.finish_root();
        assert_eq!(root.children.len(), 2);
        assert!(matches!(root.children[0].kind, StatementKind::Comment(_)));
        assert!(matches!(root.children[1].kind, StatementKind::Break));
    }

    #[test]
    fn push_plain_then_pop_returns_the_rule_block() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        stack.push_plain(vec![Vec::new()], tag(0));
        assert!(stack.has_open_block());
        let popped = stack.pop().unwrap_or_else(|| panic!("expected a popped block"));
        assert!(!stack.has_open_block());
        assert!(!popped.is_root);
        assert_eq!(popped.selectors, Some(vec![Vec::new()]));
    }

    #[test]
    fn pop_at_root_returns_none() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn pending_comments_migrate_to_parent_on_pop_rather_than_into_the_popped_block() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        stack.push_plain(vec![Vec::new()], tag(0));
        stack.push_pending_comment(tag(5), "/* trailing */".to_string());
        let popped = stack.pop().unwrap_or_else(|| panic!("expected a popped block"));
        assert!(popped.children.is_empty());
        stack.append_statement(StatementKind::Block(popped), tag(0));
        let root = stack.finish_root();
        // The comment that was pending when the child block closed lands
        // ahead of the block statement in the parent, not inside the child.
        assert_eq!(root.children.len(), 2);
        assert!(matches!(root.children[0].kind, StatementKind::Comment(_)));
        assert!(matches!(root.children[1].kind, StatementKind::Block(_)));
    }

    #[test]
    fn link_else_clause_only_matches_a_trailing_if_block() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        stack.append_statement(StatementKind::Break, tag(0));
        let else_block = cascade_ast::Block::new_special(BlockKind::Else, tag(1));
        assert!(!stack.link_else_clause(else_block));
    }

    #[test]
    fn link_else_clause_appends_into_the_preceding_if_cases() {
        let mut stack = BlockStack::new();
        stack.push_root(0, 0);
        let if_block = cascade_ast::Block::new_special(
            BlockKind::If { cond: cascade_ast::Value::Null, cases: Vec::new() },
            tag(0),
        );
        stack.append_statement(StatementKind::Block(if_block), tag(0));
        let else_block = cascade_ast::Block::new_special(BlockKind::Else, tag(5));
        assert!(stack.link_else_clause(else_block));
        let root = stack.finish_root();
        match &root.children[0].kind {
            StatementKind::Block(b) => match &b.kind {
                Some(BlockKind::If { cases, .. }) => assert_eq!(cases.len(), 1),
                other => panic!("expected an If block, got {other:?}"),
            },
            other => panic!("expected a Block statement, got {other:?}"),
        }
    }
}
