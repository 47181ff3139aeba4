#[cfg(test)]
mod tests {
    use cascade_ast::{BlockKind, StatementKind};

    fn parse(src: &str) -> cascade_ast::Block {
        crate::Parser::new(src).parse().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    #[test]
    fn property_shortcut_requires_literal_colon_space() {
        let root = parse("color: red;");
        assert!(matches!(root.children[0].kind, StatementKind::Assign { .. }));
    }

    #[test]
    fn pseudo_class_colon_is_not_a_property_shortcut() {
        // `a:hover { ... }` must be read as a selector, not `a` followed by
        // a `:hover` value — the literal-space requirement is what tells
        // them apart.
        let root = parse("a:hover { color: blue; }");
        assert_eq!(root.children.len(), 1);
        assert!(matches!(root.children[0].kind, StatementKind::Block(_)));
    }

    #[test]
    fn variable_assignment_with_default_flag() {
        use cascade_ast::AssignFlag;
        let root = parse("$x: 1 !default;");
        match &root.children[0].kind {
            StatementKind::Assign { flag: Some(AssignFlag::Default), .. } => {}
            other => panic!("expected Assign with !default, got {other:?}"),
        }
    }

    #[test]
    fn nested_property_combined_form_assigns_and_opens_block() {
        let root = parse("font: 12px { weight: bold; }");
        assert_eq!(root.children.len(), 2);
        assert!(matches!(root.children[0].kind, StatementKind::Assign { .. }));
        match &root.children[1].kind {
            StatementKind::Block(b) => assert!(matches!(b.kind, Some(BlockKind::NestedProperty { .. }))),
            other => panic!("expected a NestedProperty block, got {other:?}"),
        }
    }

    #[test]
    fn stray_close_brace_is_an_error() {
        assert!(crate::Parser::new("}").parse().is_err());
    }

    #[test]
    fn unclosed_block_is_an_error() {
        assert!(crate::Parser::new(".a {").parse().is_err());
    }

    #[test]
    fn comment_before_statement_is_attached_as_a_sibling() {
        let root = parse("// leading\ncolor: red;");
        assert_eq!(root.children.len(), 2);
        assert!(matches!(root.children[0].kind, StatementKind::Comment(_)));
    }
}
