#[cfg(test)]
mod tests {
    use cascade_ast::{BinaryOp, UnaryOp, Value};

    fn parse_value(src: &str) -> Value {
        crate::Parser::new(src).parse_value().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    #[test]
    fn arithmetic_respects_precedence() {
        let v = parse_value("1 + 2 * 3");
        match v {
            Value::Expression { op: BinaryOp::Add, rhs, .. } => match *rhs {
                Value::Expression { op: BinaryOp::Mul, .. } => {}
                other => panic!("expected nested multiply, got {other:?}"),
            },
            other => panic!("expected top-level add, got {other:?}"),
        }
    }

    #[test]
    fn parens_raise_precedence() {
        let v = parse_value("(1 + 2) * 3");
        match v {
            Value::Expression { op: BinaryOp::Mul, lhs, .. } => match *lhs {
                Value::Expression { op: BinaryOp::Add, in_parens: true, .. } => {}
                other => panic!("expected parenthesized add, got {other:?}"),
            },
            other => panic!("expected top-level multiply, got {other:?}"),
        }
    }

    #[test]
    fn and_binds_looser_than_comparison() {
        let v = parse_value("$a < 1 and $b > 2");
        match v {
            Value::Expression { op: BinaryOp::And, .. } => {}
            other => panic!("expected top-level `and`, got {other:?}"),
        }
    }

    #[test]
    fn unary_minus_requires_no_following_whitespace() {
        let v = parse_value("- 1");
        // `- 1` is not a unary negation (space after `-`); it parses as a
        // bareword/keyword-ish fallback rather than `Unary`.
        assert!(!matches!(v, Value::Unary { op: UnaryOp::Minus, .. }));
    }

    #[test]
    fn unary_minus_binds_to_adjacent_number() {
        let v = parse_value("-1px");
        assert!(matches!(v, Value::Unary { op: UnaryOp::Minus, .. }));
    }

    #[test]
    fn not_keyword_produces_unary_not() {
        let v = parse_value("not $x");
        assert!(matches!(v, Value::Unary { op: UnaryOp::Not, .. }));
    }

    #[test]
    fn space_separated_list_parses_every_item() {
        let v = parse_value("1px 2px 3px");
        match v {
            Value::List { items, .. } => assert_eq!(items.len(), 3),
            other => panic!("expected a 3-item list, got {other:?}"),
        }
    }

    #[test]
    fn three_way_compare_is_a_single_node() {
        let v = parse_value("$a <=> $b");
        match v {
            Value::Expression { op: BinaryOp::Cmp, .. } => {}
            other => panic!("expected a single Cmp node, got {other:?}"),
        }
    }

    #[test]
    fn three_way_compare_is_not_split_into_le_and_gt() {
        // Before `<=>` was added to the operator table this mis-tokenized as
        // `<=` followed by a dangling `>`.
        let v = parse_value("$a <=> $b");
        assert!(!matches!(v, Value::Expression { op: BinaryOp::Le, .. }));
    }

    #[test]
    fn assignment_operator_parses() {
        let v = parse_value("$a = 1");
        match v {
            Value::Expression { op: BinaryOp::Assign, .. } => {}
            other => panic!("expected an Assign node, got {other:?}"),
        }
    }

    #[test]
    fn equality_and_inequality_parse() {
        match parse_value("$a == 1") {
            Value::Expression { op: BinaryOp::Eq, .. } => {}
            other => panic!("expected Eq, got {other:?}"),
        }
        match parse_value("$a != 1") {
            Value::Expression { op: BinaryOp::Ne, .. } => {}
            other => panic!("expected Ne, got {other:?}"),
        }
    }

    #[test]
    fn less_or_equal_and_greater_or_equal_parse() {
        match parse_value("$a <= 1") {
            Value::Expression { op: BinaryOp::Le, .. } => {}
            other => panic!("expected Le, got {other:?}"),
        }
        match parse_value("$a >= 1") {
            Value::Expression { op: BinaryOp::Ge, .. } => {}
            other => panic!("expected Ge, got {other:?}"),
        }
    }

    #[test]
    fn comparison_precedence_ties_eq_ne_and_cmp() {
        // `==`, `!=`, and `<=>` all sit at precedence 3, so none of them
        // should force the other into a nested node for a flat chain.
        assert_eq!(BinaryOp::Eq.precedence(), BinaryOp::Cmp.precedence());
        assert_eq!(BinaryOp::Ne.precedence(), BinaryOp::Cmp.precedence());
    }
}
