#[cfg(test)]
mod tests {
    use cascade_ast::{StringPart, Value};

    fn parse_value(src: &str) -> Value {
        crate::Parser::new(src).parse_value().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    #[test]
    fn plain_quoted_string_has_one_literal_part() {
        let v = parse_value("\"hello\"");
        match v {
            Value::String { parts, .. } => assert_eq!(parts, vec![StringPart::Literal("hello".to_string())]),
            other => panic!("expected a string, got {other:?}"),
        }
    }

    #[test]
    fn escaped_quote_is_unescaped_in_place() {
        let v = parse_value("\"a\\\"b\"");
        match v {
            Value::String { parts, .. } => assert_eq!(parts, vec![StringPart::Literal("a\"b".to_string())]),
            other => panic!("expected a string, got {other:?}"),
        }
    }

    #[test]
    fn interpolation_splits_string_into_parts() {
        let v = parse_value("\"a#{$x}b\"");
        match v {
            Value::String { parts, .. } => {
                assert_eq!(parts.len(), 3);
                assert_eq!(parts[0], StringPart::Literal("a".to_string()));
                assert!(matches!(parts[1], StringPart::Interpolation(_)));
                assert_eq!(parts[2], StringPart::Literal("b".to_string()));
            }
            other => panic!("expected a string, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_is_a_parse_error() {
        let result = crate::Parser::new("\"abc").parse_value();
        assert!(result.is_err());
    }

    #[test]
    fn interpolation_whitespace_flags_look_outside_the_braces() {
        let v = parse_value("a #{$x} b");
        match v {
            Value::List { items, .. } => match &items[1] {
                Value::Interpolate { left_ws, right_ws, .. } => {
                    assert!(*left_ws);
                    assert!(*right_ws);
                }
                other => panic!("expected an interpolation, got {other:?}"),
            },
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn interpolation_with_no_surrounding_space_has_false_flags() {
        // Adjacent (no surrounding whitespace) interpolation between two
        // barewords still parses as a 3-item space list: the grammar
        // doesn't require whitespace between list items, it's the
        // left_ws/right_ws flags that record whether one was there.
        let v = parse_value("a#{$x}b");
        match v {
            Value::List { items, .. } => match &items[1] {
                Value::Interpolate { left_ws, right_ws, .. } => {
                    assert!(!left_ws);
                    assert!(!right_ws);
                }
                other => panic!("expected Interpolate, got {other:?}"),
            },
            other => panic!("expected a 3-item list, got {other:?}"),
        }
    }
}
