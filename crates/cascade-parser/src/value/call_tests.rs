#[cfg(test)]
mod tests {
    use cascade_ast::Value;

    fn parse_value(src: &str) -> Value {
        crate::Parser::new(src).parse_value().unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    #[test]
    fn calc_body_is_kept_raw_apart_from_interpolation() {
        let v = parse_value("calc(100% - #{$gutter})");
        match v {
            Value::Function { name, raw } => {
                assert_eq!(name, "calc");
                match *raw {
                    Value::String { parts, .. } => assert!(parts.len() > 1),
                    other => panic!("expected a raw string body, got {other:?}"),
                }
            }
            other => panic!("expected a calc() Function, got {other:?}"),
        }
    }

    #[test]
    fn vendor_prefixed_calc_keeps_the_prefix_in_the_name() {
        let v = parse_value("-webkit-calc(1px + 2px)");
        match v {
            Value::Function { name, .. } => assert_eq!(name, "-webkit-calc"),
            other => panic!("expected a Function, got {other:?}"),
        }
    }

    #[test]
    fn progid_call_prefixes_the_dotted_name() {
        let v = parse_value("progid:DXImageTransform.Microsoft.Alpha(opacity=50)");
        match v {
            Value::Function { name, .. } => assert_eq!(name, "progid:DXImageTransform.Microsoft.Alpha"),
            other => panic!("expected a Function, got {other:?}"),
        }
    }

    #[test]
    fn alpha_call_keeps_its_body_raw() {
        let v = parse_value("alpha(opacity=50)");
        assert!(matches!(v, Value::Function { .. }));
    }

    #[test]
    fn plain_function_call_with_no_arguments() {
        let v = parse_value("nth()");
        match v {
            Value::FunctionCall { name, args } => {
                assert_eq!(name, "nth");
                assert!(args.is_empty());
            }
            other => panic!("expected a FunctionCall, got {other:?}"),
        }
    }

    #[test]
    fn keyword_argument_is_captured_separately_from_its_value() {
        let v = parse_value("rgba($color: red, $alpha: 0.5)");
        match v {
            Value::FunctionCall { args, .. } => {
                assert_eq!(args.len(), 2);
                assert_eq!(args[0].keyword.as_deref(), Some("color"));
                assert_eq!(args[1].keyword.as_deref(), Some("alpha"));
            }
            other => panic!("expected a FunctionCall, got {other:?}"),
        }
    }

    #[test]
    fn splat_argument_is_flagged() {
        let v = parse_value("nth($list...)");
        match v {
            Value::FunctionCall { args, .. } => {
                assert_eq!(args.len(), 1);
                assert!(args[0].splat);
            }
            other => panic!("expected a FunctionCall, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_call_body_falls_back_to_a_raw_function() {
        // `:` inside the parens isn't a valid keyword-argument or
        // expression shape here, so the whole call keeps its raw text.
        let v = parse_value("filter(x: :::)");
        assert!(matches!(v, Value::Function { name, .. } if name == "filter"));
    }

    #[test]
    fn map_literal_keeps_keys_and_values_in_insertion_order() {
        let v = parse_value("(a: 1, b: 2)");
        match v {
            Value::Map { keys, values } => {
                assert_eq!(keys, vec![Value::Keyword("a".to_string()), Value::Keyword("b".to_string())]);
                assert_eq!(values.len(), 2);
            }
            other => panic!("expected a Map, got {other:?}"),
        }
    }

    #[test]
    fn parenthesized_list_without_colons_is_not_a_map() {
        let v = parse_value("(1, 2, 3)");
        match v {
            Value::List { items, .. } => assert_eq!(items.len(), 3),
            other => panic!("expected a List, got {other:?}"),
        }
    }

    #[test]
    fn empty_parens_is_an_empty_space_list() {
        let v = parse_value("()");
        match v {
            Value::List { items, .. } => assert!(items.is_empty()),
            other => panic!("expected an empty List, got {other:?}"),
        }
    }

    #[test]
    fn arg_defs_parses_defaults_and_a_trailing_splat() {
        let mut p = crate::Parser::new("$a, $b: 1px, $rest...)");
        let defs = crate::value::arg_defs(&mut p).unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].name, "a");
        assert!(defs[0].default.is_none());
        assert_eq!(defs[1].name, "b");
        assert!(defs[1].default.is_some());
        assert!(defs[2].splat);
        assert!(p.literal(")"));
    }

    #[test]
    fn arg_defs_rejects_a_parameter_after_a_splat() {
        let mut p = crate::Parser::new("$a..., $b)");
        assert!(crate::value::arg_defs(&mut p).is_err());
    }

    #[test]
    fn paren_args_on_empty_parens_returns_no_arguments() {
        let mut p = crate::Parser::new("()");
        let args = crate::value::paren_args(&mut p).unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert!(args.is_empty());
    }

    #[test]
    fn paren_args_with_no_leading_paren_also_returns_no_arguments() {
        let mut p = crate::Parser::new("");
        let args = crate::value::paren_args(&mut p).unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert!(args.is_empty());
    }
}
