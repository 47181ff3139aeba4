#[cfg(test)]
mod tests {
    use cascade_ast::{Combinator, SelectorPart};

    fn one(src: &str) -> Vec<SelectorPart> {
        let mut sels = crate::Parser::new(src)
            .parse_selectors()
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(sels.len(), 1, "expected exactly one selector in {src:?}");
        sels.remove(0)
    }

    #[test]
    fn implicit_descendant_combinator_is_inserted() {
        let parts = one(".a .b");
        assert!(parts.iter().any(|p| matches!(p, SelectorPart::Combinator(Combinator::Descendant))));
    }

    #[test]
    fn explicit_combinator_suppresses_implicit_one() {
        let parts = one(".a > .b");
        let combinators: Vec<_> =
            parts.iter().filter(|p| matches!(p, SelectorPart::Combinator(_))).collect();
        assert_eq!(combinators.len(), 1);
        assert!(matches!(combinators[0], SelectorPart::Combinator(Combinator::Child)));
    }

    #[test]
    fn parent_selector_ampersand() {
        let parts = one("&.active");
        assert!(matches!(parts[0], SelectorPart::Parent));
    }

    #[test]
    fn comma_separates_multiple_selectors() {
        let sels = crate::Parser::new(".a, .b").parse_selectors().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(sels.len(), 2);
    }

    #[test]
    fn attribute_selector_captures_operator_and_value() {
        let parts = one("[href^=\"http\"]");
        assert!(parts.iter().any(|p| matches!(p, SelectorPart::Attribute(_))));
    }

    #[test]
    fn interpolated_class_name() {
        let parts = one(".icon-#{$name}");
        assert!(parts.iter().any(|p| matches!(p, SelectorPart::Interpolation(_))));
    }
}
