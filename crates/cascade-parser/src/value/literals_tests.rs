#[cfg(test)]
mod tests {
    use cascade_ast::Value;

    use crate::value::literals;
    use crate::Parser;

    #[test]
    fn bare_integer_has_an_empty_unit() {
        let mut p = Parser::new("0");
        assert_eq!(literals::number(&mut p), Some(Value::Number { value: 0.0, unit: String::new() }));
    }

    #[test]
    fn number_with_unit_keeps_the_unit_distinct_from_unitless() {
        let mut p = Parser::new("0px");
        assert_eq!(literals::number(&mut p), Some(Value::Number { value: 0.0, unit: "px".to_string() }));
    }

    #[test]
    fn fractional_number_parses_the_decimal_part() {
        let mut p = Parser::new("1.5em");
        assert_eq!(literals::number(&mut p), Some(Value::Number { value: 1.5, unit: "em".to_string() }));
    }

    #[test]
    fn six_digit_color_splits_into_three_channels() {
        let mut p = Parser::new("#112233");
        assert_eq!(literals::color(&mut p), Some(Value::Color { r: 0x11, g: 0x22, b: 0x33 }));
    }

    #[test]
    fn three_digit_color_expands_each_nibble() {
        let mut p = Parser::new("#1af");
        assert_eq!(literals::color(&mut p), Some(Value::Color { r: 0x11, g: 0xaa, b: 0xff }));
    }

    #[test]
    fn color_requires_a_word_boundary_after_the_hex_digits() {
        // `#1234567` has 7 hex digits: neither the 3- nor 6-digit
        // alternative matches with a trailing word boundary.
        let mut p = Parser::new("#1234567");
        assert_eq!(literals::color(&mut p), None);
    }

    #[test]
    fn keyword_null_is_special_cased_to_value_null() {
        let mut p = Parser::new("null");
        assert_eq!(literals::keyword(&mut p), Some(Value::Null));
    }

    #[test]
    fn keyword_null_is_case_insensitive() {
        let mut p = Parser::new("NULL");
        assert_eq!(literals::keyword(&mut p), Some(Value::Null));
    }

    #[test]
    fn plain_keyword_is_kept_verbatim() {
        let mut p = Parser::new("sans-serif");
        assert_eq!(literals::keyword(&mut p), Some(Value::Keyword("sans-serif".to_string())));
    }

    #[test]
    fn variable_strips_the_leading_sigil() {
        let mut p = Parser::new("$my-var");
        assert_eq!(literals::variable(&mut p), Some(Value::Variable("my-var".to_string())));
    }

    #[test]
    fn variable_returns_none_without_the_sigil() {
        let mut p = Parser::new("my-var");
        assert_eq!(literals::variable(&mut p), None);
    }
}
