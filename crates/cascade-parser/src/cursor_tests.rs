#[cfg(test)]
mod tests {
    use crate::cursor::static_regex;
    use crate::Parser;

    #[test]
    fn literal_with_default_eat_ws_consumes_trailing_whitespace_and_comments() {
        let mut p = Parser::new("foo   /* x */bar");
        assert!(p.literal("foo"));
        assert_eq!(p.rest(), "bar");
    }

    #[test]
    fn literal_ws_false_leaves_trailing_whitespace_untouched() {
        let mut p = Parser::new("foo   bar");
        assert!(p.literal_ws("foo", false));
        assert_eq!(p.rest(), "   bar");
    }

    #[test]
    fn peek_literal_does_not_advance_the_cursor() {
        let p = Parser::new("foo");
        assert!(p.peek_literal("foo"));
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn mark_and_reset_restores_position_and_eat_ws_flag() {
        let mut p = Parser::new("foo bar");
        let saved = p.set_eat_ws(false);
        let mark = p.mark();
        p.set_eat_ws(true);
        p.literal_ws("foo", true);
        assert_eq!(p.position(), 4);
        p.reset(mark);
        assert_eq!(p.position(), 0);
        assert!(!p.in_parens());
        p.set_eat_ws(saved);
    }

    #[test]
    fn match_re_requires_an_anchored_match_at_the_cursor() {
        let mut p = Parser::new("abc123");
        let re = static_regex!(r"\A[a-z]+");
        let caps = p.match_re(re).unwrap_or_else(|| panic!("expected a match"));
        assert_eq!(caps.get(0).map(|m| m.as_str()), Some("abc"));
        assert_eq!(p.rest(), "123");
    }

    #[test]
    fn match_re_ws_false_does_not_eat_trailing_whitespace() {
        let mut p = Parser::new("abc   123");
        let re = static_regex!(r"\A[a-z]+");
        p.match_re_ws(re, false);
        assert_eq!(p.rest(), "   123");
    }

    #[test]
    fn advance_raw_moves_by_byte_count_without_skipping_whitespace() {
        let mut p = Parser::new("  ab");
        p.advance_raw(2);
        assert_eq!(p.rest(), "ab");
    }

    #[test]
    fn at_eof_is_true_only_once_the_whole_buffer_is_consumed() {
        let mut p = Parser::new("x");
        assert!(!p.at_eof());
        p.literal("x");
        assert!(p.at_eof());
    }

    #[test]
    fn in_parens_flag_round_trips_through_set_in_parens() {
        let mut p = Parser::new("");
        assert!(!p.in_parens());
        let prev = p.set_in_parens(true);
        assert!(!prev);
        assert!(p.in_parens());
    }
}
