//! Cursor & Matcher (spec.md §4.1).
//!
//! [`Cursor`] is the low-level byte-position primitive: an immutable
//! buffer plus a mutable integer position, with no knowledge of grammar,
//! comments, or the block stack. [`Parser`]'s `match_re`/`literal`/
//! `skip_whitespace` methods below build the speculative-try combinators
//! the rest of the parser uses on top of it.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::Parser;

/// Byte-position cursor over an immutable source buffer.
pub(crate) struct Cursor<'a> {
    buffer: &'a str,
    pos: usize,
    /// Default whitespace/comment-eating behavior for `match_re`.
    eat_ws: bool,
    /// Set while inside a parenthesized value; consulted by the unary
    /// `-` disambiguation in the expression parser.
    in_parens: bool,
}

/// A saved cursor state, restored wholesale on a failed speculative try.
/// Captures `eat_ws`/`in_parens` too, since productions like string
/// bodies and `parenValue` flip them mid-trial (spec.md §9).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pos: usize,
    eat_ws: bool,
    in_parens: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buffer: &'a str) -> Self {
        Self { buffer, pos: 0, eat_ws: true, in_parens: false }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.buffer[self.pos..]
    }

    pub(crate) fn rest_from(&self, pos: usize) -> &'a str {
        &self.buffer[pos..]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.buffer[start..end]
    }

    pub(crate) fn buffer(&self) -> &'a str {
        self.buffer
    }
}

/// Fetch (compiling once) the `Regex` for a literal pattern string.
///
/// Each call site owns a distinct cache cell via the macro below, so the
/// same textual pattern used from two call sites compiles twice — a
/// deliberate trade of a little redundant compilation for call sites that
/// don't need to share a registry.
macro_rules! static_regex {
    ($pattern:expr) => {{
        static CACHE: OnceLock<Regex> = OnceLock::new();
        CACHE.get_or_init(|| {
            #[allow(clippy::expect_used)] // pattern is a compile-time literal
            Regex::new($pattern).expect("static regex pattern must compile")
        })
    }};
}
pub(crate) use static_regex;

impl<'a> Parser<'a> {
    /// `snapshot()` (spec.md §4.1).
    pub(crate) fn mark(&self) -> Mark {
        Mark { pos: self.cursor.pos, eat_ws: self.cursor.eat_ws, in_parens: self.cursor.in_parens }
    }

    /// `restore(p)` (spec.md §4.1).
    pub(crate) fn reset(&mut self, mark: Mark) {
        self.cursor.pos = mark.pos;
        self.cursor.eat_ws = mark.eat_ws;
        self.cursor.in_parens = mark.in_parens;
    }

    pub(crate) fn set_eat_ws(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.cursor.eat_ws, value)
    }

    pub(crate) fn set_in_parens(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.cursor.in_parens, value)
    }

    pub(crate) fn in_parens(&self) -> bool {
        self.cursor.in_parens
    }

    /// `match(pattern, &captures, eatWs?) -> bool`: anchored at the
    /// cursor. On success advances past the match and, unless told
    /// otherwise, skips trailing whitespace/comments.
    pub(crate) fn match_re(&mut self, re: &Regex) -> Option<Captures<'a>> {
        self.match_re_ws(re, self.cursor.eat_ws)
    }

    pub(crate) fn match_re_ws(&mut self, re: &Regex, eat_ws: bool) -> Option<Captures<'a>> {
        let caps = re.captures(self.cursor.rest())?;
        let m = caps.get(0)?;
        debug_assert_eq!(m.start(), 0, "cursor patterns must be anchored with ^");
        self.cursor.pos += m.end();
        if eat_ws {
            self.skip_whitespace();
        }
        Some(caps)
    }

    /// `peek(pattern, &captures, from?) -> bool`: anchored, no advance.
    pub(crate) fn peek_re(&self, re: &Regex) -> Option<Captures<'a>> {
        self.peek_re_at(re, self.cursor.pos)
    }

    pub(crate) fn peek_re_at(&self, re: &Regex, pos: usize) -> Option<Captures<'a>> {
        let caps = re.captures(self.cursor.rest_from(pos))?;
        let m = caps.get(0)?;
        if m.start() == 0 { Some(caps) } else { None }
    }

    /// `literal(text, eatWs?) -> bool`.
    pub(crate) fn literal(&mut self, text: &str) -> bool {
        self.literal_ws(text, self.cursor.eat_ws)
    }

    pub(crate) fn literal_ws(&mut self, text: &str, eat_ws: bool) -> bool {
        if self.cursor.rest().starts_with(text) {
            self.cursor.pos += text.len();
            if eat_ws {
                self.skip_whitespace();
            }
            true
        } else {
            false
        }
    }

    pub(crate) fn peek_literal(&self, text: &str) -> bool {
        self.cursor.rest().starts_with(text)
    }

    /// `whitespace() -> bool`: repeatedly consumes line comments, block
    /// comments, and whitespace runs. Block comments are handed to the
    /// comment tracker (de-duplicated by start position) and buffered as
    /// pending comments on the current block.
    /// The unconsumed tail of the buffer from the current position.
    pub(crate) fn rest(&self) -> &'a str {
        self.cursor.rest()
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.cursor.at_eof()
    }

    /// The whole source buffer, for call sites that need to look behind
    /// the cursor (e.g. interpolation's leading-whitespace flag).
    pub(crate) fn buffer(&self) -> &'a str {
        self.cursor.buffer()
    }

    pub(crate) fn peek_char(&self) -> Option<char> {
        self.cursor.rest().chars().next()
    }

    /// Advance the cursor by `n` bytes without touching `eat_ws` state or
    /// running whitespace/comment skipping — used by the string/open-
    /// string scanners, which manage literal-text spans byte-by-byte.
    pub(crate) fn advance_raw(&mut self, n: usize) {
        self.cursor.pos += n;
    }

    pub(crate) fn skip_whitespace(&mut self) -> bool {
        let re = static_regex!(r"(?s)\A(?:(//[^\n]*)|(/\*.*?\*/)|(\s+))");
        let mut consumed_any = false;
        loop {
            let start = self.cursor.pos;
            let Some(caps) = re.captures(self.cursor.rest()) else { break };
            let m = match caps.get(0) {
                Some(m) => m,
                None => break,
            };
            if m.end() == 0 {
                break;
            }
            self.cursor.pos += m.end();
            consumed_any = true;
            if caps.get(1).is_some() || caps.get(2).is_some() {
                let text = m.as_str().to_string();
                if self.comments.record(start) {
                    self.blocks.push_pending_comment(self.source_tag(start), text);
                }
            }
        }
        consumed_any
    }
}
