//! Quoted strings, interpolation, and the unbounded open-string scanner
//! (spec.md §4.4).
//!
//! Long string bodies are scanned with plain substring search rather than
//! a regex: `match_string` looks for whichever of `#{`, `\`, or the
//! closing delimiter comes first, rather than re-running a regex over
//! the whole remaining buffer on every character.

use cascade_ast::{Quote, StringPart, Value};

use crate::cursor::static_regex;
use crate::{found_description, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Found {
    Interpolation,
    Backslash,
    Delimiter,
    Eof,
}

/// Scan `rest` for the nearest of `#{`, `\`, or `delim`. Returns the byte
/// offset of whichever is found first (or `rest.len()` on `Found::Eof`).
fn match_string(rest: &str, delim: &str) -> (usize, Found) {
    let mut best: Option<(usize, Found)> = None;
    let mut consider = |pos: Option<usize>, found: Found| {
        if let Some(pos) = pos {
            if best.is_none_or(|(best_pos, _)| pos < best_pos) {
                best = Some((pos, found));
            }
        }
    };
    consider(rest.find("#{"), Found::Interpolation);
    consider(rest.find('\\'), Found::Backslash);
    consider(rest.find(delim), Found::Delimiter);
    best.unwrap_or((rest.len(), Found::Eof))
}

/// `'...'` or `"..."`, with `#{}` interpolation and backslash escapes.
/// Returns `None` (no cursor movement) when the next character isn't a
/// quote.
pub(crate) fn quoted_string(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let quote = match p.peek_char() {
        Some('"') => Quote::Double,
        Some('\'') => Quote::Single,
        _ => return Ok(None),
    };
    let delim = if quote == Quote::Double { "\"" } else { "'" };
    let saved_eat_ws = p.set_eat_ws(false);
    p.advance_raw(1);

    let mut parts = Vec::new();
    let mut literal = String::new();
    loop {
        let rest = p.rest();
        let (offset, found) = match_string(rest, delim);
        literal.push_str(&rest[..offset]);
        p.advance_raw(offset);
        match found {
            Found::Delimiter => {
                p.advance_raw(delim.len());
                break;
            }
            Found::Eof => {
                p.set_eat_ws(saved_eat_ws);
                return Err(cascade_error::ParseError::unexpected_eof(p.position()));
            }
            Found::Backslash => {
                p.advance_raw(1);
                match p.peek_char() {
                    Some(c) if c.to_string() == delim => {
                        literal.push(c);
                        p.advance_raw(c.len_utf8());
                    }
                    _ => literal.push('\\'),
                }
            }
            Found::Interpolation => {
                if !literal.is_empty() {
                    parts.push(StringPart::Literal(std::mem::take(&mut literal)));
                }
                let value = interpolation(p)?;
                parts.push(StringPart::Interpolation(Box::new(value)));
            }
        }
    }
    if !literal.is_empty() {
        parts.push(StringPart::Literal(literal));
    }
    p.set_eat_ws(saved_eat_ws);
    if saved_eat_ws {
        p.skip_whitespace();
    }
    Ok(Some(Value::String { quote, parts }))
}

/// `#{ valueList }` (spec.md §4.4). Expects the cursor positioned at the
/// leading `#`. Tracks whether whitespace was adjacent on either side so
/// callers that stitch interpolation back into selector/string text know
/// whether to reinsert a space.
pub(crate) fn interpolation(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    debug_assert!(p.peek_literal("#{"));
    let pos = p.position();
    let left_ws = p.buffer()[..pos].chars().next_back().is_some_and(char::is_whitespace);
    p.advance_raw(2);
    let saved_eat_ws = p.set_eat_ws(true);
    p.skip_whitespace();
    let value = super::value_list(p)?;
    p.set_eat_ws(false);
    if !p.literal_ws("}", false) {
        return Err(cascade_error::ParseError::unexpected_token(
            "`}`",
            found_description(p),
            p.position(),
        ));
    }
    let right_ws = p.peek_char().is_some_and(char::is_whitespace);
    p.set_eat_ws(saved_eat_ws);
    if saved_eat_ws {
        p.skip_whitespace();
    }
    Ok(Value::Interpolate { value: Box::new(value), left_ws, right_ws })
}

/// Unbounded raw-text scan up to (but not including) `end` at nesting
/// depth zero. Used for `calc()`/`progid:` bodies and other places that
/// must preserve the source text verbatim apart from interpolation.
/// `nesting_open`, when given, is a character that increments depth (so
/// `end` only terminates the scan once every nested occurrence of it has
/// been closed).
pub(crate) fn open_string(
    p: &mut Parser<'_>,
    end: &str,
    nesting_open: Option<char>,
) -> cascade_error::ParseResult<Value> {
    let saved_eat_ws = p.set_eat_ws(false);
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut depth: u32 = 0;

    loop {
        let rest = p.rest();
        if rest.is_empty() {
            p.set_eat_ws(saved_eat_ws);
            return Err(cascade_error::ParseError::unexpected_eof(p.position()));
        }
        if rest.starts_with(end) {
            if depth == 0 {
                break;
            }
            depth -= 1;
            literal.push_str(end);
            p.advance_raw(end.len());
            continue;
        }
        if rest.starts_with("#{") {
            if !literal.is_empty() {
                parts.push(StringPart::Literal(std::mem::take(&mut literal)));
            }
            let value = interpolation(p)?;
            parts.push(StringPart::Interpolation(Box::new(value)));
            continue;
        }
        if let Some('"') | Some('\'') = rest.chars().next() {
            let quote_span = scan_nested_quoted(rest);
            literal.push_str(quote_span);
            p.advance_raw(quote_span.len());
            continue;
        }
        let c = rest.chars().next().unwrap_or_else(|| unreachable!("checked non-empty above"));
        if Some(c) == nesting_open {
            depth += 1;
        }
        literal.push(c);
        p.advance_raw(c.len_utf8());
    }

    p.set_eat_ws(saved_eat_ws);
    if saved_eat_ws {
        p.skip_whitespace();
    }
    if !literal.is_empty() || parts.is_empty() {
        parts.push(StringPart::Literal(literal));
    }
    Ok(Value::String { quote: Quote::Bare, parts })
}

/// Captures a full `'...'`/`"..."` span (including both delimiters,
/// honoring backslash escapes) without parsing its contents, for
/// embedding verbatim inside an open-string scan.
fn scan_nested_quoted(rest: &str) -> &str {
    let re = static_regex!(r#"(?s)\A(?:"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*')"#);
    match re.find(rest) {
        Some(m) => m.as_str(),
        None => {
            let mut chars = rest.chars();
            let len = chars.next().map_or(0, char::len_utf8);
            &rest[..len]
        }
    }
}
