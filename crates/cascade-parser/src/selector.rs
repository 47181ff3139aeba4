//! Selector parser (spec.md §4.5).
//!
//! Runs with `eat_ws := false` throughout: selectors are whitespace
//! sensitive (bare whitespace between parts is the descendant
//! combinator), unlike the rest of the grammar.

use cascade_ast::{AttrToken, Combinator, PseudoNamePart, Selector, SelectorPart};

use crate::cursor::static_regex;
use crate::value::interpolation;
use crate::{found_description, Parser};

/// `selectors`: comma-separated `selector`.
pub(crate) fn selectors(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<Selector>> {
    let mut list = vec![selector(p)?];
    p.skip_whitespace();
    while p.literal(",") {
        p.skip_whitespace();
        list.push(selector(p)?);
        p.skip_whitespace();
    }
    Ok(list)
}

/// `selector`: one or more `selectorSingle`s interleaved with
/// combinators and vendor `/regex/` tokens, all run with `eat_ws` off.
fn selector(p: &mut Parser<'_>) -> cascade_error::ParseResult<Selector> {
    let saved_eat_ws = p.set_eat_ws(false);
    let mut parts = Vec::new();
    loop {
        consume_implicit_descendant(p, &mut parts);

        if let Some(combinator) = explicit_combinator(p) {
            parts.push(SelectorPart::Combinator(combinator));
            skip_inline_ws(p);
            continue;
        }
        if let Some(regex) = vendor_regex(p) {
            parts.push(SelectorPart::VendorRegex(regex));
            continue;
        }
        if looks_terminated(p) {
            break;
        }
        let before = p.position();
        selector_single(p, &mut parts)?;
        if p.position() == before {
            break;
        }
    }
    p.set_eat_ws(saved_eat_ws);
    Ok(parts)
}

fn skip_inline_ws(p: &mut Parser<'_>) {
    let re = static_regex!(r"\A[ \t]+");
    p.match_re_ws(re, false);
}

/// Bare whitespace between parts is the implicit descendant combinator,
/// unless it's just separating an explicit combinator from its
/// neighbors (that combinator carries the relation instead).
fn consume_implicit_descendant(p: &mut Parser<'_>, parts: &mut Selector) {
    let re = static_regex!(r"\A[ \t]+");
    if p.match_re_ws(re, false).is_some()
        && !looks_terminated(p)
        && peek_combinator_char(p).is_none()
    {
        parts.push(SelectorPart::Combinator(Combinator::Descendant));
    }
}

fn peek_combinator_char(p: &Parser<'_>) -> Option<char> {
    match p.rest().chars().next() {
        Some(c @ ('>' | '+' | '~')) => Some(c),
        _ => None,
    }
}

fn explicit_combinator(p: &mut Parser<'_>) -> Option<Combinator> {
    let c = match p.rest().chars().next() {
        Some('>') => Combinator::Child,
        Some('+') => Combinator::Sibling,
        Some('~') => Combinator::GeneralSibling,
        _ => return None,
    };
    p.advance_raw(1);
    Some(c)
}

fn vendor_regex(p: &mut Parser<'_>) -> Option<String> {
    let re = static_regex!(r"(?s)\A/((?:\\.|[^/\\])*)/");
    let caps = p.match_re_ws(re, false)?;
    Some(caps.get(1)?.as_str().to_string())
}

fn looks_terminated(p: &Parser<'_>) -> bool {
    let re = static_regex!(r"\A\s*[{,]");
    re.is_match(p.rest()) || p.at_eof()
}

/// One `selectorSingle` token: universal, parent ref, literal
/// punctuation, escape, numeric unit, bareword, interpolation,
/// placeholder, pseudo-class, or attribute selector.
fn selector_single(p: &mut Parser<'_>, parts: &mut Selector) -> cascade_error::ParseResult<()> {
    if p.literal_ws("*", false) {
        parts.push(SelectorPart::Universal);
        return Ok(());
    }
    if p.literal_ws("&", false) {
        parts.push(SelectorPart::Parent);
        return Ok(());
    }
    if let Some(c) = p.rest().chars().next() {
        if matches!(c, '.' | '|' | '#' if !p.rest().starts_with("#{")) {
            parts.push(SelectorPart::Literal(c.to_string()));
            p.advance_raw(c.len_utf8());
            return Ok(());
        }
    }

    let escape_re = static_regex!(r"(?s)\A\\(.)");
    if let Some(caps) = p.match_re_ws(escape_re, false) {
        parts.push(SelectorPart::Escape(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default()));
        return Ok(());
    }

    let number_re = static_regex!(r"(?i)\A([0-9]*\.?[0-9]+)([%a-z]+)?");
    if let Some(caps) = p.match_re_ws(number_re, false) {
        let value: f64 = caps.get(1).map(|m| m.as_str()).unwrap_or("0").parse().unwrap_or(0.0);
        let unit = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
        parts.push(SelectorPart::Number { value, unit });
        return Ok(());
    }

    if p.peek_literal("#{") {
        let value = interpolation(p)?;
        parts.push(SelectorPart::Interpolation(value));
        return Ok(());
    }

    if p.rest().starts_with('%') {
        p.advance_raw(1);
        let name = pseudo_name(p)?;
        parts.push(SelectorPart::Placeholder(name));
        return Ok(());
    }

    let pseudo_re = static_regex!(r"\A(::?)");
    let pseudo_mark = p.mark();
    if let Some(caps) = p.match_re_ws(pseudo_re, false) {
        let single_colon = caps.get(1).map(|m| m.as_str() == ":").unwrap_or(true);
        let name = pseudo_name(p)?;
        // A bare `:`/`::` with no identifier after it (e.g. a property's
        // `name: value` colon) is not a pseudo-class; back out and let the
        // caller's no-progress check stop the selector here.
        if name.is_empty() {
            p.reset(pseudo_mark);
            return Ok(());
        }
        let args = if p.literal_ws("(", false) {
            let value = crate::value::string::open_string(p, ")", Some('('))?;
            if !p.literal_ws(")", false) {
                return Err(cascade_error::ParseError::unexpected_token(
                    "`)`",
                    found_description(p),
                    p.position(),
                ));
            }
            Some(value)
        } else {
            None
        };
        parts.push(SelectorPart::PseudoClass { single_colon, name, args });
        return Ok(());
    }

    if p.literal_ws("[", false) {
        let tokens = attribute_selector(p)?;
        parts.push(SelectorPart::Attribute(tokens));
        return Ok(());
    }

    let bareword_re = static_regex!(r"(?i)\A[a-zA-Z_\-][a-zA-Z0-9_\-]*");
    if let Some(caps) = p.match_re_ws(bareword_re, false) {
        parts.push(SelectorPart::Bareword(caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string()));
        return Ok(());
    }

    Ok(())
}

fn pseudo_name(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<PseudoNamePart>> {
    let mut out = Vec::new();
    let word_re = static_regex!(r"(?i)\A[a-zA-Z_\-][a-zA-Z0-9_\-]*");
    loop {
        if p.peek_literal("#{") {
            out.push(PseudoNamePart::Interpolation(interpolation(p)?));
            continue;
        }
        if let Some(caps) = p.match_re_ws(word_re, false) {
            out.push(PseudoNamePart::Word(
                caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string(),
            ));
            continue;
        }
        break;
    }
    Ok(out)
}

/// `[...]`: whitespace, strings, keywords, interpolations, and operator
/// runs `[|~$*^=-]+`, tokenized until the closing `]`.
fn attribute_selector(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<AttrToken>> {
    let mut tokens = Vec::new();
    let op_re = static_regex!(r"\A[|~$*^=\-]+");
    let ws_re = static_regex!(r"\A[ \t]+");
    loop {
        if p.literal_ws("]", false) {
            break;
        }
        if p.at_eof() {
            return Err(cascade_error::ParseError::unexpected_eof(p.position()));
        }
        if p.peek_literal("#{") {
            tokens.push(AttrToken::Interpolation(interpolation(p)?));
            continue;
        }
        if matches!(p.rest().chars().next(), Some('"') | Some('\'')) {
            if let Some(value) = crate::value::string::quoted_string(p)? {
                tokens.push(AttrToken::String(value));
                continue;
            }
        }
        if let Some(caps) = p.match_re_ws(op_re, false) {
            tokens.push(AttrToken::Operator(
                caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string(),
            ));
            continue;
        }
        if p.match_re_ws(ws_re, false).is_some() {
            continue;
        }
        let c = p.rest().chars().next().unwrap_or_else(|| unreachable!("checked non-eof above"));
        p.advance_raw(c.len_utf8());
        tokens.push(AttrToken::Literal(c.to_string()));
    }
    Ok(tokens)
}
