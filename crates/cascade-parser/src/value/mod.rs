//! Value/expression grammar (spec.md §4.3–§4.5): the largest single
//! piece of the grammar, split across four files.
//!
//! - [`literals`]: numbers, colors, keywords, variables.
//! - [`string`]: quoted strings, `#{}` interpolation, the open-string
//!   scanner used by `calc()`/`progid:` bodies.
//! - [`expression`]: unary prefixes and precedence-climbing binary ops.
//! - [`call`]: function calls, map/list literals, argument-definition
//!   lists.

mod call;
#[cfg(test)]
mod call_tests;
mod expression;
#[cfg(test)]
mod expression_tests;
mod literals;
#[cfg(test)]
mod literals_tests;
pub(crate) mod string;
#[cfg(test)]
mod string_tests;

use cascade_ast::{AssignFlag, ListSeparator, Value};

use crate::cursor::static_regex;
use crate::{found_description, Parser};

pub(crate) use call::{arg_defs, paren_args};
pub(crate) use string::interpolation;

/// `value()` (spec.md §4.3): the primary (non-operator) alternatives,
/// tried in order. Returns `None` (no cursor movement) when nothing
/// matches, letting callers that try several productions in sequence
/// fall through cleanly.
///
/// Every recursive descent through the value/expression grammar (nested
/// parens, nested function-call arguments, unary prefixes) funnels back
/// through this one entry point, so this is the one place that needs to
/// sit under the nesting-depth guard to keep adversarial input from
/// blowing the call stack.
pub(crate) fn value(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    p.with_depth_guard(value_inner)
}

fn value_inner(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    if let Some(v) = expression::unary(p)? {
        return Ok(Some(v));
    }

    if p.literal("(") {
        let saved_in_parens = p.set_in_parens(true);
        let inner = parenthesized(p)?;
        p.set_in_parens(saved_in_parens);
        if !p.literal(")") {
            return Err(cascade_error::ParseError::unexpected_token(
                "`)`",
                found_description(p),
                p.position(),
            ));
        }
        return Ok(Some(inner));
    }

    if p.peek_literal("#{") {
        return Ok(Some(interpolation(p)?));
    }

    if let Some(v) = literals::variable(p) {
        return Ok(Some(v));
    }
    if let Some(v) = literals::color(p) {
        return Ok(Some(v));
    }

    if let Some(v) = string::quoted_string(p)? {
        return Ok(Some(v));
    }

    if let Some(v) = call::calc_like(p)? {
        return Ok(Some(v));
    }
    if let Some(v) = call::progid(p)? {
        return Ok(Some(v));
    }
    if let Some(v) = function_call(p)? {
        return Ok(Some(v));
    }

    if let Some(v) = literals::number(p) {
        return Ok(Some(v));
    }

    if let Some(v) = literals::keyword(p) {
        return Ok(Some(v));
    }

    Ok(None)
}

/// `name(...)` lookahead: only consumes when an identifier is
/// immediately followed by `(`, since a bare keyword must fall through
/// to [`literals::keyword`] otherwise.
fn function_call(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let re = static_regex!(r"(?i)\A([a-zA-Z_\-][a-zA-Z0-9_\-]*)\s*\(");
    let mark = p.mark();
    let Some(caps) = p.peek_re(re) else { return Ok(None) };
    let name = caps.get(1).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string();
    let whole = caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str();
    let name_len = whole.len() - 1; // exclude the trailing `(`
    p.advance_raw(name_len);
    match call::call(p, name) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            p.reset(mark);
            Err(e)
        }
    }
}

/// Distinguishes a map literal from a plain parenthesized value/list once
/// the opening `(` has been consumed.
fn parenthesized(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    if let Some(map) = call::map_literal(p)? {
        return Ok(map);
    }
    call::paren_list(p)
}

/// `expression()` (spec.md §4.5): one `value()` plus its operator tail.
pub(crate) fn expression(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    let Some(lhs) = value(p)? else {
        return Err(cascade_error::ParseError::syntax_error(
            "expected a value",
            p.position(),
        ));
    };
    expression::exp_helper(p, lhs, 0)
}

/// `spaceList()`: space-separated `expression()`s, flattened into a
/// single value when there's only one and to [`Value::empty_list`] when
/// there are none.
pub(crate) fn space_list(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    let mut items = Vec::new();
    loop {
        let mark = p.mark();
        if value_peek_fails(p) {
            p.reset(mark);
            break;
        }
        items.push(expression(p)?);
    }
    Ok(fold_list(ListSeparator::Space, items))
}

fn value_peek_fails(p: &Parser<'_>) -> bool {
    p.at_eof()
        || p.peek_literal(")")
        || p.peek_literal(",")
        || p.peek_literal(";")
        || p.peek_literal("{")
        || p.peek_literal("}")
}

/// `valueList()`: comma-separated `space_list()`s (spec.md §4.3). The
/// trailing `!default`/`!global` flag is stripped off separately by
/// [`strip_assign_flag`], at the statement level that cares about it.
pub(crate) fn value_list(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    let mut items = vec![space_list(p)?];
    while p.literal(",") {
        items.push(space_list(p)?);
    }
    Ok(fold_list(ListSeparator::Comma, items))
}

fn fold_list(separator: ListSeparator, mut items: Vec<Value>) -> Value {
    match items.len() {
        0 => Value::empty_list(separator),
        1 => items.pop().unwrap_or_else(|| unreachable!("len checked above")),
        _ => Value::List { separator, items },
    }
}

/// Strips a trailing `!default`/`!global` flag off a value, used by
/// variable-assignment statements (spec.md §4.2). The flag only ever
/// trails the whole value, never an inner list item.
pub(crate) fn strip_assign_flag(p: &mut Parser<'_>) -> Option<AssignFlag> {
    let re = static_regex!(r"(?i)\A!\s*(default|global)\b");
    let caps = p.match_re(re)?;
    let word = caps.get(1)?.as_str();
    if word.eq_ignore_ascii_case("default") { Some(AssignFlag::Default) } else { Some(AssignFlag::Global) }
}
