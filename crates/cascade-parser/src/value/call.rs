//! Function calls, `calc()`/`progid:` raw bodies, map literals, and
//! argument-definition lists (spec.md §4.3, §4.4).

use cascade_ast::{ArgDef, CallArg, ListSeparator, Value};

use crate::cursor::static_regex;
use crate::value::string::open_string;
use crate::{found_description, Parser};

/// `calc(...)`, `-vendor-calc(...)`, and `expression(...)`: body text is
/// preserved verbatim (apart from `#{}` interpolation) since arithmetic
/// inside these is CSS's own, not ours.
pub(crate) fn calc_like(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let re = static_regex!(r"(?i)\A(-[a-z]+-)?(calc|expression)\s*\(");
    let Some(caps) = p.peek_re(re) else { return Ok(None) };
    let name = caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str();
    let open_paren_offset = name.len();
    let name = name[..name.len() - 1].trim_end().to_string();
    p.advance_raw(open_paren_offset);
    let raw = open_string(p, ")", Some('('))?;
    if !p.literal(")") {
        return Err(cascade_error::ParseError::unexpected_token(
            "`)`",
            found_description(p),
            p.position(),
        ));
    }
    Ok(Some(Value::Function { name, raw: Box::new(raw) }))
}

/// `progid:DXImageTransform.Microsoft.Name(args)`: both the dotted name
/// and the argument text are raw, preserved for IE filter syntax.
pub(crate) fn progid(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let re = static_regex!(r"(?i)\Aprogid\s*:\s*");
    if p.match_re(re).is_none() {
        return Ok(None);
    }
    let name_re = static_regex!(r"\A[A-Za-z0-9_.]+");
    let name = match p.match_re(name_re) {
        Some(caps) => caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string(),
        None => String::new(),
    };
    if !p.literal("(") {
        return Err(cascade_error::ParseError::unexpected_token(
            "`(`",
            found_description(p),
            p.position(),
        ));
    }
    let raw = open_string(p, ")", Some('('))?;
    if !p.literal(")") {
        return Err(cascade_error::ParseError::unexpected_token(
            "`)`",
            found_description(p),
            p.position(),
        ));
    }
    Ok(Some(Value::Function { name: format!("progid:{name}"), raw: Box::new(raw) }))
}

/// A plain function call `name(args)`, where `args` is a comma-separated
/// list of [`CallArg`]s. Falls back to a raw open-string body (keeping
/// the call as a single opaque argument) when argument parsing can't
/// make sense of the contents, so unusual vendor syntax never aborts the
/// whole parse.
pub(crate) fn call(p: &mut Parser<'_>, name: String) -> cascade_error::ParseResult<Value> {
    if !p.literal("(") {
        return Err(cascade_error::ParseError::unexpected_token(
            "`(`",
            found_description(p),
            p.position(),
        ));
    }

    // `alpha(opacity=50)` MS filter syntax: the `k=v` shape isn't a real
    // argument list, so its body is kept raw rather than parsed.
    if name.eq_ignore_ascii_case("alpha") {
        let raw = open_string(p, ")", Some('('))?;
        if !p.literal(")") {
            return Err(cascade_error::ParseError::unexpected_token(
                "`)`",
                found_description(p),
                p.position(),
            ));
        }
        return Ok(Value::Function { name, raw: Box::new(raw) });
    }

    if p.literal(")") {
        return Ok(Value::FunctionCall { name, args: Vec::new() });
    }

    let mark = p.mark();
    match arg_values(p) {
        Ok(args) if p.literal(")") => Ok(Value::FunctionCall { name, args }),
        _ => {
            p.reset(mark);
            let raw = open_string(p, ")", Some('('))?;
            if !p.literal(")") {
                return Err(cascade_error::ParseError::unexpected_token(
                    "`)`",
                    found_description(p),
                    p.position(),
                ));
            }
            Ok(Value::Function { name, raw: Box::new(raw) })
        }
    }
}

/// `(args)` for `@include`/`@mixin`-content call sites, which need a
/// parsed argument list without a preceding function name.
pub(crate) fn paren_args(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<CallArg>> {
    if !p.literal("(") {
        return Ok(Vec::new());
    }
    if p.literal(")") {
        return Ok(Vec::new());
    }
    let args = arg_values(p)?;
    if !p.literal(")") {
        return Err(cascade_error::ParseError::unexpected_token(
            "`)`",
            found_description(p),
            p.position(),
        ));
    }
    Ok(args)
}

/// `argValues`: comma-separated `[name:]? expression [...]`.
fn arg_values(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<CallArg>> {
    let mut args = Vec::new();
    loop {
        args.push(arg_value(p)?);
        if !p.literal(",") {
            break;
        }
    }
    Ok(args)
}

fn arg_value(p: &mut Parser<'_>) -> cascade_error::ParseResult<CallArg> {
    let keyword = peek_keyword_arg(p);
    let value = super::expression(p)?;
    let splat = p.literal("...");
    Ok(CallArg { keyword, value, splat })
}

/// `$name: expr` inside an argument list. Only matches when followed by
/// `:` (not `::`), to avoid confusing it with a bare variable argument.
fn peek_keyword_arg(p: &mut Parser<'_>) -> Option<String> {
    let re = static_regex!(r"(?i)\A\$([a-zA-Z_][a-zA-Z0-9_\-]*)\s*:(?!:)");
    let mark = p.mark();
    let Some(caps) = p.match_re(re) else { return None };
    let Some(name) = caps.get(1) else {
        p.reset(mark);
        return None;
    };
    Some(name.as_str().to_string())
}

/// `(k: v, k: v, ...)` map literal vs. a plain parenthesized list. Called
/// once the opening `(` has already been consumed and at least one
/// lookahead pass has confirmed a `key:` pattern follows; returns `None`
/// to let the caller fall back to list parsing.
pub(crate) fn map_literal(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let mark = p.mark();
    let mut keys = Vec::new();
    let mut values = Vec::new();
    loop {
        let Some(key) = super::value(p)? else {
            p.reset(mark);
            return Ok(None);
        };
        if !p.literal(":") {
            p.reset(mark);
            return Ok(None);
        }
        let value = super::expression(p)?;
        keys.push(key);
        values.push(value);
        if !p.literal(",") {
            break;
        }
        if p.peek_literal(")") {
            break;
        }
    }
    Ok(Some(Value::Map { keys, values }))
}

/// `(a, b, c)` plain list literal once map parsing has been ruled out.
pub(crate) fn paren_list(p: &mut Parser<'_>) -> cascade_error::ParseResult<Value> {
    if p.peek_literal(")") {
        return Ok(Value::empty_list(ListSeparator::Space));
    }
    super::value_list(p)
}

/// Mixin/function parameter list: `($a, $b: default, $rest...)`.
pub(crate) fn arg_defs(p: &mut Parser<'_>) -> cascade_error::ParseResult<Vec<ArgDef>> {
    let mut defs = Vec::new();
    if p.peek_literal(")") {
        return Ok(defs);
    }
    loop {
        let name_re = static_regex!(r"(?i)\A\$([a-zA-Z_][a-zA-Z0-9_\-]*)");
        let Some(caps) = p.match_re(name_re) else {
            return Err(cascade_error::ParseError::unexpected_token(
                "a `$name` parameter",
                found_description(p),
                p.position(),
            ));
        };
        let name = caps.get(1).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string();
        let splat = p.literal("...");
        let default = if !splat && p.literal(":") { Some(super::expression(p)?) } else { None };
        defs.push(ArgDef { name, default, splat });
        if splat {
            if p.peek_literal(",") {
                return Err(cascade_error::ParseError::malformed_arg_list(p.position()));
            }
            break;
        }
        if !p.literal(",") {
            break;
        }
    }
    Ok(defs)
}
