//! Statement/Chunk Dispatcher (spec.md §4.2): the top-level production
//! tried, in order, at every iteration of [`crate::Parser::parse`]'s
//! main loop.

use cascade_ast::{AssignFlag, BlockKind, Quote, StatementKind, StringPart, Value};

use crate::cursor::static_regex;
use crate::value;
use crate::{directives, selector};
use crate::Parser;

/// `parse_chunk()` (spec.md §4.2). Returns `Ok(false)` only when nothing
/// at the cursor matches any alternative; the caller (`Parser::parse`)
/// treats that as either end-of-document or a parse error depending on
/// whether the cursor actually reached EOF.
pub(crate) fn parse_chunk(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    if p.peek_literal("@") {
        tracing::trace!("trying @-directive dispatch");
        if directives::dispatch(p)? {
            return Ok(true);
        }
    }
    tracing::trace!("trying property shortcut");
    if try_property_shortcut(p)? {
        return Ok(true);
    }
    tracing::trace!("trying variable assignment");
    if try_variable_assignment(p)? {
        return Ok(true);
    }
    if p.literal("-->") {
        return Ok(true);
    }
    tracing::trace!("trying selector block");
    if try_selector_block(p)? {
        return Ok(true);
    }
    tracing::trace!("trying property or nested property");
    if try_property_or_nested(p)? {
        return Ok(true);
    }
    tracing::trace!("trying close block");
    if try_close_block(p)? {
        return Ok(true);
    }
    if p.literal(";") || p.literal("<!--") {
        return Ok(true);
    }
    Ok(false)
}

/// `end`: a statement may close on an explicit `;`, or simply on
/// lookahead to the enclosing block's `}` (or EOS at the document root).
fn statement_end(p: &mut Parser<'_>) -> bool {
    if p.literal(";") {
        return true;
    }
    p.peek_literal("}") || p.at_eof()
}

/// **Property shortcut** (spec.md §4.2, rule 2): `keyword ": " valueList
/// end`. The literal colon-then-space is deliberate — it's what tells
/// `color: red` apart from a pseudo-class selector like `a:hover`.
fn try_property_shortcut(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    let start = p.position();
    let mark = p.mark();
    let re = static_regex!(r"(?i)\A([a-zA-Z_\-][a-zA-Z0-9_\-]*): ");
    let Some(caps) = p.match_re_ws(re, false) else { return Ok(false) };
    let name = caps.get(1).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string();
    p.skip_whitespace();

    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    let target = Value::String { quote: Quote::Bare, parts: vec![StringPart::Literal(name)] };
    commit_assign(p, target, val, None, start);
    Ok(true)
}

/// **Variable assignment** (spec.md §4.2, rule 3): `$name : valueList
/// [!default|!global] end`.
fn try_variable_assignment(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    let start = p.position();
    let mark = p.mark();
    let name_re = static_regex!(r"(?i)\A\$([a-zA-Z_][a-zA-Z0-9_\-]*)");
    let Some(caps) = p.match_re(name_re) else { return Ok(false) };
    let name = caps.get(1).unwrap_or_else(|| unreachable!("regex matched")).as_str().to_string();
    if !p.literal(":") {
        p.reset(mark);
        return Ok(false);
    }

    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let flag = value::strip_assign_flag(p);
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    commit_assign(p, Value::Variable(name), val, flag, start);
    Ok(true)
}

/// **Selector + `{`** (spec.md §4.2, rule 5).
fn try_selector_block(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    let start = p.position();
    let mark = p.mark();
    let Ok(sels) = selector::selectors(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if sels.iter().all(Vec::is_empty) || !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    p.blocks.push_plain(sels, p.source_tag(start));
    Ok(true)
}

/// **Property or nested-property** (spec.md §4.2, rule 6). Parses a
/// (possibly interpolated) property name up to `:`, then tries a value
/// assignment; if that's immediately followed by `{` the nested-property
/// block is opened too (the combined form spec.md allows), and if the
/// value assignment doesn't parse at all, falls back to a bare
/// nested-property block.
fn try_property_or_nested(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    let start = p.position();
    let mark = p.mark();
    let Some(parts) = property_name_parts(p)? else { return Ok(false) };
    if !p.literal(":") {
        p.reset(mark);
        return Ok(false);
    }

    let value_mark = p.mark();
    if let Ok(val) = value::value_list(p) {
        let flag = value::strip_assign_flag(p);
        if p.literal(";") {
            commit_assign(p, Value::String { quote: Quote::Bare, parts: parts.clone() }, val, flag, start);
            return Ok(true);
        }
        if p.literal("{") {
            commit_assign(p, Value::String { quote: Quote::Bare, parts: parts.clone() }, val, flag, start);
            p.blocks.push_special(BlockKind::NestedProperty { prefix: parts }, p.source_tag(start));
            return Ok(true);
        }
        if p.peek_literal("}") || p.at_eof() {
            commit_assign(p, Value::String { quote: Quote::Bare, parts: parts.clone() }, val, flag, start);
            return Ok(true);
        }
    }
    p.reset(value_mark);

    if p.literal("{") {
        p.blocks.push_special(BlockKind::NestedProperty { prefix: parts }, p.source_tag(start));
        return Ok(true);
    }
    p.reset(mark);
    Ok(false)
}

/// Appends an `Assign` statement to the current block, flushing pending
/// comments first (spec.md §4.6).
fn commit_assign(p: &mut Parser<'_>, target: Value, value: Value, flag: Option<AssignFlag>, pos: usize) {
    let source = p.source_tag(pos);
    p.blocks.append_statement(StatementKind::Assign { target, value, flag }, source);
}

/// **`}`** (spec.md §4.2, rule 7): pops the current block and either
/// patches it into a pending `Include` statement, links it as an
/// `Else`/`ElseIf` case of the preceding `If`, or appends it plainly.
fn try_close_block(p: &mut Parser<'_>) -> cascade_error::ParseResult<bool> {
    if !p.literal("}") {
        return Ok(false);
    }
    let pos = p.position();
    let Some(popped) = p.blocks.pop() else {
        return Err(cascade_error::ParseError::stray_close_brace(pos));
    };
    let stmt_source = popped.source;

    if matches!(&popped.kind, Some(BlockKind::Else) | Some(BlockKind::ElseIf { .. })) {
        if !p.blocks.link_else_clause(popped) {
            return Err(cascade_error::ParseError::syntax_error(
                "`@else` without a matching `@if`",
                pos,
            ));
        }
        return Ok(true);
    }

    if let Some(BlockKind::Include { name, args }) = popped.kind {
        p.blocks.append_statement(
            StatementKind::Include { name, args, block: Some(popped.children) },
            stmt_source,
        );
        return Ok(true);
    }

    p.blocks.append_statement(StatementKind::Block(popped), stmt_source);
    Ok(true)
}

/// Property/nested-property name: a run of barewords and `#{}`
/// interpolations, terminated by (but not consuming) `:`.
fn property_name_parts(
    p: &mut Parser<'_>,
) -> cascade_error::ParseResult<Option<Vec<StringPart>>> {
    let mark = p.mark();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let word_re = static_regex!(r"\A[a-zA-Z0-9_\-]+");
    loop {
        if p.peek_literal("#{") {
            if !literal.is_empty() {
                parts.push(StringPart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(StringPart::Interpolation(Box::new(value::interpolation(p)?)));
            continue;
        }
        let Some(caps) = p.match_re_ws(word_re, false) else { break };
        literal.push_str(caps.get(0).unwrap_or_else(|| unreachable!("regex matched")).as_str());
    }
    if parts.is_empty() && literal.is_empty() {
        p.reset(mark);
        return Ok(None);
    }
    if !literal.is_empty() {
        parts.push(StringPart::Literal(literal));
    }
    Ok(Some(parts))
}
