//! `@`-directive dispatch (spec.md §4.2, rule 1).
//!
//! One sub-parser per recognized directive keyword, tried in the order
//! spec.md lists them; a bare `@name ...{` with no recognized keyword
//! falls back to a generic [`cascade_ast::BlockKind::Directive`].

use cascade_ast::{BlockKind, StatementKind, Value};

use crate::cursor::static_regex;
use crate::value;
use crate::Parser;

type Dispatched = cascade_error::ParseResult<bool>;

/// Tries each recognized directive keyword in turn; `true` means one
/// committed (consuming input and appending/opening a block). Directive
/// keywords are matched case-insensitively (spec.md §9's general rule
/// for directive names, taken over the literal vocabulary table's
/// "case-sensitive" wording in spec.md §4.2 — see DESIGN.md).
pub(crate) fn dispatch(p: &mut Parser<'_>) -> Dispatched {
    if at_root(p)? {
        return Ok(true);
    }
    if media(p)? {
        return Ok(true);
    }
    if mixin(p)? {
        return Ok(true);
    }
    if include(p)? {
        return Ok(true);
    }
    if scssphp_import_once(p)? {
        return Ok(true);
    }
    if import(p)? {
        return Ok(true);
    }
    if extend(p)? {
        return Ok(true);
    }
    if function(p)? {
        return Ok(true);
    }
    if simple_control(p, "break", StatementKind::Break)? {
        return Ok(true);
    }
    if simple_control(p, "continue", StatementKind::Continue)? {
        return Ok(true);
    }
    if value_directive(p, "return", StatementKind::Return as fn(Value) -> StatementKind)? {
        return Ok(true);
    }
    if each(p)? {
        return Ok(true);
    }
    if while_directive(p)? {
        return Ok(true);
    }
    if for_directive(p)? {
        return Ok(true);
    }
    if if_directive(p)? {
        return Ok(true);
    }
    if value_directive(p, "debug", StatementKind::Debug as fn(Value) -> StatementKind)? {
        return Ok(true);
    }
    if value_directive(p, "warn", StatementKind::Warn as fn(Value) -> StatementKind)? {
        return Ok(true);
    }
    if value_directive(p, "error", StatementKind::Error as fn(Value) -> StatementKind)? {
        return Ok(true);
    }
    if simple_control(p, "content", StatementKind::MixinContent)? {
        return Ok(true);
    }
    if else_clause(p)? {
        return Ok(true);
    }
    if charset(p)? {
        return Ok(true);
    }
    generic_directive(p)
}

fn statement_end(p: &mut Parser<'_>) -> bool {
    if p.literal(";") {
        return true;
    }
    p.peek_literal("}") || p.at_eof()
}

fn identifier(p: &mut Parser<'_>) -> Option<String> {
    let re = static_regex!(r"(?i)\A[a-zA-Z_\-][a-zA-Z0-9_\-]*");
    let caps = p.match_re(re)?;
    Some(caps.get(0)?.as_str().to_string())
}

fn variable_name(p: &mut Parser<'_>) -> Option<String> {
    let re = static_regex!(r"(?i)\A\$([a-zA-Z_][a-zA-Z0-9_\-]*)");
    let caps = p.match_re(re)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// `@break`/`@continue`/`@content`: a bare keyword directive, no value.
fn simple_control(p: &mut Parser<'_>, word: &str, kind: StatementKind) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, word) {
        return Ok(false);
    }
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    append(p, kind, start);
    Ok(true)
}

/// `@return`/`@debug`/`@warn`/`@error`: keyword followed by one value.
fn value_directive(p: &mut Parser<'_>, word: &str, build: fn(Value) -> StatementKind) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, word) {
        return Ok(false);
    }
    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    append(p, build(val), start);
    Ok(true)
}

/// Matches `@word` followed by a mandatory word boundary.
fn at_keyword(p: &mut Parser<'_>, word: &str) -> bool {
    let mark = p.mark();
    if !p.literal("@") {
        return false;
    }
    let Some(caps) = p.match_re(regex_for_word(word)) else {
        p.reset(mark);
        return false;
    };
    let _ = caps;
    true
}

fn regex_for_word(word: &str) -> &'static regex::Regex {
    match word {
        "at-root" => static_regex!(r"(?i)\Aat-root\b"),
        "media" => static_regex!(r"(?i)\Amedia\b"),
        "mixin" => static_regex!(r"(?i)\Amixin\b"),
        "include" => static_regex!(r"(?i)\Ainclude\b"),
        "scssphp-import-once" => static_regex!(r"(?i)\Ascssphp-import-once\b"),
        "import" => static_regex!(r"(?i)\Aimport\b"),
        "extend" => static_regex!(r"(?i)\Aextend\b"),
        "function" => static_regex!(r"(?i)\Afunction\b"),
        "break" => static_regex!(r"(?i)\Abreak\b"),
        "continue" => static_regex!(r"(?i)\Acontinue\b"),
        "return" => static_regex!(r"(?i)\Areturn\b"),
        "each" => static_regex!(r"(?i)\Aeach\b"),
        "while" => static_regex!(r"(?i)\Awhile\b"),
        "for" => static_regex!(r"(?i)\Afor\b"),
        "if" => static_regex!(r"(?i)\Aif\b"),
        "debug" => static_regex!(r"(?i)\Adebug\b"),
        "warn" => static_regex!(r"(?i)\Awarn\b"),
        "error" => static_regex!(r"(?i)\Aerror\b"),
        "content" => static_regex!(r"(?i)\Acontent\b"),
        "charset" => static_regex!(r"(?i)\Acharset\b"),
        _ => unreachable!("directive word table is exhaustive over call sites"),
    }
}

fn push_block(p: &mut Parser<'_>, kind: BlockKind, start: usize) {
    let source = p.source_tag(start);
    p.blocks.push_special(kind, source);
}

fn append(p: &mut Parser<'_>, kind: StatementKind, start: usize) {
    let source = p.source_tag(start);
    p.blocks.append_statement(kind, source);
}

/// `@at-root [selector] [(with: ...)] { ... }`.
fn at_root(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "at-root") {
        return Ok(false);
    }
    let selector = if p.peek_literal("(") || p.peek_literal("{") {
        None
    } else if let Ok(Some(v)) = value::value(p) {
        Some(v)
    } else {
        None
    };
    let with = if p.literal("(") {
        let Ok(v) = value::value_list(p) else {
            p.reset(mark);
            return Ok(false);
        };
        if !p.literal(")") {
            p.reset(mark);
            return Ok(false);
        }
        Some(v)
    } else {
        None
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::AtRoot { selector, with }, start);
    Ok(true)
}

/// `@media query-list { ... }`.
fn media(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "media") {
        return Ok(false);
    }
    let Ok(query_list) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Media { query_list }, start);
    Ok(true)
}

/// `@mixin name(args)? { ... }`.
fn mixin(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "mixin") {
        return Ok(false);
    }
    let Some(name) = identifier(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let args = if p.literal("(") {
        let Ok(defs) = value::arg_defs(p) else {
            p.reset(mark);
            return Ok(false);
        };
        if !p.literal(")") {
            p.reset(mark);
            return Ok(false);
        }
        defs
    } else {
        Vec::new()
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Mixin { name, args }, start);
    Ok(true)
}

/// `@function name(args) { ... }`.
fn function(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "function") {
        return Ok(false);
    }
    let Some(name) = identifier(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("(") {
        p.reset(mark);
        return Ok(false);
    }
    let Ok(args) = value::arg_defs(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal(")") || !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Function { name, args }, start);
    Ok(true)
}

/// `@include name(args)? { ... }` or `@include name(args)? ;`. The block
/// form's children are patched into the pending `Include` statement on
/// `}` (spec.md §4.2, rule 7).
fn include(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "include") {
        return Ok(false);
    }
    let Some(name) = identifier(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let Ok(args) = value::paren_args(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if p.literal("{") {
        push_block(p, BlockKind::Include { name, args }, start);
        return Ok(true);
    }
    if statement_end(p) {
        append(p, StatementKind::Include { name, args, block: None }, start);
        return Ok(true);
    }
    p.reset(mark);
    Ok(false)
}

fn scssphp_import_once(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "scssphp-import-once") {
        return Ok(false);
    }
    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    append(p, StatementKind::ScssphpImportOnce(val), start);
    Ok(true)
}

/// `@import valueList end`. The value parser already accepts both quoted
/// paths and `url(...)` calls, so a single production covers the
/// bare-`url()` fallback spec.md §9 mentions as a separate form.
fn import(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "import") {
        return Ok(false);
    }
    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    append(p, StatementKind::Import(val), start);
    Ok(true)
}

fn extend(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "extend") {
        return Ok(false);
    }
    let Ok(sels) = crate::selector::selectors(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    append(p, StatementKind::Extend(sels), start);
    Ok(true)
}

/// `@each $a [, $b]* in list { ... }`.
fn each(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "each") {
        return Ok(false);
    }
    let mut vars = Vec::new();
    let Some(first) = variable_name(p) else {
        p.reset(mark);
        return Ok(false);
    };
    vars.push(first);
    while p.literal(",") {
        let Some(v) = variable_name(p) else {
            p.reset(mark);
            return Ok(false);
        };
        vars.push(v);
    }
    if !in_keyword(p) {
        p.reset(mark);
        return Ok(false);
    }
    let Ok(list) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Each { vars, list }, start);
    Ok(true)
}

fn in_keyword(p: &mut Parser<'_>) -> bool {
    let re = static_regex!(r"(?i)\Ain\b");
    p.match_re(re).is_some()
}

/// `@while cond { ... }`.
fn while_directive(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "while") {
        return Ok(false);
    }
    let Ok(cond) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::While { cond }, start);
    Ok(true)
}

/// `@for $var from start (to|through) end { ... }`.
fn for_directive(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "for") {
        return Ok(false);
    }
    let Some(var) = variable_name(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let from_re = static_regex!(r"(?i)\Afrom\b");
    if p.match_re(from_re).is_none() {
        p.reset(mark);
        return Ok(false);
    }
    let Ok(from) = value::expression(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let to_re = static_regex!(r"(?i)\Ato\b");
    let through_re = static_regex!(r"(?i)\Athrough\b");
    let until = if p.match_re(to_re).is_some() {
        true
    } else if p.match_re(through_re).is_some() {
        false
    } else {
        p.reset(mark);
        return Ok(false);
    };
    let Ok(end) = value::expression(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::For { var, start: from, end, until }, start);
    Ok(true)
}

/// `@if cond { ... }`.
fn if_directive(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !at_keyword(p, "if") {
        return Ok(false);
    }
    let Ok(cond) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::If { cond, cases: Vec::new() }, start);
    Ok(true)
}

/// `@else { ... }` or `@else if cond { ... }`. Valid only immediately
/// after an `@if`/`@else if` at the current block's tail; that
/// constraint is enforced at `}` time by
/// [`crate::BlockStack::link_else_clause`], not here.
fn else_clause(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    let re = static_regex!(r"(?i)\Aelse\b");
    if !p.literal("@") {
        return Ok(false);
    }
    if p.match_re(re).is_none() {
        p.reset(mark);
        return Ok(false);
    }
    let if_re = static_regex!(r"(?i)\Aif\b");
    if p.match_re(if_re).is_some() {
        let Ok(cond) = value::value_list(p) else {
            p.reset(mark);
            return Ok(false);
        };
        if !p.literal("{") {
            p.reset(mark);
            return Ok(false);
        }
        push_block(p, BlockKind::ElseIf { cond }, start);
        return Ok(true);
    }
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Else, start);
    Ok(true)
}

/// `@charset valueList end`. Retained once: stashed on the parser and
/// hoisted to the front of root's children at parse end; later
/// occurrences are parsed (so they still consume input correctly) but
/// discarded.
fn charset(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    if !at_keyword(p, "charset") {
        return Ok(false);
    }
    let Ok(val) = value::value_list(p) else {
        p.reset(mark);
        return Ok(false);
    };
    if !statement_end(p) {
        p.reset(mark);
        return Ok(false);
    }
    p.record_charset(val);
    Ok(true)
}

/// Bare `@name ...{ ... }` with no recognized keyword: a generic
/// directive block. Spec.md §4.2, rule 1: fails (rather than falling
/// through further) if no `{` follows.
fn generic_directive(p: &mut Parser<'_>) -> Dispatched {
    let mark = p.mark();
    let start = p.position();
    if !p.literal("@") {
        return Ok(false);
    }
    let Some(name) = identifier(p) else {
        p.reset(mark);
        return Ok(false);
    };
    let value = if p.peek_literal("{") { None } else { value::value_list(p).ok() };
    if !p.literal("{") {
        p.reset(mark);
        return Ok(false);
    }
    push_block(p, BlockKind::Directive { name, value }, start);
    Ok(true)
}
