//! Precedence-climbing binary/unary expression parsing (spec.md §4.5).

use cascade_ast::{BinaryOp, UnaryOp, Value};

use crate::cursor::static_regex;
use crate::Parser;

const OPERATORS: &[(&str, BinaryOp)] = &[
    ("==", BinaryOp::Eq),
    ("!=", BinaryOp::Ne),
    ("<=>", BinaryOp::Cmp),
    ("<=", BinaryOp::Le),
    (">=", BinaryOp::Ge),
    ("<", BinaryOp::Lt),
    (">", BinaryOp::Gt),
    ("+", BinaryOp::Add),
    ("-", BinaryOp::Sub),
    ("*", BinaryOp::Mul),
    ("/", BinaryOp::Div),
    ("%", BinaryOp::Rem),
    ("=", BinaryOp::Assign),
];

/// Peek the operator (if any) at the cursor. `and`/`or` need a word
/// boundary; the symbolic operators are matched longest-first so `<=>`
/// isn't swallowed as `<=` plus a dangling `>`, and `==` isn't swallowed
/// as two `=` assignments.
fn peek_operator(p: &Parser<'_>) -> Option<(BinaryOp, usize)> {
    let word_re = static_regex!(r"(?i)\A(and|or)\b");
    if let Some(caps) = word_re.captures(p.rest()) {
        let m = caps.get(0).unwrap_or_else(|| unreachable!("regex matched"));
        let op = if m.as_str().eq_ignore_ascii_case("and") { BinaryOp::And } else { BinaryOp::Or };
        return Some((op, m.as_str().len()));
    }
    for (text, op) in OPERATORS {
        if p.rest().starts_with(text) {
            return Some((*op, text.len()));
        }
    }
    None
}

/// `exp_helper(lhs, minPrecedence)` (spec.md §4.5): classic precedence
/// climbing. Consumes operators with precedence `>= min_precedence`,
/// recursing on the right-hand side whenever the next operator binds
/// tighter than the one just consumed.
pub(crate) fn exp_helper(
    p: &mut Parser<'_>,
    mut lhs: Value,
    min_precedence: u8,
) -> cascade_error::ParseResult<Value> {
    loop {
        let saved_eat_ws = p.set_eat_ws(false);
        let ws_before = p.skip_whitespace();

        let Some((op, len)) = peek_operator(p) else {
            p.set_eat_ws(saved_eat_ws);
            return Ok(lhs);
        };
        if op.precedence() < min_precedence {
            p.set_eat_ws(saved_eat_ws);
            return Ok(lhs);
        }
        p.advance_raw(len);
        let ws_after = p.skip_whitespace();
        p.set_eat_ws(saved_eat_ws);

        let mut rhs = super::value(p)?.ok_or_else(|| {
            cascade_error::ParseError::syntax_error(
                "expected a value after operator",
                p.position(),
            )
        })?;

        loop {
            let mark = p.mark();
            let saved_inner = p.set_eat_ws(false);
            p.skip_whitespace();
            let next = peek_operator(p);
            p.set_eat_ws(saved_inner);
            p.reset(mark);
            let Some((next_op, _)) = next else { break };
            if next_op.precedence() <= op.precedence() {
                break;
            }
            rhs = exp_helper(p, rhs, op.precedence() + 1)?;
        }

        lhs = Value::Expression {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            in_parens: p.in_parens(),
            ws_before,
            ws_after,
        };
    }
}

/// Unary `+`/`-`/`not`, tried by `value()`'s dispatch before any other
/// alternative (spec.md §4.3).
pub(crate) fn unary(p: &mut Parser<'_>) -> cascade_error::ParseResult<Option<Value>> {
    let not_re = static_regex!(r"(?i)\Anot\b");
    if not_re.is_match(p.rest()) {
        let mark = p.mark();
        p.match_re(not_re);
        if let Some(operand) = super::value(p)? {
            return Ok(Some(Value::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
                in_parens: p.in_parens(),
            }));
        }
        p.reset(mark);
    }

    if p.peek_literal("+") {
        let mark = p.mark();
        p.advance_raw(1);
        if looks_like_operand_start(p) {
            if let Some(operand) = super::value(p)? {
                return Ok(Some(Value::Unary {
                    op: UnaryOp::Plus,
                    operand: Box::new(operand),
                    in_parens: p.in_parens(),
                }));
            }
        }
        p.reset(mark);
    }

    if p.peek_literal("-") {
        let mark = p.mark();
        p.advance_raw(1);
        let no_ws_after = !p.rest().starts_with(|c: char| c.is_whitespace());
        if no_ws_after && looks_like_operand_start(p) {
            if let Some(operand) = super::value(p)? {
                return Ok(Some(Value::Unary {
                    op: UnaryOp::Minus,
                    operand: Box::new(operand),
                    in_parens: p.in_parens(),
                }));
            }
        }
        p.reset(mark);
    }

    Ok(None)
}

/// A unary `-`/`+` only binds as a prefix when immediately followed by a
/// variable, a number, or `(`; otherwise the character is left alone for
/// the binary-operator scan (spec.md §4.5, `-` disambiguation).
fn looks_like_operand_start(p: &Parser<'_>) -> bool {
    let rest = p.rest();
    rest.starts_with('$')
        || rest.starts_with('(')
        || rest.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.')
}
