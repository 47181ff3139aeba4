//! Number and color literals (spec.md §4.3).

use cascade_ast::Value;

use crate::cursor::static_regex;
use crate::Parser;

/// `[0-9]*\.?[0-9]+` with an optional trailing `[%a-zA-Z]+` unit. Never
/// folds the unit away — `0` and `0px` stay distinct values.
pub(crate) fn number(p: &mut Parser<'_>) -> Option<Value> {
    let re = static_regex!(r"(?i)\A([0-9]*\.?[0-9]+)([%a-z]+)?");
    let mark = p.mark();
    let caps = p.match_re(re)?;
    let value: f64 = match caps.get(1).map(|m| m.as_str()).unwrap_or("0").parse() {
        Ok(v) => v,
        Err(_) => {
            p.reset(mark);
            return None;
        }
    };
    let unit = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some(Value::Number { value, unit })
}

/// `#RRGGBB` or `#RGB`; the 3-digit form expands each nibble to a full
/// byte via `(n << 4) | n`.
pub(crate) fn color(p: &mut Parser<'_>) -> Option<Value> {
    let re = static_regex!(r"(?i)\A#([0-9a-f]{6}|[0-9a-f]{3})\b");
    let caps = p.match_re(re)?;
    let digits = caps.get(1)?.as_str();
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    let (r, g, b) = if digits.len() == 6 {
        (channel(&digits[0..2]), channel(&digits[2..4]), channel(&digits[4..6]))
    } else {
        let expand = |c: char| {
            let n = c.to_digit(16).unwrap_or(0) as u8;
            (n << 4) | n
        };
        let mut chars = digits.chars();
        let r = expand(chars.next().unwrap_or('0'));
        let g = expand(chars.next().unwrap_or('0'));
        let b = expand(chars.next().unwrap_or('0'));
        (r, g, b)
    };
    Some(Value::Color { r, g, b })
}

/// Bare keyword, recognizing `null` specifically.
pub(crate) fn keyword(p: &mut Parser<'_>) -> Option<Value> {
    let re = static_regex!(r"(?i)\A[a-zA-Z_\-][a-zA-Z0-9_\-]*");
    let caps = p.match_re(re)?;
    let text = caps.get(0)?.as_str();
    if text.eq_ignore_ascii_case("null") {
        Some(Value::Null)
    } else {
        Some(Value::Keyword(text.to_string()))
    }
}

/// `$name`.
pub(crate) fn variable(p: &mut Parser<'_>) -> Option<Value> {
    let re = static_regex!(r"(?i)\A\$([a-zA-Z_][a-zA-Z0-9_\-]*)");
    let caps = p.match_re(re)?;
    Some(Value::Variable(caps.get(1)?.as_str().to_string()))
}
