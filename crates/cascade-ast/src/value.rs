//! Value expression tree (spec.md §3, "Value").
//!
//! Values are produced by the value/expression parser and retained
//! unevaluated — arithmetic, color math, and string interpolation are an
//! evaluator's concern, not this crate's.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator used by a [`Value::List`].
///
/// `None` denotes an implicit/grouping list (no separator token was present
/// in the source, e.g. a single-element wrapper); `Space` and `Comma` are
/// the two separators a stylesheet author can actually write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListSeparator {
    None,
    Space,
    Comma,
}

/// Quote style of a [`Value::String`]. `Bare` means an unquoted composite
/// (e.g. a property name built from interpolated parts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quote {
    Bare,
    Single,
    Double,
}

/// One piece of a (possibly interpolated) string body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StringPart {
    Literal(String),
    Interpolation(Box<Value>),
}

/// Binary expression operator, ordered here by the precedence table in
/// spec.md §4.3 (lowest first). [`BinaryOp::precedence`] returns the table
/// value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Assign,
    Or,
    And,
    Eq,
    Ne,
    Cmp,
    Le,
    Ge,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Precedence per the fixed table in spec.md §4.3.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Assign => 0,
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Cmp => 3,
            BinaryOp::Le | BinaryOp::Ge | BinaryOp::Lt | BinaryOp::Gt => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 6,
        }
    }

    /// The literal spelling of this operator as it appears in source, used
    /// both by the expression parser (to peek an operator token) and by
    /// diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::Or => "or",
            BinaryOp::And => "and",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Cmp => "<=>",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

/// Unary operator: `not`, `+`, `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Not,
    Plus,
    Minus,
}

/// One positional or keyword argument to a [`Value::FunctionCall`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallArg {
    pub keyword: Option<String>,
    pub value: Value,
    /// Trailing `...` spread marker.
    pub splat: bool,
}

/// One parameter in a mixin/function parameter list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArgDef {
    pub name: String,
    pub default: Option<Value>,
    pub splat: bool,
}

/// A parsed, unevaluated stylesheet value (spec.md §3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Null,
    Keyword(String),
    Variable(String),
    /// `unit` is empty, `%`, or an alphabetic unit; never collapsed away —
    /// `0` and `0px` are distinct values (spec.md §9).
    Number { value: f64, unit: String },
    /// 8-bit channels, expanded from either a 3- or 6-hex-digit literal.
    Color { r: u8, g: u8, b: u8 },
    String { quote: Quote, parts: Vec<StringPart> },
    /// `#{...}`; the two flags record whether source whitespace was
    /// adjacent, needed by later selector/value concatenation.
    Interpolate { value: Box<Value>, left_ws: bool, right_ws: bool },
    List { separator: ListSeparator, items: Vec<Value> },
    /// Parallel `keys`/`values`, same length, insertion order preserved.
    Map { keys: Vec<Value>, values: Vec<Value> },
    Expression {
        op: BinaryOp,
        lhs: Box<Value>,
        rhs: Box<Value>,
        in_parens: bool,
        ws_before: bool,
        ws_after: bool,
    },
    Unary { op: UnaryOp, operand: Box<Value>, in_parens: bool },
    FunctionCall { name: String, args: Vec<CallArg> },
    /// `alpha(...)`, `calc(...)`, `-vendor-calc(...)`, `expression(...)`:
    /// raw argument text preserved verbatim rather than re-parsed as
    /// arithmetic (spec.md §4.3).
    Function { name: String, raw: Box<Value> },
}

impl Value {
    /// Shorthand for an empty space/comma list, used by the map-vs-list
    /// disambiguation in the expression parser and by tests.
    pub fn empty_list(separator: ListSeparator) -> Self {
        Value::List { separator, items: Vec::new() }
    }
}
