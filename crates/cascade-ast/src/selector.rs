//! Selector tree (spec.md §4.5).
//!
//! A selector is whitespace-sensitive and assembled as a flat sequence of
//! parts rather than a nested tree — combinators are just another part in
//! the sequence, matching how the parser reads them (a loop over
//! `selectorSingle`, interleaved with combinator tokens).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Combinator between two compound selectors. Implicit descendant
/// combinator is the run of whitespace the parser consumed between two
/// parts with no explicit combinator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Combinator {
    Descendant,
    Child,
    Sibling,
    GeneralSibling,
}

/// One token making up the bracketed body of an attribute selector
/// (spec.md §4.5: "tokenized as whitespace, strings, keywords,
/// interpolations, and operator runs").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttrToken {
    Literal(String),
    Operator(String),
    String(Value),
    Interpolation(Value),
}

/// One element making up a pseudo-class's name, which may itself mix plain
/// words and interpolation (e.g. `:#{$state}-child`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PseudoNamePart {
    Word(String),
    Interpolation(Value),
}

/// One piece of a compound selector sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectorPart {
    /// `*`
    Universal,
    /// `&`
    Parent,
    /// `.`, `|`, `#`
    Literal(String),
    /// `\X`
    Escape(String),
    /// A numeric unit, e.g. the `100%` in a keyframes selector.
    Number { value: f64, unit: String },
    Bareword(String),
    Interpolation(Value),
    /// `%name` or `%#{$var}`.
    Placeholder(Vec<PseudoNamePart>),
    /// `::?name[(args)]`; `single_colon` distinguishes `:hover` from
    /// `::before`.
    PseudoClass {
        single_colon: bool,
        name: Vec<PseudoNamePart>,
        args: Option<Value>,
    },
    /// `[...]`
    Attribute(Vec<AttrToken>),
    Combinator(Combinator),
    /// `/regex/` vendor-specific selector token.
    VendorRegex(String),
}

/// A single compound/combinator chain, e.g. `&:hover .#{$cls}`.
pub type Selector = Vec<SelectorPart>;
