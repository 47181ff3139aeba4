//! Error types for the cascade stylesheet parser.
//!
//! Parsing is fatal-on-error (spec.md §7): there is no recovery subsystem
//! here, no error budget, no partial-AST output. A parse either succeeds
//! or returns a single [`ParseError`] describing where it gave up.

use cascade_position::LineIndex;
use thiserror::Error;

/// The parse-error taxonomy from spec.md §7.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No production matched at the cursor and there's no single expected
    /// token to name (the general "nothing matched" case).
    #[error("{0}")]
    SyntaxError(String),

    /// The cursor reached end of input while a production still expected
    /// more text.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A specific token was expected at the cursor but something else was
    /// found.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// End of input reached with a block still open.
    #[error("unclosed block")]
    UnclosedBlock,

    /// `}` encountered at root level.
    #[error("unexpected closing brace")]
    StrayCloseBrace,

    /// `...` appeared somewhere other than the end of an argument
    /// definition list.
    #[error("`...` must be the last parameter in an argument list")]
    MalformedArgList,
}

/// A fatal parse error: a [`ParseErrorKind`] plus the byte position at
/// which it was raised (spec.md §4.8, `throwParseError(msg, pos)`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn syntax_error(message: impl Into<String>, position: usize) -> Self {
        Self::new(ParseErrorKind::SyntaxError(message.into()), position)
    }

    pub fn unexpected_eof(position: usize) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof, position)
    }

    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken { expected: expected.into(), found: found.into() },
            position,
        )
    }

    pub fn unclosed_block(position: usize) -> Self {
        Self::new(ParseErrorKind::UnclosedBlock, position)
    }

    pub fn stray_close_brace(position: usize) -> Self {
        Self::new(ParseErrorKind::StrayCloseBrace, position)
    }

    pub fn malformed_arg_list(position: usize) -> Self {
        Self::new(ParseErrorKind::MalformedArgList, position)
    }

    /// Render the full diagnostic: `{message}: failed at \`{snippet}\`
    /// {source_name} on line {n}` (spec.md §4.8).
    pub fn report(&self, source: &str, source_name: &str) -> String {
        let line_index = LineIndex::new(source);
        let line = line_index.line_number(self.position);
        let snippet = line_index.snippet(source, self.position);
        format!("{}: failed at `{}` {} on line {}", self.kind, snippet, source_name, line)
    }
}

/// Result alias used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;
