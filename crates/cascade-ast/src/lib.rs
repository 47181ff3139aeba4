//! AST definitions for the cascade stylesheet parser.
//!
//! Three families of types, mirroring the data model the parser builds:
//! - [`value`]: the expression/value tree (numbers, colors, lists, maps, …).
//! - [`selector`]: the flat selector-part sequence.
//! - [`block`] / [`statement`]: the document tree itself.

pub mod block;
pub mod selector;
pub mod statement;
pub mod value;

pub use block::{Block, BlockKind};
pub use selector::{AttrToken, Combinator, PseudoNamePart, Selector, SelectorPart};
pub use statement::{AssignFlag, Statement, StatementKind};
pub use value::{ArgDef, BinaryOp, CallArg, ListSeparator, Quote, StringPart, UnaryOp, Value};
