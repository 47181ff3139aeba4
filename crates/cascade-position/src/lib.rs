//! Byte-offset position tracking for the cascade parser.
//!
//! Leaf crate: no dependency on `cascade-ast` or `cascade-error`, so both of
//! those (and the parser crate) can depend on this without a cycle.

mod line_index;
mod span;

pub use line_index::LineIndex;
pub use span::{Position, SourceIndex, SourceTag};
