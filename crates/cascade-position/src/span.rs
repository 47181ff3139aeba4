//! Byte-offset position and source-tag types.
//!
//! The parser never needs UTF-16 or line/column positions while it runs —
//! only a monotonic byte cursor (spec.md §3, "Position"). Line/column
//! conversion happens once, lazily, when an error needs to be reported
//! (see [`crate::LineIndex`]).

use std::fmt;

/// A byte offset into a source buffer.
///
/// Always non-negative and, for a cursor in active use, within
/// `[0, len(buffer)]`.
pub type Position = usize;

/// Identifies which source file/buffer a [`SourceTag`] belongs to.
///
/// Opaque to the parser; the caller assigns and interprets these (spec.md
/// §6, "an opaque integer used to tag statements for later file-mapping").
pub type SourceIndex = u32;

/// `(sourceIndex, sourcePosition)` pair attached to every parsed statement,
/// per spec.md §3 ("Source Tag").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceTag {
    pub source_index: SourceIndex,
    pub position: Position,
}

impl SourceTag {
    #[inline]
    pub const fn new(source_index: SourceIndex, position: Position) -> Self {
        Self { source_index, position }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.source_index, self.position)
    }
}
