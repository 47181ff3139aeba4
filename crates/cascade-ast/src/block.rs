//! Block nodes (spec.md §3, "Block"/"BlockKind").
//!
//! A block's parent up-link is parse-time-only scaffolding (spec.md §9:
//! "not retained in the final tree — clear on pop"); the parser crate
//! tracks it with its own block-stack arena, so the tree here is a pure
//! tree with no back-references.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cascade_position::SourceTag;

use crate::selector::Selector;
use crate::statement::Statement;
use crate::value::{ArgDef, CallArg, StringPart, Value};

/// The semantic role of a [`Block`], determining which extra fields it
/// carries. `None` (a plain rule block) is represented by `Block::kind`
/// being `None` rather than a variant here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockKind {
    AtRoot { selector: Option<Value>, with: Option<Value> },
    Media { query_list: Value },
    Mixin { name: String, args: Vec<ArgDef> },
    /// Holds just enough to build the pending `Include` statement that
    /// this block's children will be patched into on close (spec.md
    /// §4.2, rule 7).
    Include { name: String, args: Vec<CallArg> },
    Function { name: String, args: Vec<ArgDef> },
    Each { vars: Vec<String>, list: Value },
    While { cond: Value },
    /// `until`: true for exclusive `to`, false for inclusive `through`.
    For { var: String, start: Value, end: Value, until: bool },
    /// `cases` holds the linked `Else`/`ElseIf` blocks; they are never
    /// appended as siblings of the `If` block (spec.md §3).
    If { cond: Value, cases: Vec<Block> },
    Else,
    ElseIf { cond: Value },
    NestedProperty { prefix: Vec<StringPart> },
    Directive { name: String, value: Option<Value> },
}

/// A parse-time scope: either the document root, a plain selector-headed
/// rule, or one of [`BlockKind`]'s special forms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// `None` for a plain rule block.
    pub kind: Option<BlockKind>,
    /// Only populated for plain rule blocks.
    pub selectors: Option<Vec<Selector>>,
    pub children: Vec<Statement>,
    pub source: SourceTag,
    pub is_root: bool,
}

impl Block {
    pub fn new_root(source: SourceTag) -> Self {
        Self { kind: None, selectors: None, children: Vec::new(), source, is_root: true }
    }

    pub fn new_rule(selectors: Vec<Selector>, source: SourceTag) -> Self {
        Self { kind: None, selectors: Some(selectors), children: Vec::new(), source, is_root: false }
    }

    pub fn new_special(kind: BlockKind, source: SourceTag) -> Self {
        Self { kind: Some(kind), selectors: None, children: Vec::new(), source, is_root: false }
    }
}
