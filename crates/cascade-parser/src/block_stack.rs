//! Block Stack (spec.md §4.6).
//!
//! A parse-time stack of scopes, each carrying a pending-comment buffer
//! that is seeded from its parent on push and migrated back to the
//! parent on pop (spec.md §4.6, comment attachment rule). The parent
//! link lives only in this stack's own `Vec` ordering — the `Block`
//! values handed back to callers never carry one (spec.md §9).

use cascade_ast::{Block, BlockKind, Selector, Statement, StatementKind};
use cascade_position::{SourceIndex, SourceTag};

struct Env {
    block: Block,
    /// `None` only for the root entry.
    has_parent: bool,
    pending_comments: Vec<(SourceTag, String)>,
}

pub(crate) struct BlockStack {
    envs: Vec<Env>,
}

impl BlockStack {
    pub(crate) fn new() -> Self {
        Self { envs: Vec::new() }
    }

    pub(crate) fn push_root(&mut self, pos: usize, source_index: SourceIndex) {
        self.envs.push(Env {
            block: Block::new_root(SourceTag::new(source_index, pos)),
            has_parent: false,
            pending_comments: Vec::new(),
        });
    }

    fn push(&mut self, block: Block) {
        let pending = self
            .envs
            .last_mut()
            .map(|env| std::mem::take(&mut env.pending_comments))
            .unwrap_or_default();
        self.envs.push(Env { block, has_parent: true, pending_comments: pending });
    }

    pub(crate) fn push_plain(&mut self, selectors: Vec<Selector>, source: SourceTag) {
        self.push(Block::new_rule(selectors, source));
    }

    pub(crate) fn push_special(&mut self, kind: BlockKind, source: SourceTag) {
        self.push(Block::new_special(kind, source));
    }

    pub(crate) fn push_pending_comment(&mut self, source: SourceTag, text: String) {
        if let Some(env) = self.envs.last_mut() {
            env.pending_comments.push((source, text));
        }
    }

    /// Flush the current scope's pending comments into its own children,
    /// immediately before appending `kind` (spec.md §4.6: prefix and
    /// between-children attachment both reduce to "flush, then append").
    pub(crate) fn append_statement(&mut self, kind: StatementKind, source: SourceTag) {
        self.flush_pending();
        if let Some(env) = self.envs.last_mut() {
            env.block.children.push(Statement::new(source, kind));
        }
    }

    fn flush_pending(&mut self) {
        let Some(env) = self.envs.last_mut() else { return };
        let pending = std::mem::take(&mut env.pending_comments);
        for (source, text) in pending {
            env.block.children.push(Statement::new(source, StatementKind::Comment(text)));
        }
    }

    /// `pop()`: fails (returns `None`) on a stray `}` at root level.
    /// Trailing pending comments migrate to the new top of stack rather
    /// than being flushed into the popped block's own children.
    pub(crate) fn pop(&mut self) -> Option<Block> {
        let top_has_parent = self.envs.last().map(|env| env.has_parent).unwrap_or(false);
        if !top_has_parent {
            return None;
        }
        let popped = self.envs.pop()?;
        if let Some(parent) = self.envs.last_mut() {
            parent.pending_comments.extend(popped.pending_comments);
        }
        Some(popped.block)
    }

    pub(crate) fn has_open_block(&self) -> bool {
        self.envs.len() > 1
    }

    pub(crate) fn current_kind(&self) -> Option<&BlockKind> {
        self.envs.last().and_then(|env| env.block.kind.as_ref())
    }

    pub(crate) fn current_selectors(&self) -> Option<&[Selector]> {
        self.envs.last().and_then(|env| env.block.selectors.as_deref())
    }

    /// Attempts to link an `@else`/`@else if` clause into the `cases` of
    /// the most recently appended statement, if (and only if) that
    /// statement is an `If` block (spec.md §4.2, rule 1: `@else`/`@else
    /// if` are only valid immediately after an `@if` at the current
    /// block's tail).
    pub(crate) fn link_else_clause(&mut self, clause: Block) -> bool {
        let Some(env) = self.envs.last_mut() else { return false };
        match env.block.children.last_mut() {
            Some(Statement {
                kind: StatementKind::Block(Block { kind: Some(BlockKind::If { cases, .. }), .. }),
                ..
            }) => {
                cases.push(clause);
                true
            }
            _ => false,
        }
    }

    /// Finish the document: flush any comments still pending on the root
    /// (there is no outer scope left to migrate them to) and return it.
    pub(crate) fn finish_root(&mut self) -> Block {
        self.flush_pending();
        self.envs
            .pop()
            .map(|env| env.block)
            .unwrap_or_else(|| Block::new_root(SourceTag::new(0, 0)))
    }
}
