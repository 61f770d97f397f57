//! Statement nodes.
//!
//! Only the distinctions the brace checker decides on are modeled: blocks,
//! conditionals, loops, and `switch`. Everything else collapses into
//! [`StmtKind::Other`]. Children are [`StmtId`] indices into the owning
//! [`StmtArena`](crate::StmtArena).

use std::fmt;

use crate::{Span, StmtId, StmtRange};

/// The kind of loop an [`StmtKind::Iteration`] node came from.
///
/// Brace decisions never depend on it; fix layout and tracing do.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopKind {
    /// `while (cond) body`
    While,
    /// `do body while (cond);`
    DoWhile,
    /// `for (...) body`
    For,
}

impl LoopKind {
    /// Keyword that introduces this loop.
    pub const fn keyword(self) -> &'static str {
        match self {
            LoopKind::While => "while",
            LoopKind::DoWhile => "do",
            LoopKind::For => "for",
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The `else` arm of a conditional.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseBranch {
    /// Span of the `else` keyword itself.
    pub keyword: Span,
    /// The statement controlled by `else`.
    pub stmt: StmtId,
}

impl ElseBranch {
    #[inline]
    pub const fn new(keyword: Span, stmt: StmtId) -> Self {
        ElseBranch { keyword, stmt }
    }
}

/// Statement kind.
///
/// Closed on purpose: every decision point matches exhaustively, so adding a
/// kind forces a review of each of them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `{ stmts }`. The span covers both delimiters (except for a root
    /// block, which has none).
    Block(StmtRange),

    /// `if (cond) then_branch [else else_branch]`
    If {
        /// Span of the parenthesized condition.
        cond: Span,
        then_branch: StmtId,
        else_branch: Option<ElseBranch>,
    },

    /// `while`, `do ... while`, or `for` with its controlled body.
    Iteration { kind: LoopKind, body: StmtId },

    /// `switch (...) { ... }` with the statements of every case body, in
    /// source order. Case labels are not statements, and a switch is never
    /// unwrapped like a block.
    Switch(StmtRange),

    /// Any other statement.
    Other,
}

/// A statement node: kind plus source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Check if this statement is a block.
    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(self.kind, StmtKind::Block(_))
    }

    /// Check if this statement is a conditional.
    #[inline]
    pub const fn is_if(&self) -> bool {
        matches!(self.kind, StmtKind::If { .. })
    }

    /// Span of the `do` keyword if this is a `do ... while` loop.
    ///
    /// A loop's span starts at its keyword, and in a `do` loop the body
    /// follows the keyword directly.
    #[inline]
    pub const fn do_keyword(&self) -> Option<Span> {
        match self.kind {
            StmtKind::Iteration {
                kind: LoopKind::DoWhile,
                ..
            } => {
                let start = self.span.start;
                Some(Span::new(start, start.saturating_add(2)))
            }
            StmtKind::Block(_)
            | StmtKind::If { .. }
            | StmtKind::Iteration { .. }
            | StmtKind::Switch(_)
            | StmtKind::Other => None,
        }
    }
}
