//! Brace decisions.
//!
//! [`BraceAnalyzer`] answers two questions under a fixed [`BraceOptions`]:
//! does a controlled statement need to be a block, and, for a conditional,
//! do its `then` and `else` arms need to be blocks. Both are pure functions
//! of the tree and the options.
//!
//! Two flags carry context through the recursion:
//!
//! - `allow_if_else`: the statement is already known to be an `else` arm, so
//!   a bare nested if/else there is not forced by `NESTED_IF_ELSE`.
//! - `exclude_else`: the conditional is being inspected on behalf of the
//!   next link of its chain, so its own `else` arm is not re-derived.

use curly_ir::{Stmt, StmtArena, StmtId, StmtKind};

use crate::chain::{else_if_parent, unwrap_block};
use crate::stack::ensure_sufficient_stack;
use crate::BraceOptions;

/// Whether each arm of a conditional must be a block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct IfVerdict {
    pub then_branch: bool,
    pub else_branch: bool,
}

impl IfVerdict {
    /// Both arms must be braced.
    pub const BOTH: IfVerdict = IfVerdict {
        then_branch: true,
        else_branch: true,
    };

    /// Neither arm must be braced.
    pub const NONE: IfVerdict = IfVerdict {
        then_branch: false,
        else_branch: false,
    };

    /// Check if either arm must be braced.
    #[inline]
    pub const fn any(self) -> bool {
        self.then_branch || self.else_branch
    }
}

/// Decision engine over one statement tree.
#[derive(Copy, Clone, Debug)]
pub struct BraceAnalyzer<'a> {
    arena: &'a StmtArena,
    options: BraceOptions,
}

impl<'a> BraceAnalyzer<'a> {
    pub fn new(arena: &'a StmtArena, options: BraceOptions) -> Self {
        BraceAnalyzer { arena, options }
    }

    #[inline]
    pub fn arena(&self) -> &'a StmtArena {
        self.arena
    }

    #[inline]
    pub fn options(&self) -> BraceOptions {
        self.options
    }

    /// Check if `id`, used as a branch or loop body, must be a block.
    ///
    /// A block answers for its sole statement; a block holding zero or
    /// several statements always needs its braces. A missing statement needs
    /// nothing.
    pub fn needs_braces(&self, id: StmtId, allow_if_else: bool) -> bool {
        let Some(stmt) = self.arena.try_get_stmt(id) else {
            return false;
        };
        ensure_sufficient_stack(|| match stmt.kind {
            StmtKind::Block(range) => match *self.arena.get_stmt_list(range) {
                [only] => self.needs_braces(only, allow_if_else),
                _ => true,
            },
            StmtKind::If { else_branch, .. } => {
                if !allow_if_else && self.options.nested_if_else() && else_branch.is_some() {
                    return true;
                }
                self.options.braced_child() && self.if_needs_braces(id, false).any()
            }
            StmtKind::Iteration { body, .. } => {
                self.options.braced_child() && self.needs_braces(body, false)
            }
            StmtKind::Switch(_) => self.options.braced_child(),
            StmtKind::Other => false,
        })
    }

    /// Decide the `then` and `else` arms of the conditional `id`
    /// independently.
    ///
    /// Returns [`IfVerdict::NONE`] if `id` is not a conditional.
    pub fn if_needs_braces(&self, id: StmtId, exclude_else: bool) -> IfVerdict {
        let Some(&Stmt {
            kind:
                StmtKind::If {
                    then_branch,
                    else_branch,
                    ..
                },
            ..
        }) = self.arena.try_get_stmt(id)
        else {
            return IfVerdict::NONE;
        };
        let else_stmt = else_branch.map(|arm| arm.stmt);

        ensure_sufficient_stack(|| {
            if self.options.else_chain()
                && (else_stmt.is_some() || else_if_parent(self.arena, id).is_some())
            {
                return IfVerdict::BOTH;
            }

            if self.options.consistent() {
                if self.needs_braces(then_branch, false)
                    || (!exclude_else && else_stmt.is_some_and(|arm| self.needs_braces(arm, true)))
                {
                    return IfVerdict::BOTH;
                }
                // propagate backward along the chain
                if let Some(parent) = else_if_parent(self.arena, id) {
                    if self.if_needs_braces(parent, true).then_branch {
                        return IfVerdict::BOTH;
                    }
                }
            }

            match else_stmt {
                Some(arm) => IfVerdict {
                    then_branch: self.then_guards_else(then_branch),
                    else_branch: !exclude_else && self.needs_braces(arm, true),
                },
                None => IfVerdict {
                    then_branch: self.needs_braces(then_branch, false),
                    else_branch: false,
                },
            }
        })
    }

    /// Check if a `then` arm followed by `else` must keep its braces.
    ///
    /// True when the arm unwraps to a bare if without `else`, which would
    /// capture the outer `else` once unbraced, or to a block holding other
    /// than one statement.
    fn then_guards_else(&self, then_branch: StmtId) -> bool {
        let inner = unwrap_block(self.arena, then_branch);
        self.arena
            .try_get_stmt(inner)
            .is_some_and(|stmt| match stmt.kind {
                StmtKind::If { else_branch, .. } => else_branch.is_none(),
                StmtKind::Block(_) => true,
                StmtKind::Iteration { .. } | StmtKind::Switch(_) | StmtKind::Other => false,
            })
    }
}
