//! Arena allocation for the statement tree.
//!
//! The arena exclusively owns every [`Stmt`]. Children are referenced by
//! [`StmtId`] and parents are recorded in a side table, filled in as each
//! parent is allocated. Nodes are allocated bottom-up (children before their
//! parent), which is the order a recursive-descent parser produces them in.

use std::fmt;

use crate::{Stmt, StmtId, StmtKind, StmtRange};

/// Contiguous storage for all statements of one source file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StmtArena {
    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,

    /// Flattened block contents and switch case bodies.
    stmt_lists: Vec<StmtId>,

    /// Parent of each statement (parallel to `stmts`). Lookup-only.
    parents: Vec<Option<StmtId>>,
}

impl StmtArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 statement per 16 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 16;
        StmtArena {
            stmts: Vec::with_capacity(estimated),
            stmt_lists: Vec::with_capacity(estimated),
            parents: Vec::with_capacity(estimated),
        }
    }

    /// Allocate a statement and return its ID.
    ///
    /// Every child referenced by `stmt` must already be allocated; the child's
    /// parent entry is set to the new ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` statements.
    #[track_caller]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let Ok(raw) = u32::try_from(self.stmts.len()) else {
            panic!("statement arena overflow: more than u32::MAX statements");
        };
        let id = StmtId::new(raw);
        self.stmts.push(stmt);
        self.parents.push(None);

        let (list, first, second) = child_parts(&self.stmt_lists, &stmt.kind);
        for child in list.iter().copied().chain(first).chain(second) {
            debug_assert!(child < id, "child {child:?} allocated after parent {id:?}");
            if let Some(slot) = self.parents.get_mut(child.index()) {
                debug_assert!(slot.is_none(), "{child:?} already has a parent");
                *slot = Some(id);
            }
        }

        id
    }

    /// Allocate the contents of a block or the case bodies of a switch and
    /// return their range.
    ///
    /// # Panics
    /// Panics if the list storage exceeds `u32::MAX` entries.
    #[track_caller]
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let before = self.stmt_lists.len();
        self.stmt_lists.extend(stmts);
        let (Ok(start), Ok(len)) = (
            u32::try_from(before),
            u32::try_from(self.stmt_lists.len() - before),
        ) else {
            panic!("statement list storage overflow");
        };
        StmtRange::new(start, len)
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get statement by ID, or `None` for an out-of-range or invalid ID.
    #[inline]
    pub fn try_get_stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.stmts.get(id.index())
    }

    /// Get block contents by range.
    ///
    /// A range that does not belong to this arena yields an empty slice.
    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        list_slice(&self.stmt_lists, range)
    }

    /// Contents of `id` if it is a block.
    #[inline]
    pub fn block_stmts(&self, id: StmtId) -> Option<&[StmtId]> {
        match self.try_get_stmt(id)?.kind {
            StmtKind::Block(range) => Some(self.get_stmt_list(range)),
            StmtKind::If { .. }
            | StmtKind::Iteration { .. }
            | StmtKind::Switch(_)
            | StmtKind::Other => None,
        }
    }

    /// Syntactic parent of `id`, or `None` for a root.
    #[inline]
    pub fn parent(&self, id: StmtId) -> Option<StmtId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Direct children of `id` in source order.
    pub fn children(&self, id: StmtId) -> impl Iterator<Item = StmtId> + '_ {
        let (list, first, second) = match self.try_get_stmt(id) {
            Some(stmt) => child_parts(&self.stmt_lists, &stmt.kind),
            None => (&[][..], None, None),
        };
        list.iter().copied().chain(first).chain(second)
    }

    /// All statement IDs in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = StmtId> {
        // alloc_stmt guarantees the length fits in u32
        (0..self.stmts.len()).filter_map(|index| u32::try_from(index).ok().map(StmtId::new))
    }

    /// Number of statements.
    #[inline]
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Check if the arena holds no statements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

fn list_slice(lists: &[StmtId], range: StmtRange) -> &[StmtId] {
    let start = range.start as usize;
    let end = start + range.len as usize;
    lists.get(start..end).unwrap_or(&[])
}

/// Children of a statement kind as (listed statements, first arm, second arm).
fn child_parts<'a>(
    lists: &'a [StmtId],
    kind: &StmtKind,
) -> (&'a [StmtId], Option<StmtId>, Option<StmtId>) {
    match *kind {
        StmtKind::Block(range) | StmtKind::Switch(range) => {
            (list_slice(lists, range), None, None)
        }
        StmtKind::If {
            then_branch,
            else_branch,
            ..
        } => (&[], Some(then_branch), else_branch.map(|arm| arm.stmt)),
        StmtKind::Iteration { body, .. } => (&[], Some(body), None),
        StmtKind::Other => (&[], None, None),
    }
}

impl fmt::Debug for StmtArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StmtArena")
            .field("stmts", &self.stmts.len())
            .field("stmt_lists", &self.stmt_lists.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
