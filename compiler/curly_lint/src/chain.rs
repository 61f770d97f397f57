//! Else-if chain resolution.

use curly_ir::{StmtArena, StmtId, StmtKind};

/// The substantive statement under any number of single-statement blocks.
///
/// Returns `id` itself when it is not a block, or is a block holding other
/// than exactly one statement.
pub fn unwrap_block(arena: &StmtArena, mut id: StmtId) -> StmtId {
    while let Some(&[only]) = arena.block_stmts(id) {
        id = only;
    }
    id
}

/// The conditional whose `else` arm is `id`, if any.
///
/// One single-statement block between the two is looked through, so both
/// `else if (...)` and `else { if (...) }` link a chain.
pub fn else_if_parent(arena: &StmtArena, id: StmtId) -> Option<StmtId> {
    let mut node = id;
    let mut parent = arena.parent(node)?;
    if matches!(arena.block_stmts(parent), Some(&[_])) {
        node = parent;
        parent = arena.parent(node)?;
    }

    match arena.try_get_stmt(parent)?.kind {
        StmtKind::If { else_branch, .. } => else_branch
            .filter(|arm| arm.stmt == node)
            .map(|_| parent),
        StmtKind::Block(_)
        | StmtKind::Iteration { .. }
        | StmtKind::Switch(_)
        | StmtKind::Other => None,
    }
}
