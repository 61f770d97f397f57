use pretty_assertions::assert_eq;

use super::*;
use crate::{ElseBranch, LoopKind, Span};

/// `if (c) { x; } else y;` wrapped in a root block.
///
/// ```text
/// if (c) { x; } else y;
/// 0    5 7 9  12 14   19
/// ```
fn if_else_arena() -> (StmtArena, [StmtId; 5]) {
    let mut arena = StmtArena::new();
    let x = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(9, 11)));
    let list = arena.alloc_stmt_list([x]);
    let block = arena.alloc_stmt(Stmt::new(StmtKind::Block(list), Span::new(7, 13)));
    let y = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(19, 21)));
    let if_stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::If {
            cond: Span::new(3, 6),
            then_branch: block,
            else_branch: Some(ElseBranch::new(Span::new(14, 18), y)),
        },
        Span::new(0, 21),
    ));
    let top = arena.alloc_stmt_list([if_stmt]);
    let root = arena.alloc_stmt(Stmt::new(StmtKind::Block(top), Span::new(0, 21)));
    (arena, [x, block, y, if_stmt, root])
}

#[test]
fn test_alloc_assigns_sequential_ids() {
    let (arena, [x, block, y, if_stmt, root]) = if_else_arena();
    assert_eq!(arena.len(), 5);
    assert!(!arena.is_empty());
    assert_eq!(
        [x, block, y, if_stmt, root].map(StmtId::index),
        [0, 1, 2, 3, 4]
    );
    assert_eq!(arena.ids().collect::<Vec<_>>(), vec![x, block, y, if_stmt, root]);
}

#[test]
fn test_parent_links() {
    let (arena, [x, block, y, if_stmt, root]) = if_else_arena();
    assert_eq!(arena.parent(x), Some(block));
    assert_eq!(arena.parent(block), Some(if_stmt));
    assert_eq!(arena.parent(y), Some(if_stmt));
    assert_eq!(arena.parent(if_stmt), Some(root));
    assert_eq!(arena.parent(root), None);
}

#[test]
fn test_children_in_source_order() {
    let (arena, [x, block, y, if_stmt, root]) = if_else_arena();
    assert_eq!(arena.children(if_stmt).collect::<Vec<_>>(), vec![block, y]);
    assert_eq!(arena.children(block).collect::<Vec<_>>(), vec![x]);
    assert_eq!(arena.children(root).collect::<Vec<_>>(), vec![if_stmt]);
    assert_eq!(arena.children(x).count(), 0);
    assert_eq!(arena.children(StmtId::new(99)).count(), 0);
}

#[test]
fn test_block_stmts() {
    let (arena, [x, block, y, ..]) = if_else_arena();
    assert_eq!(arena.block_stmts(block), Some(&[x][..]));
    assert_eq!(arena.block_stmts(y), None);
    assert_eq!(arena.block_stmts(StmtId::new(99)), None);
}

#[test]
fn test_loop_body_parent() {
    let mut arena = StmtArena::new();
    let body = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(9, 11)));
    let for_stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::Iteration {
            kind: LoopKind::For,
            body,
        },
        Span::new(0, 11),
    ));
    assert_eq!(arena.parent(body), Some(for_stmt));
    assert_eq!(arena.children(for_stmt).collect::<Vec<_>>(), vec![body]);
    assert_eq!(arena.get_stmt(for_stmt).do_keyword(), None);
}

#[test]
fn test_empty_block_list() {
    let mut arena = StmtArena::new();
    let list = arena.alloc_stmt_list([]);
    assert_eq!(list.len, 0);
    let block = arena.alloc_stmt(Stmt::new(StmtKind::Block(list), Span::new(0, 2)));
    assert_eq!(arena.block_stmts(block), Some(&[][..]));
}

#[test]
fn test_foreign_range_is_empty() {
    let arena = StmtArena::new();
    assert!(arena.get_stmt_list(StmtRange::new(4, 2)).is_empty());
    assert!(arena.try_get_stmt(StmtId::new(0)).is_none());
}

#[test]
fn test_stmt_predicates() {
    let (arena, [x, block, _, if_stmt, _]) = if_else_arena();
    assert!(arena.get_stmt(block).is_block());
    assert!(arena.get_stmt(if_stmt).is_if());
    assert!(!arena.get_stmt(x).is_if());
}

#[test]
fn test_switch_case_bodies_are_children() {
    // switch (v) { case 1: x; default: y; }
    let mut arena = StmtArena::new();
    let x = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(21, 23)));
    let y = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(33, 35)));
    let cases = arena.alloc_stmt_list([x, y]);
    let switch = arena.alloc_stmt(Stmt::new(StmtKind::Switch(cases), Span::new(0, 37)));

    assert_eq!(arena.children(switch).collect::<Vec<_>>(), vec![x, y]);
    assert_eq!(arena.parent(x), Some(switch));
    assert_eq!(arena.parent(y), Some(switch));
    // a switch is not a block
    assert_eq!(arena.block_stmts(switch), None);
}

#[test]
fn test_do_keyword() {
    // do x; while (c);
    let mut arena = StmtArena::new();
    let body = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(3, 5)));
    let do_stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::Iteration {
            kind: LoopKind::DoWhile,
            body,
        },
        Span::new(0, 16),
    ));
    assert_eq!(arena.get_stmt(do_stmt).do_keyword(), Some(Span::new(0, 2)));
    assert_eq!(arena.get_stmt(body).do_keyword(), None);
}
