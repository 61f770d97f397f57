//! Curly IR - statement tree for the brace-style checker
//!
//! This crate contains the data the checker reads:
//! - Spans for source locations
//! - `StmtId`/`StmtRange` indices
//! - Statement nodes (`Stmt`, `StmtKind`)
//! - `StmtArena`, which owns every node and answers parent lookups
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Stmt>`, children are `StmtId(u32)` indices
//! - **Parents are lookups**: a side table in the arena, never a back-pointer
//! - **Read-only after construction**: the checker only borrows the arena

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod ast;
mod span;
mod stmt_id;

pub use arena::StmtArena;
pub use ast::{ElseBranch, LoopKind, Stmt, StmtKind};
pub use span::{Span, SpanError};
pub use stmt_id::{StmtId, StmtRange};
