//! Statement IDs and ranges for the flat statement tree.
//!
//! - `StmtId(u32)` instead of `Box<Stmt>`: children and parents are plain
//!   indices into [`StmtArena`](crate::StmtArena)
//! - `StmtRange` for block contents (8 bytes vs 24+ for `Vec`)

use std::fmt;

/// Index into the statement arena.
///
/// Copy-able and 4 bytes wide; equality is an integer compare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    /// Create a new `StmtId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Range of statement IDs in the arena's flattened list storage.
///
/// Block contents are stored contiguously in source order.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct StmtRange {
    pub start: u32,
    pub len: u32,
}

impl StmtRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        StmtRange { start, len }
    }
}

impl fmt::Debug for StmtRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StmtRange({}..{})",
            self.start,
            self.start + self.len
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{StmtId, StmtRange};
    crate::static_assert_size!(StmtId, 4);
    crate::static_assert_size!(StmtRange, 8);
}
