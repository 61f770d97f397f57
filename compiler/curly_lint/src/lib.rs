//! Brace-presence policy engine.
//!
//! Decides, for every loop and conditional in a statement tree, whether its
//! controlled statements must be blocks or must not be, and reports each
//! disagreement as a [`Failure`] carrying the edits that fix it.
//!
//! # Architecture
//!
//! - [`chain`]: unwraps single-statement blocks and recognizes else-if links
//! - [`BraceAnalyzer`]: the option-sensitive decision engine
//! - [`EditPlanner`]: turns verdicts into failures with text edits
//! - [`check`]: pre-order walk feeding the analyzer and collecting failures
//!
//! A pass is pure: the tree and options are read-only and the failures are
//! the only output.
//!
//! # Example
//!
//! ```
//! use curly_ir::{Span, Stmt, StmtArena, StmtKind};
//! use curly_lint::{check, BraceOptions, FailureKind};
//!
//! // while (b) { x; }
//! let mut arena = StmtArena::new();
//! let x = arena.alloc_stmt(Stmt::new(StmtKind::Other, Span::new(12, 14)));
//! let list = arena.alloc_stmt_list([x]);
//! let body = arena.alloc_stmt(Stmt::new(StmtKind::Block(list), Span::new(10, 16)));
//! let kind = curly_ir::LoopKind::While;
//! let root = arena.alloc_stmt(Stmt::new(StmtKind::Iteration { kind, body }, Span::new(0, 16)));
//!
//! let failures = check(&arena, root, BraceOptions::empty());
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].kind, FailureKind::UnnecessaryBraces);
//! ```

mod analyzer;
pub mod chain;
mod options;
mod planner;
mod stack;
mod walker;

pub use analyzer::{BraceAnalyzer, IfVerdict};
pub use curly_diagnostic::{Failure, FailureKind, RULE_NAME};
pub use options::{BraceOption, BraceOptions, UnknownOptionError};
pub use planner::EditPlanner;
pub use walker::check;
