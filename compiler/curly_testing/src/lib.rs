//! Test harness for the curly checker.
//!
//! Turns source text in a small C-like statement language into a
//! [`StmtArena`](curly_ir::StmtArena), so checker tests can be written as
//! code instead of hand-built trees. Only statement structure is recognized:
//!
//! - `{ ... }` blocks
//! - `if (...) stmt [else stmt]`
//! - `while (...) stmt`, `for (...) stmt`, `do stmt while (...);`
//! - `switch (...) { ... }`, with `case ...:` and `default:` labels skipped
//!   and the case-body statements parsed
//! - anything else up to a `;` at parenthesis depth zero
//!
//! Expressions are never parsed. Braces inside an expression statement are
//! rejected rather than guessed at.

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::{parse, ParsedSource};
