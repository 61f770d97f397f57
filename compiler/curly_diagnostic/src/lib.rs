//! Failure reporting for the curly brace-style checker.
//!
//! - [`Failure`]: what is wrong and where, plus the edits that fix it
//! - [`Fixer`]: applies the edits of many failures in one pass

mod failure;
mod fix;

pub use failure::{Failure, FailureKind, RULE_NAME};
pub use fix::{apply_fixes, FixError, Fixer, TextEdit};
