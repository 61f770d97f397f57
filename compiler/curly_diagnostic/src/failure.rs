//! Brace-style failures.

use std::fmt;

use curly_ir::Span;
use smallvec::SmallVec;

use crate::TextEdit;

/// Name under which every failure is reported.
pub const RULE_NAME: &str = "curly";

/// What is wrong with a statement's braces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// A branch or loop body must be a block but is not.
    MissingBraces,
    /// A block wraps a single statement that needs no braces.
    UnnecessaryBraces,
}

impl FailureKind {
    /// Stable identifier, for machine-readable output.
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::MissingBraces => "missing-braces",
            FailureKind::UnnecessaryBraces => "unnecessary-braces",
        }
    }

    /// Human-readable message.
    pub const fn message(self) -> &'static str {
        match self {
            FailureKind::MissingBraces => "statement must be braced",
            FailureKind::UnnecessaryBraces => "unnecessary curly braces",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported brace-style violation.
///
/// `span` is the offending statement: the unbraced statement for
/// [`FailureKind::MissingBraces`], the block itself for
/// [`FailureKind::UnnecessaryBraces`]. `edits` bring that span to its
/// canonical form and never overlap each other.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Failure {
    pub kind: FailureKind,
    pub span: Span,
    pub edits: SmallVec<[TextEdit; 2]>,
}

impl Failure {
    /// Create a failure with no edits attached.
    pub fn new(kind: FailureKind, span: Span) -> Self {
        Failure {
            kind,
            span,
            edits: SmallVec::new(),
        }
    }

    pub fn missing_braces(span: Span) -> Self {
        Self::new(FailureKind::MissingBraces, span)
    }

    pub fn unnecessary_braces(span: Span) -> Self {
        Self::new(FailureKind::UnnecessaryBraces, span)
    }

    /// Attach an edit.
    pub fn with_edit(mut self, edit: TextEdit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Check if this failure carries a fix.
    pub fn has_fix(&self) -> bool {
        !self.edits.is_empty()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{RULE_NAME}]", self.span, self.message())
    }
}
