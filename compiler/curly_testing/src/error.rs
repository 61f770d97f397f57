//! Harness parse errors.

use curly_ir::{Span, SpanError};

use crate::TokenKind;

/// Error turning test source into a statement tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized input at {span}")]
    UnrecognizedInput { span: Span },

    #[error("expected {expected}, found {found:?} at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },

    #[error("braces inside an expression statement at {span}")]
    BraceInExpression { span: Span },

    #[error(transparent)]
    TooLarge(#[from] SpanError),
}
