//! Text edits and fix application.
//!
//! Each [`Failure`](crate::Failure) carries the edits that bring its span to
//! canonical form. [`Fixer`] gathers the edits of many failures, rejects
//! overlapping ones, and applies the rest in one forward pass over the source.
//!
//! # Example
//!
//! ```
//! use curly_diagnostic::{Fixer, TextEdit};
//! use curly_ir::Span;
//!
//! let mut fixer = Fixer::new();
//! fixer.push(TextEdit::delete(Span::new(7, 9)));
//! fixer.push(TextEdit::delete(Span::new(11, 13)));
//!
//! assert_eq!(fixer.apply("if (c) { x; }").ok().as_deref(), Some("if (c) x;"));
//! ```

use curly_ir::Span;

/// A text edit that modifies source code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextEdit {
    /// The span to replace (empty span for insert).
    pub span: Span,
    /// The new text to insert.
    pub new_text: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    /// Create an insertion edit at a specific position.
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::point(at),
            new_text: text.into(),
        }
    }

    /// Create a deletion edit.
    pub fn delete(span: Span) -> Self {
        TextEdit {
            span,
            new_text: String::new(),
        }
    }
}

/// Error applying a set of edits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    /// Two edits touch the same bytes.
    #[error("edits overlap: {:?} and {:?}", .first.span, .second.span)]
    Overlap { first: TextEdit, second: TextEdit },
    /// An edit reaches past the end of the source.
    #[error("edit {span} is out of bounds for source of length {len}")]
    OutOfBounds { span: Span, len: usize },
    /// An edit starts or ends inside a multi-byte character.
    #[error("edit {span} does not fall on a character boundary")]
    NotCharBoundary { span: Span },
}

/// Collects text edits and applies them to a source string.
#[derive(Clone, Debug, Default)]
pub struct Fixer {
    edits: Vec<TextEdit>,
}

impl Fixer {
    /// Create a new empty fixer.
    pub fn new() -> Self {
        Fixer { edits: Vec::new() }
    }

    /// Collect every edit carried by `failures`, in order.
    pub fn from_failures<'a>(failures: impl IntoIterator<Item = &'a crate::Failure>) -> Self {
        let mut fixer = Fixer::new();
        for failure in failures {
            fixer.extend(failure.edits.iter().cloned());
        }
        fixer
    }

    /// Add a raw text edit.
    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// Add several edits.
    pub fn extend(&mut self, edits: impl IntoIterator<Item = TextEdit>) {
        self.edits.extend(edits);
    }

    /// Get the number of pending edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if there are no pending edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Edits ordered by position. Equal positions keep insertion order.
    fn sorted(&self) -> Vec<&TextEdit> {
        let mut sorted: Vec<&TextEdit> = self.edits.iter().collect();
        sorted.sort_by_key(|e| (e.span.start, e.span.end));
        sorted
    }

    /// Check for overlapping edits.
    ///
    /// Edits that only touch are fine, and so are several insertions at the
    /// same offset. An insertion strictly inside another edit's span is a
    /// conflict.
    pub fn check_conflicts(&self) -> Result<(), FixError> {
        let sorted = self.sorted();
        for window in sorted.windows(2) {
            let (first, second) = (window[0], window[1]);
            if first.span.overlaps(second.span) {
                return Err(FixError::Overlap {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
        Ok(())
    }

    /// Apply all edits to `source` and return the modified text.
    ///
    /// Insertions at the same offset appear in the order they were pushed.
    pub fn apply(&self, source: &str) -> Result<String, FixError> {
        self.check_conflicts()?;

        let mut output = String::with_capacity(source.len());
        let mut cursor = 0usize;
        for edit in self.sorted() {
            let range = edit.span.to_range();
            if range.end > source.len() || range.start > range.end {
                return Err(FixError::OutOfBounds {
                    span: edit.span,
                    len: source.len(),
                });
            }
            let (Some(kept), true) = (
                source.get(cursor..range.start),
                source.is_char_boundary(range.end),
            ) else {
                return Err(FixError::NotCharBoundary { span: edit.span });
            };
            output.push_str(kept);
            output.push_str(&edit.new_text);
            cursor = range.end;
        }
        output.push_str(source.get(cursor..).unwrap_or_default());

        Ok(output)
    }
}

/// Apply the edits of every failure to `source`.
pub fn apply_fixes<'a>(
    source: &str,
    failures: impl IntoIterator<Item = &'a crate::Failure>,
) -> Result<String, FixError> {
    Fixer::from_failures(failures).apply(source)
}

#[cfg(test)]
mod tests;
