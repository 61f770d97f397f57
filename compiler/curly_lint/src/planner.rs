//! Fix edits for brace failures.
//!
//! Edits only ever touch brace tokens and the whitespace between a brace and
//! the statement it wraps. The wrapped statement's own text is never edited,
//! and a removed brace that touched a keyword leaves a space behind, so
//! `else{y;}` becomes `else y;` and never `elsey;`.

use curly_diagnostic::{Failure, TextEdit};
use curly_ir::{Span, StmtArena, StmtId};

use crate::chain::unwrap_block;

/// Turns brace verdicts into failures with edits.
#[derive(Copy, Clone, Debug)]
pub struct EditPlanner<'a> {
    arena: &'a StmtArena,
}

impl<'a> EditPlanner<'a> {
    pub fn new(arena: &'a StmtArena) -> Self {
        EditPlanner { arena }
    }

    /// A statement that must be braced: wrap it in `{ ... }`.
    ///
    /// Returns `None` if `id` is not in the arena.
    pub fn missing_braces(&self, id: StmtId) -> Option<Failure> {
        let span = self.arena.try_get_stmt(id)?.span;
        Some(
            Failure::missing_braces(span)
                .with_edit(TextEdit::insert(span.start, "{ "))
                .with_edit(TextEdit::insert(span.end, " }")),
        )
    }

    /// A block that wraps a single statement needlessly.
    ///
    /// Every redundant layer goes at once: `{ { x; } }` becomes `x;`.
    /// `keyword` is the `else` or `do` keyword directly controlling `block`,
    /// if any. Returns `None` unless `block` unwraps to a different statement.
    pub fn unnecessary_block(&self, block: StmtId, keyword: Option<Span>) -> Option<Failure> {
        let (outer, inner) = self.layers(block)?;
        Some(
            Failure::unnecessary_braces(outer)
                .with_edit(opening_edit(outer, inner, keyword))
                .with_edit(TextEdit::delete(Span::new(inner.end, outer.end))),
        )
    }

    /// An unnecessary `then` block followed by the `else` keyword at
    /// `else_keyword`.
    ///
    /// The closing side keeps one separator before `else`: if whitespace
    /// already follows the closing brace, the brace and everything before it
    /// back to the statement go; otherwise that range becomes a single space.
    pub fn unnecessary_then(&self, block: StmtId, else_keyword: Span) -> Option<Failure> {
        let (outer, inner) = self.layers(block)?;
        let closing = Span::new(inner.end, outer.end);
        let closing_edit = if outer.end < else_keyword.start {
            TextEdit::delete(closing)
        } else {
            TextEdit::replace(closing, " ")
        };
        Some(
            Failure::unnecessary_braces(outer)
                .with_edit(opening_edit(outer, inner, None))
                .with_edit(closing_edit),
        )
    }

    /// Spans of `block` and of the statement it unwraps to.
    fn layers(&self, block: StmtId) -> Option<(Span, Span)> {
        let inner = unwrap_block(self.arena, block);
        if inner == block {
            return None;
        }
        let outer = self.arena.try_get_stmt(block)?.span;
        let inner = self.arena.try_get_stmt(inner)?.span;
        Some((outer, inner))
    }
}

/// Remove everything from the opening brace of `outer` up to `inner`.
///
/// Becomes a single space when the brace directly follows `keyword`.
fn opening_edit(outer: Span, inner: Span, keyword: Option<Span>) -> TextEdit {
    let opening = Span::new(outer.start, inner.start);
    if keyword.is_some_and(|keyword| keyword.end == outer.start) {
        TextEdit::replace(opening, " ")
    } else {
        TextEdit::delete(opening)
    }
}
