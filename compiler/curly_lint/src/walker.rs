//! Pre-order traversal that applies brace verdicts.

use curly_diagnostic::{Failure, FailureKind};
use curly_ir::{ElseBranch, LoopKind, Span, StmtArena, StmtId, StmtKind};
use tracing::{debug, trace};

use crate::{BraceAnalyzer, BraceOptions, EditPlanner};

/// Check every loop and conditional under `root`.
///
/// Failures come out in pre-order, source order among siblings. Nested
/// constructs are checked whatever their ancestors' verdicts were, including
/// those inside switch case bodies. `root` itself is traversed but, being the
/// container of everything, never flagged.
#[tracing::instrument(level = "debug", skip_all, fields(
    stmts = arena.len(),
    options = %options,
))]
pub fn check(arena: &StmtArena, root: StmtId, options: BraceOptions) -> Vec<Failure> {
    let mut walker = Walker {
        arena,
        analyzer: BraceAnalyzer::new(arena, options),
        planner: EditPlanner::new(arena),
        failures: Vec::new(),
    };

    let mut worklist = vec![root];
    while let Some(id) = worklist.pop() {
        let Some(stmt) = arena.try_get_stmt(id) else {
            continue;
        };
        match stmt.kind {
            StmtKind::Iteration { kind, body } => {
                walker.check_loop(kind, body, stmt.do_keyword());
            }
            StmtKind::If {
                then_branch,
                else_branch,
                ..
            } => walker.check_if(id, then_branch, else_branch),
            StmtKind::Block(_) | StmtKind::Switch(_) | StmtKind::Other => {}
        }

        let mark = worklist.len();
        worklist.extend(arena.children(id));
        worklist[mark..].reverse();
    }

    let missing = walker
        .failures
        .iter()
        .filter(|failure| failure.kind == FailureKind::MissingBraces)
        .count();
    debug!(
        missing,
        unnecessary = walker.failures.len() - missing,
        "brace check complete"
    );
    walker.failures
}

/// Where a controlled statement sits relative to its keywords.
#[derive(Copy, Clone, Debug)]
enum Arm {
    /// A `then` arm followed by the `else` keyword at this span.
    BeforeElse(Span),
    /// Any other arm or loop body, with the `else` or `do` keyword directly
    /// in front of it, if any.
    After(Option<Span>),
}

struct Walker<'a> {
    arena: &'a StmtArena,
    analyzer: BraceAnalyzer<'a>,
    planner: EditPlanner<'a>,
    failures: Vec<Failure>,
}

impl Walker<'_> {
    fn is_block(&self, id: StmtId) -> bool {
        self.arena.try_get_stmt(id).is_some_and(|stmt| stmt.is_block())
    }

    fn check_loop(&mut self, kind: LoopKind, body: StmtId, do_keyword: Option<Span>) {
        let needed = self.analyzer.needs_braces(body, false);
        trace!(%kind, ?body, needed, "loop body");
        self.apply(needed, body, Arm::After(do_keyword));
    }

    fn check_if(&mut self, id: StmtId, then_branch: StmtId, else_branch: Option<ElseBranch>) {
        let verdict = self.analyzer.if_needs_braces(id, false);
        trace!(?id, ?verdict, "conditional");

        let then_arm = match else_branch {
            Some(arm) => Arm::BeforeElse(arm.keyword),
            None => Arm::After(None),
        };
        self.apply(verdict.then_branch, then_branch, then_arm);

        if let Some(arm) = else_branch {
            // an unbraced else-if link is never itself missing braces
            let is_link = self
                .arena
                .try_get_stmt(arm.stmt)
                .is_some_and(|stmt| stmt.is_if());
            if !(verdict.else_branch && is_link) {
                self.apply(verdict.else_branch, arm.stmt, Arm::After(Some(arm.keyword)));
            }
        }
    }

    /// Report `target` if its brace presence disagrees with `needed`.
    fn apply(&mut self, needed: bool, target: StmtId, arm: Arm) {
        let failure = match (needed, self.is_block(target)) {
            (true, false) => self.planner.missing_braces(target),
            (false, true) => match arm {
                Arm::BeforeElse(keyword) => self.planner.unnecessary_then(target, keyword),
                Arm::After(keyword) => self.planner.unnecessary_block(target, keyword),
            },
            (true, true) | (false, false) => None,
        };
        if let Some(failure) = failure {
            trace!(kind = %failure.kind, span = %failure.span, "brace failure");
            self.failures.push(failure);
        }
    }
}
