use pretty_assertions::assert_eq;

use super::*;
use crate::Failure;

#[test]
fn test_text_edit_constructors() {
    assert_eq!(
        TextEdit::insert(10, "hello"),
        TextEdit {
            span: Span::new(10, 10),
            new_text: "hello".to_string(),
        }
    );
    assert_eq!(
        TextEdit::delete(Span::new(10, 20)),
        TextEdit::replace(Span::new(10, 20), "")
    );
}

#[test]
fn test_apply_deletions() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(11, 13)));
    fixer.push(TextEdit::delete(Span::new(7, 9)));

    assert_eq!(fixer.apply("if (c) { x; }"), Ok("if (c) x;".to_string()));
}

#[test]
fn test_apply_insertions() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::insert(7, "{ "));
    fixer.push(TextEdit::insert(9, " }"));

    assert_eq!(fixer.apply("if (c) x;"), Ok("if (c) { x; }".to_string()));
}

#[test]
fn test_same_point_insertions_keep_push_order() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::insert(2, "a"));
    fixer.push(TextEdit::insert(2, "b"));

    assert!(fixer.check_conflicts().is_ok());
    assert_eq!(fixer.apply("xxyy"), Ok("xxabyy".to_string()));
}

#[test]
fn test_insert_before_adjacent_deletion() {
    // insertion at the start of a deleted range lands before it
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(2, 4)));
    fixer.push(TextEdit::insert(2, "!"));

    assert_eq!(fixer.apply("ab--cd"), Ok("ab!cd".to_string()));
}

#[test]
fn test_touching_edits_do_not_conflict() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(0, 2)));
    fixer.push(TextEdit::replace(Span::new(2, 3), " "));

    assert!(fixer.check_conflicts().is_ok());
    assert_eq!(fixer.apply("{}x"), Ok(" ".to_string()));
}

#[test]
fn test_overlapping_edits_conflict() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(0, 5)));
    fixer.push(TextEdit::delete(Span::new(3, 8)));

    let Err(FixError::Overlap { first, second }) = fixer.apply("0123456789") else {
        panic!("expected overlap");
    };
    assert_eq!(first.span, Span::new(0, 5));
    assert_eq!(second.span, Span::new(3, 8));
}

#[test]
fn test_insert_at_deletion_end_does_not_conflict() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::insert(4, "!"));
    fixer.push(TextEdit::delete(Span::new(2, 4)));

    assert_eq!(fixer.apply("ab--cd"), Ok("ab!cd".to_string()));
}

#[test]
fn test_insert_inside_deletion_conflicts() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(0, 5)));
    fixer.push(TextEdit::insert(2, "x"));

    assert!(matches!(
        fixer.check_conflicts(),
        Err(FixError::Overlap { .. })
    ));
}

#[test]
fn test_out_of_bounds() {
    let mut fixer = Fixer::new();
    fixer.push(TextEdit::delete(Span::new(2, 10)));

    assert_eq!(
        fixer.apply("abc"),
        Err(FixError::OutOfBounds {
            span: Span::new(2, 10),
            len: 3,
        })
    );
}

#[test]
fn test_not_char_boundary() {
    let mut fixer = Fixer::new();
    // 'é' occupies bytes 1..3
    fixer.push(TextEdit::delete(Span::new(2, 3)));

    assert_eq!(
        fixer.apply("aéb"),
        Err(FixError::NotCharBoundary {
            span: Span::new(2, 3)
        })
    );
}

#[test]
fn test_empty_fixer_returns_source() {
    let fixer = Fixer::default();
    assert!(fixer.is_empty());
    assert_eq!(fixer.apply("while (c) x;"), Ok("while (c) x;".to_string()));
}

#[test]
fn test_apply_fixes_from_failures() {
    let source = "if (c) { x; }";
    let failures = [Failure::unnecessary_braces(Span::new(7, 13))
        .with_edit(TextEdit::delete(Span::new(7, 9)))
        .with_edit(TextEdit::delete(Span::new(11, 13)))];

    let fixer = Fixer::from_failures(&failures);
    assert_eq!(fixer.len(), 2);
    assert_eq!(apply_fixes(source, &failures), Ok("if (c) x;".to_string()));
}
