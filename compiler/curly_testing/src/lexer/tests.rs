use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .unwrap_or_default()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_structure_tokens() {
    use TokenKind::*;
    assert_eq!(
        kinds("if (a) { x; } else y;"),
        vec![If, LParen, Ident, RParen, LBrace, Ident, Semi, RBrace, Else, Ident, Semi]
    );
}

#[test]
fn test_keywords_need_word_boundary() {
    use TokenKind::*;
    assert_eq!(kinds("iffy doer elsewhere"), vec![Ident, Ident, Ident]);
    assert_eq!(kinds("do x; while (b);"), vec![
        Do, Ident, Semi, While, LParen, Ident, RParen, Semi
    ]);
}

#[test]
fn test_expression_tokens() {
    use TokenKind::*;
    assert_eq!(
        kinds("a[0] = b + \"s;\" - 'c';"),
        vec![Ident, Punct, Number, Punct, Punct, Ident, Punct, Str, Punct, Str, Semi]
    );
}

#[test]
fn test_case_labels() {
    use TokenKind::*;
    assert_eq!(kinds("case a: default: x ? y : z;"), vec![
        Case, Ident, Colon, Default, Colon, Ident, Punct, Ident, Colon, Ident, Semi
    ]);
}

#[test]
fn test_comments_are_skipped() {
    use TokenKind::*;
    assert_eq!(kinds("x; // if (a) {\ny;"), vec![Ident, Semi, Ident, Semi]);
}

#[test]
fn test_spans() {
    let Ok(tokens) = lex("while (c)\n  x;") else {
        panic!("lex failed");
    };
    let spans: Vec<Span> = tokens.iter().map(|token| token.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 5),
            Span::new(6, 7),
            Span::new(7, 8),
            Span::new(8, 9),
            Span::new(12, 13),
            Span::new(13, 14),
        ]
    );
}

#[test]
fn test_unrecognized_input() {
    assert_eq!(
        lex("x = #;"),
        Err(ParseError::UnrecognizedInput {
            span: Span::new(4, 5)
        })
    );
}
