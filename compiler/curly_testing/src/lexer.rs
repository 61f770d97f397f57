//! Tokenizer for harness source.

use curly_ir::Span;
use logos::Logos;

use crate::ParseError;

/// Token kinds the harness parser distinguishes.
///
/// Everything that is not structure collapses into `Ident`, `Number`, `Str`,
/// `Colon`, or `Punct`.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
pub enum TokenKind {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,

    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,

    #[regex(r"[-+*/%=<>!&|^~?,.\[\]]")]
    Punct,
}

impl TokenKind {
    /// Check if this token starts a statement or case label the parser
    /// treats specially.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::For
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::Default
        )
    }
}

/// A token with its source span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Lex `source` into tokens.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] at the first character no token
/// matches, or [`ParseError::TooLarge`] if an offset does not fit in `u32`.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span())?;
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => return Err(ParseError::UnrecognizedInput { span }),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;
