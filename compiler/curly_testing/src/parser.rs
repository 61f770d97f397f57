//! Recursive-descent parser for harness source.
//!
//! Children are allocated before their parent, so the arena's parent index is
//! complete once parsing returns.

use curly_ir::{ElseBranch, LoopKind, Span, Stmt, StmtArena, StmtId, StmtKind};

use crate::{lex, ParseError, Token, TokenKind};

/// A parsed source file.
///
/// `root` is a block without delimiters spanning the whole source.
#[derive(Debug)]
pub struct ParsedSource {
    pub arena: StmtArena,
    pub root: StmtId,
}

impl ParsedSource {
    /// First statement, in allocation order, whose text is exactly `text`.
    ///
    /// Inner statements are allocated before the statements containing them,
    /// so an exact match prefers the innermost candidate.
    pub fn find(&self, source: &str, text: &str) -> Option<StmtId> {
        self.arena.ids().find(|&id| {
            let span = self.arena.get_stmt(id).span;
            source.get(span.to_range()) == Some(text)
        })
    }
}

/// Parse `source` into a statement tree.
///
/// # Errors
/// Returns a [`ParseError`] for input outside the harness grammar.
pub fn parse(source: &str) -> Result<ParsedSource, ParseError> {
    let tokens = lex(source)?;
    let end = Span::try_from_range(0..source.len())?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        arena: StmtArena::with_capacity(source.len()),
    };

    let mut stmts = Vec::new();
    while parser.peek().is_some() {
        stmts.push(parser.parse_stmt()?);
    }
    let list = parser.arena.alloc_stmt_list(stmts);
    let root = parser
        .arena
        .alloc_stmt(Stmt::new(StmtKind::Block(list), end));

    Ok(ParsedSource {
        arena: parser.arena,
        root,
    })
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    arena: StmtArena,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    fn next(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        let token = self.next(expected)?;
        if token.kind == kind {
            Ok(token.span)
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: token.kind,
                span: token.span,
            })
        }
    }

    fn alloc(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEof {
                expected: "statement",
            });
        };
        match token.kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_loop(LoopKind::While),
            TokenKind::For => self.parse_loop(LoopKind::For),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::RBrace | TokenKind::Else | TokenKind::Case | TokenKind::Default => {
                Err(ParseError::UnexpectedToken {
                    expected: "statement",
                    found: token.kind,
                    span: token.span,
                })
            }
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Semi
            | TokenKind::Colon
            | TokenKind::Ident
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Punct => self.parse_other(),
        }
    }

    fn parse_block(&mut self) -> Result<StmtId, ParseError> {
        let open = self.expect(TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) {
            stmts.push(self.parse_stmt()?);
        }
        let close = self.expect(TokenKind::RBrace, "`}`")?;
        let list = self.arena.alloc_stmt_list(stmts);
        Ok(self.alloc(StmtKind::Block(list), open.merge(close)))
    }

    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.expect(TokenKind::If, "`if`")?;
        let cond = self.parse_parens()?;
        let then_branch = self.parse_stmt()?;
        let mut end = self.arena.get_stmt(then_branch).span;

        let else_branch = if self.check(TokenKind::Else) {
            let else_kw = self.expect(TokenKind::Else, "`else`")?;
            let stmt = self.parse_stmt()?;
            end = self.arena.get_stmt(stmt).span;
            Some(ElseBranch::new(else_kw, stmt))
        } else {
            None
        };

        Ok(self.alloc(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            keyword.merge(end),
        ))
    }

    fn parse_loop(&mut self, kind: LoopKind) -> Result<StmtId, ParseError> {
        let keyword = self.next(kind.keyword())?.span;
        self.parse_parens()?;
        let body = self.parse_stmt()?;
        let span = keyword.merge(self.arena.get_stmt(body).span);
        Ok(self.alloc(StmtKind::Iteration { kind, body }, span))
    }

    fn parse_do_while(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.expect(TokenKind::Do, "`do`")?;
        let body = self.parse_stmt()?;
        self.expect(TokenKind::While, "`while`")?;
        self.parse_parens()?;
        let semi = self.expect(TokenKind::Semi, "`;`")?;
        Ok(self.alloc(
            StmtKind::Iteration {
                kind: LoopKind::DoWhile,
                body,
            },
            keyword.merge(semi),
        ))
    }

    /// `switch (...) { ... }`. Case labels are skipped; the statements of
    /// every case body are kept in source order.
    fn parse_switch(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.expect(TokenKind::Switch, "`switch`")?;
        self.parse_parens()?;
        self.expect(TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Case) {
                self.skip_case_label()?;
            } else if self.check(TokenKind::Default) {
                self.expect(TokenKind::Default, "`default`")?;
                self.expect(TokenKind::Colon, "`:`")?;
            } else {
                stmts.push(self.parse_stmt()?);
            }
        }
        let close = self.expect(TokenKind::RBrace, "`}`")?;
        let cases = self.arena.alloc_stmt_list(stmts);
        Ok(self.alloc(StmtKind::Switch(cases), keyword.merge(close)))
    }

    /// `case <expr>:`, ending at the first `:` outside parentheses.
    fn skip_case_label(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Case, "`case`")?;
        let mut depth = 0usize;
        loop {
            let token = self.next("`:`")?;
            match token.kind {
                TokenKind::Colon if depth == 0 => return Ok(()),
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::LBrace | TokenKind::RBrace => {
                    return Err(ParseError::BraceInExpression { span: token.span });
                }
                _ => {}
            }
        }
    }

    /// Balanced `( ... )`, returning its span. Anything but braces may appear
    /// inside, including `;`.
    fn parse_parens(&mut self) -> Result<Span, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut depth = 1usize;
        loop {
            let token = self.next("`)`")?;
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(open.merge(token.span));
                    }
                }
                TokenKind::LBrace | TokenKind::RBrace => {
                    return Err(ParseError::BraceInExpression { span: token.span });
                }
                _ => {}
            }
        }
    }

    /// Expression statement: tokens up to a `;` at parenthesis depth zero.
    fn parse_other(&mut self) -> Result<StmtId, ParseError> {
        let start = self.next("statement")?;
        let mut depth = 0usize;
        let mut token = start;
        loop {
            match token.kind {
                TokenKind::Semi if depth == 0 => break,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth = depth.checked_sub(1).ok_or(ParseError::UnexpectedToken {
                        expected: "`;`",
                        found: token.kind,
                        span: token.span,
                    })?;
                }
                TokenKind::LBrace | TokenKind::RBrace => {
                    return Err(ParseError::BraceInExpression { span: token.span });
                }
                kind if kind.is_keyword() => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "`;`",
                        found: kind,
                        span: token.span,
                    });
                }
                _ => {}
            }
            token = self.next("`;`")?;
        }
        Ok(self.alloc(StmtKind::Other, start.span.merge(token.span)))
    }
}
