//! Recursive descent parser for Snout.
//!
//! Statement parsing dispatches on the leading token; expression parsing is
//! Pratt-style (see `expr.rs`). The parser maintains a current and a peek
//! token over the lexer and collects errors instead of aborting: a malformed
//! statement is dropped, the driver loop advances, and parsing continues so
//! that one pass reports as many syntax errors as possible.
//!
//! A non-empty error list from [`Parser::parse_program`] means the returned
//! AST must not be evaluated.

mod error;
mod expr;
#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use expr::Precedence;

use snout_ir::{Block, Program, Stmt, Token, TokenKind};
use snout_lexer::Lexer;

/// Lex and parse one input in a single call.
pub fn parse(src: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Lexer::new(src)).parse_program()
}

/// Parser state: the lexer, a two-token window, and collected errors.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime the current/peek token window.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            cur: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
        };
        parser.bump();
        parser.bump();
        parser
    }

    /// Parse the whole input.
    ///
    /// Always returns a `Program`; an accompanying non-empty error list
    /// means it is incomplete and must not be evaluated.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut statements = Vec::new();
        while !self.cur_is(&TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.bump();
        }
        tracing::trace!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        (Program::new(statements), self.errors)
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let name = self.expect_peek_ident()?;
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.bump();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Some(Stmt::Let { name, value })
    }

    /// `return;` or `return <expr>;` - the expression is optional.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        if self.peek_is(&TokenKind::Semicolon) {
            self.bump();
            return Some(Stmt::Return(None));
        }
        if self.peek_is(&TokenKind::RBrace) || self.peek_is(&TokenKind::Eof) {
            return Some(Stmt::Return(None));
        }
        self.bump();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Some(Stmt::Return(Some(value)))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Some(Stmt::Expr(expr))
    }

    /// Statements until `}` or end of input. Entered with `cur` on `{`.
    fn parse_block(&mut self) -> Block {
        let mut statements = Vec::new();
        self.bump();
        while !self.cur_is(&TokenKind::RBrace) && !self.cur_is(&TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.bump();
        }
        Block::new(statements)
    }

    // Token window helpers

    fn bump(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    #[inline]
    fn cur_is(&self, kind: &TokenKind) -> bool {
        self.cur.kind == *kind
    }

    #[inline]
    fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek.kind == *kind
    }

    /// Advance if the peek token matches, otherwise record an error and
    /// stay put (the unexpected token is not consumed).
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(&kind) {
            self.bump();
            true
        } else {
            self.errors.push(ParseError::unexpected_token(
                kind,
                self.peek.kind.clone(),
                self.peek.span,
            ));
            false
        }
    }

    /// Advance onto an identifier in peek position and return its name.
    fn expect_peek_ident(&mut self) -> Option<String> {
        if let TokenKind::Ident(name) = &self.peek.kind {
            let name = name.clone();
            self.bump();
            Some(name)
        } else {
            self.errors.push(ParseError::expected_identifier(
                self.peek.kind.clone(),
                self.peek.span,
            ));
            None
        }
    }

    /// The name on the current token, for parameter lists.
    fn cur_ident(&mut self) -> Option<String> {
        if let TokenKind::Ident(name) = &self.cur.kind {
            Some(name.clone())
        } else {
            self.errors.push(ParseError::expected_identifier(
                self.cur.kind.clone(),
                self.cur.span,
            ));
            None
        }
    }

    /// Statement-terminating semicolons are optional.
    fn eat_optional_semicolon(&mut self) {
        if self.peek_is(&TokenKind::Semicolon) {
            self.bump();
        }
    }
}
