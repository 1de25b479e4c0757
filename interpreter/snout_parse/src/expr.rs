//! Pratt expression parsing.
//!
//! One generic loop drives everything: parse a prefix form for the current
//! token, then fold in infix forms for as long as the peek token binds
//! tighter than the caller's minimum precedence. Per-token prefix and infix
//! rules live in two `match` dispatches; the precedence table is
//! [`Precedence::of`]. Strict `<` comparison gives left associativity
//! without backtracking.

use snout_ir::{Expr, InfixOp, PrefixOp, TokenKind};

use crate::{ParseError, Parser};

/// Binding precedence levels, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `!x`, `-x`
    Prefix,
    /// `f(x)`
    Call,
    /// `xs[i]`
    Index,
}

impl Precedence {
    /// Infix binding precedence of a token; `Lowest` for tokens with no
    /// infix rule.
    pub fn of(kind: &TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

impl Parser<'_> {
    /// Parse one expression with the caller's minimum binding precedence.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;
        while !self.peek_is(&TokenKind::Semicolon) && min < Precedence::of(&self.peek.kind) {
            self.bump();
            left = self.parse_infix(left)?;
        }
        Some(left)
    }

    /// Prefix rule dispatch for the current token.
    fn parse_prefix(&mut self) -> Option<Expr> {
        let kind = self.cur.kind.clone();
        match kind {
            TokenKind::Ident(name) => Some(Expr::Ident(name)),
            TokenKind::Int(value) => Some(Expr::Int(value)),
            TokenKind::Str(value) => Some(Expr::Str(value)),
            TokenKind::True => Some(Expr::Bool(true)),
            TokenKind::False => Some(Expr::Bool(false)),
            TokenKind::Bang => self.parse_prefix_operator(PrefixOp::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            found => {
                self.errors
                    .push(ParseError::no_prefix_rule(found, self.cur.span));
                None
            }
        }
    }

    /// Infix rule dispatch; `cur` sits on the operator/opening token.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.cur.kind {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Asterisk => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            TokenKind::Eq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::LParen => return self.parse_call(left),
            TokenKind::LBracket => return self.parse_index(left),
            // Unreachable while Precedence::of and this table agree.
            _ => return Some(left),
        };
        let precedence = Precedence::of(&self.cur.kind);
        self.bump();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_prefix_operator(&mut self, op: PrefixOp) -> Option<Expr> {
        self.bump();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            op,
            right: Box::new(right),
        })
    }

    /// `( <expr> )`
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.bump();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `if (<cond>) { ... }` with optional `else { ... }`.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.bump();
        let cond = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();
        let alternative = if self.peek_is(&TokenKind::Else) {
            self.bump();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };
        Some(Expr::If {
            cond: Box::new(cond),
            consequence,
            alternative,
        })
    }

    /// `fn(<params>) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();
        Some(Expr::Function { params, body })
    }

    /// Comma-separated identifiers up to `)`.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();
        if self.peek_is(&TokenKind::RParen) {
            self.bump();
            return Some(params);
        }
        self.bump();
        params.push(self.cur_ident()?);
        while self.peek_is(&TokenKind::Comma) {
            self.bump();
            self.bump();
            params.push(self.cur_ident()?);
        }
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    /// `<callee>(<args>)` - `cur` sits on `(`.
    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// `<left>[<index>]` - `cur` sits on `[`.
    fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        self.bump();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expr::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// `[<exprs>]`
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::Array(elements))
    }

    /// Comma-separated expressions up to the closing delimiter.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek_is(&end) {
            self.bump();
            return Some(items);
        }
        self.bump();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(&TokenKind::Comma) {
            self.bump();
            self.bump();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        if !self.expect_peek(end) {
            return None;
        }
        Some(items)
    }

    /// `{<key>: <value>, ...}` - pairs kept in source order.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();
        while !self.peek_is(&TokenKind::RBrace) {
            self.bump();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.bump();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));
            if !self.peek_is(&TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }
        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }
        Some(Expr::Hash(pairs))
    }
}
