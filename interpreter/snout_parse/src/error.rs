//! Parse error types.
//!
//! Errors are collected, not thrown: the parser appends one `ParseError`
//! per failed expectation and keeps going, so a single pass surfaces as
//! many problems as possible.

use std::fmt;

use snout_ir::{Span, TokenKind};

/// Typed category for a parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific token was required next and something else was found.
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// An identifier was required (after `let`, in a parameter list).
    ExpectedIdentifier { found: TokenKind },
    /// No expression can start with the found token.
    NoPrefixRule { found: TokenKind },
}

/// A parse failure: typed kind plus the span of the offending token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
        }
    }

    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedIdentifier { found },
            span,
        }
    }

    pub fn no_prefix_rule(found: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::NoPrefixRule { found },
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found}")
            }
            ParseErrorKind::ExpectedIdentifier { found } => {
                write!(f, "expected an identifier, got {found}")
            }
            ParseErrorKind::NoPrefixRule { found } => {
                write!(f, "no expression can begin with {found}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
