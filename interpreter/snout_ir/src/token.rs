//! Token kinds for Snout.

use std::fmt;

use crate::Span;

/// Token kinds for Snout.
///
/// A closed set: every token the lexer can produce is listed here.
/// Literal-carrying variants own the matched text (or its parsed value);
/// everything else is a fixed symbol or reserved word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier: `x`, `add`
    Ident(String),
    /// Integer literal: `42`
    Int(i64),
    /// String literal (escape-free): `"hello"`
    Str(String),
    /// Text the lexer does not recognize (unknown character, or a digit
    /// run that does not fit in an `i64`). Surfaced by the parser as a
    /// syntax error; never aborts the scan.
    Illegal(String),
    /// End of input.
    Eof,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]

    // Keywords
    Let,
    Function, // fn
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Resolve an identifier against the reserved-word set.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "let" => TokenKind::Let,
            "fn" => TokenKind::Function,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident(ident.to_owned()),
        }
    }

    /// True for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    /// Render the token the way it appears in source, or a short
    /// description for literal classes. Used in parser error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Int(value) => write!(f, "integer `{value}`"),
            TokenKind::Str(value) => write!(f, "string \"{value}\""),
            TokenKind::Illegal(text) => write!(f, "illegal token `{text}`"),
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Assign => f.write_str("`=`"),
            TokenKind::Plus => f.write_str("`+`"),
            TokenKind::Minus => f.write_str("`-`"),
            TokenKind::Bang => f.write_str("`!`"),
            TokenKind::Asterisk => f.write_str("`*`"),
            TokenKind::Slash => f.write_str("`/`"),
            TokenKind::Lt => f.write_str("`<`"),
            TokenKind::Gt => f.write_str("`>`"),
            TokenKind::Eq => f.write_str("`==`"),
            TokenKind::NotEq => f.write_str("`!=`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Semicolon => f.write_str("`;`"),
            TokenKind::Colon => f.write_str("`:`"),
            TokenKind::LParen => f.write_str("`(`"),
            TokenKind::RParen => f.write_str("`)`"),
            TokenKind::LBrace => f.write_str("`{`"),
            TokenKind::RBrace => f.write_str("`}`"),
            TokenKind::LBracket => f.write_str("`[`"),
            TokenKind::RBracket => f.write_str("`]`"),
            TokenKind::Let => f.write_str("`let`"),
            TokenKind::Function => f.write_str("`fn`"),
            TokenKind::True => f.write_str("`true`"),
            TokenKind::False => f.write_str("`false`"),
            TokenKind::If => f.write_str("`if`"),
            TokenKind::Else => f.write_str("`else`"),
            TokenKind::Return => f.write_str("`return`"),
        }
    }
}

/// A token: kind plus the source span it was matched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Synthesized end-of-input token with a dummy span.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, Span::DUMMY)
    }
}
