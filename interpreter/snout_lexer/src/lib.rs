//! Lexer for Snout.
//!
//! Converts raw source text into a finite token sequence via repeated
//! `next_token()` calls. The cursor advances byte-by-byte with one byte of
//! lookahead; EOF is modeled as a `0x00` sentinel read past the end of the
//! buffer. The lexer holds no grammar knowledge: unrecognized characters
//! become `Illegal` tokens for the parser to report, never a scan abort.

use snout_ir::{Span, Token, TokenKind};

/// Identifier start/continue bytes: ASCII letters and underscore.
#[inline]
const fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Streaming lexer over one input line.
pub struct Lexer<'a> {
    src: &'a str,
    input: &'a [u8],
    /// Byte offset of `ch`.
    pos: usize,
    /// Byte offset of the lookahead byte.
    read_pos: usize,
    /// Current byte; `0` once the cursor passes the end.
    ch: u8,
    /// Set once `Eof` has been yielded through the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the first byte of `src`.
    pub fn new(src: &'a str) -> Self {
        let mut lexer = Lexer {
            src,
            input: src.as_bytes(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Consume and return exactly one token.
    ///
    /// Whitespace is skipped. Two-character operators are matched greedily
    /// before their one-character prefixes. Repeated calls at end of input
    /// keep returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;

        let kind = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'"' => return self.read_string(start),
            0 => return Token::new(TokenKind::Eof, Span::from_range(start..start)),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                return Token::new(
                    TokenKind::lookup_ident(literal),
                    Span::from_range(start..self.pos),
                );
            }
            ch if ch.is_ascii_digit() => return self.read_number(start),
            _ => return self.read_illegal(start),
        };

        self.read_char();
        Token::new(kind, Span::from_range(start..self.pos))
    }

    /// Advance the cursor one byte.
    #[inline]
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_pos).copied().unwrap_or(0);
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    /// One byte of lookahead without advancing.
    #[inline]
    fn peek_char(&self) -> u8 {
        self.input.get(self.read_pos).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_ascii_whitespace() {
            self.read_char();
        }
    }

    /// Maximal letter/digit run starting at the current letter.
    fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        &self.src[start..self.pos]
    }

    /// Maximal digit run. A run that does not fit in an `i64` becomes an
    /// `Illegal` token rather than a host-level failure.
    fn read_number(&mut self, start: usize) -> Token {
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        let literal = &self.src[start..self.pos];
        let kind = match literal.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => TokenKind::Illegal(literal.to_owned()),
        };
        Token::new(kind, Span::from_range(start..self.pos))
    }

    /// Double-quoted, escape-free string literal. Terminated by the closing
    /// quote or end of input, whichever comes first.
    fn read_string(&mut self, start: usize) -> Token {
        let content_start = self.pos + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        let value = self.src[content_start..self.pos].to_owned();
        if self.ch == b'"' {
            self.read_char();
        }
        Token::new(TokenKind::Str(value), Span::from_range(start..self.pos))
    }

    /// Consume one unrecognized character (full UTF-8 sequence).
    fn read_illegal(&mut self, start: usize) -> Token {
        let ch = self.src[start..].chars().next().unwrap_or('\u{FFFD}');
        for _ in 0..ch.len_utf8() {
            self.read_char();
        }
        Token::new(
            TokenKind::Illegal(ch.to_string()),
            Span::from_range(start..self.pos),
        )
    }
}

/// Yields every token up to and including `Eof`, then stops.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}
