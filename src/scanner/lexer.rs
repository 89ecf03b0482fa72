//! Single-pass byte scanner.
//!
//! The lexer keeps a cursor over the input bytes and classifies one token per
//! call to [`Lexer::next_token`]. Unrecognized bytes become
//! [`TokenKind::Illegal`] tokens rather than errors, so scanning always runs
//! to the end of the input.

use crate::scanner::token::{Span, Token, TokenKind, lookup_ident};

/// Value of `ch` once the cursor has run off the end of the input.
const SENTINEL: u8 = 0;

pub struct Lexer<'a> {
    input: &'a str,
    /// Offset of `ch`.
    position: usize,
    /// Offset of the next unread byte, always `position + 1`.
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: SENTINEL,
        };
        lexer.read_char();
        lexer
    }

    /// Offset of the byte the next token will start scanning from.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Produce the next token and advance past it.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty literal.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.position;
        let ch = self.ch;
        let kind = match ch {
            SENTINEL if self.is_at_end() => {
                return Token::new(TokenKind::Eof, "", Span::new(self.input.len(), 0));
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Equal),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEqual),
            c if is_letter(c) => {
                let literal = self.read_while(is_letter);
                return self.token(lookup_ident(literal), start);
            }
            c if is_digit(c) => {
                self.read_while(is_digit);
                return self.token(TokenKind::Int, start);
            }
            _ => {
                // Consume a whole encoded character so the literal stays a valid str slice.
                let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.read_char();
                }
                TokenKind::Illegal
            }
        };

        self.read_char();
        self.token(kind, start)
    }

    /// Decide between a one-byte token and its `=`-suffixed two-byte form.
    /// On a match the cursor is left on the `=`, which the caller's final
    /// advance consumes.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.peek_char() == b'=' {
            self.read_char();
            double
        } else {
            single
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        let input = self.input;
        let end = self.position.min(input.len());
        Token::new(kind, &input[start..end], Span::new(start, end - start))
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn read_char(&mut self) {
        let bytes = self.input.as_bytes();
        if self.read_position >= bytes.len() {
            self.ch = SENTINEL;
            self.position = bytes.len();
            self.read_position = bytes.len() + 1;
        } else {
            self.ch = bytes[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Consume the maximal run of bytes matching `pred` and return it.
    fn read_while(&mut self, pred: fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while !self.is_at_end() && pred(self.ch) {
            self.read_char();
        }
        &input[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}
