use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// An unrecognized character. ASCII bytes produce one token each; a
    /// non-ASCII character produces a single token spanning all of its
    /// UTF-8 bytes, so the literal is always a whole `str` slice.
    Illegal,
    Eof,

    // Identifiers and literals
    Identifier,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Less,
    Greater,
    Equal,
    NotEqual,

    // Delimiters
    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Illegal => write!(f, "ILLEGAL"),
            Self::Eof => write!(f, "EOF"),
            Self::Identifier => write!(f, "IDENT"),
            Self::Int => write!(f, "INT"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bang => write!(f, "!"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Function => write!(f, "fn"),
            Self::Let => write!(f, "let"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Return => write!(f, "return"),
        }
    }
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::True
                | Self::False
                | Self::If
                | Self::Else
                | Self::Return
        )
    }
}

/// Byte range of a token's literal within the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// A classified slice of the input. The literal borrows from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @{}", self.kind, self.literal, self.span.offset)
    }
}

pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    match ident {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Classify a scanned word: its keyword kind if reserved, otherwise `Identifier`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_kind(ident).unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fn", TokenKind::Function)]
    #[case("let", TokenKind::Let)]
    #[case("true", TokenKind::True)]
    #[case("false", TokenKind::False)]
    #[case("if", TokenKind::If)]
    #[case("else", TokenKind::Else)]
    #[case("return", TokenKind::Return)]
    fn reserved_words(#[case] word: &str, #[case] expected: TokenKind) {
        assert_eq!(lookup_ident(word), expected);
        assert!(expected.is_keyword());
        assert_eq!(expected.to_string(), word);
    }

    #[rstest]
    #[case("five")]
    #[case("Let")]
    #[case("lets")]
    #[case("_")]
    fn non_reserved_words_are_identifiers(#[case] word: &str) {
        assert_eq!(keyword_kind(word), None);
        assert_eq!(lookup_ident(word), TokenKind::Identifier);
    }

    #[rstest]
    #[case(TokenKind::LeftBrace, "{")]
    #[case(TokenKind::RightBrace, "}")]
    #[case(TokenKind::LeftParen, "(")]
    #[case(TokenKind::NotEqual, "!=")]
    #[case(TokenKind::Equal, "==")]
    #[case(TokenKind::Identifier, "IDENT")]
    #[case(TokenKind::Int, "INT")]
    #[case(TokenKind::Illegal, "ILLEGAL")]
    #[case(TokenKind::Eof, "EOF")]
    fn kind_display_uses_symbol_text(#[case] kind: TokenKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn token_display() {
        let token = Token::new(TokenKind::Int, "42", Span::new(8, 2));
        assert_eq!(token.to_string(), "Int '42' @8");
    }

    #[test]
    fn span_converts_to_source_span() {
        let span: miette::SourceSpan = Span::new(3, 2).into();
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 2);
    }
}
