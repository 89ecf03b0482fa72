pub mod lexer;
pub mod token;

use crate::error::CompileError;
use lexer::Lexer;
use token::{Token, TokenKind};

/// Scan source code into a list of tokens, ending with a single `Eof` token.
pub fn scan(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token<'_>> = lexer.by_ref().collect();
    tokens.push(lexer.next_token());
    tokens
}

/// Scan source code, reporting every illegal character as a diagnostic.
pub fn check(source: &str) -> Result<Vec<Token<'_>>, Vec<CompileError>> {
    let tokens = scan(source);
    let errors: Vec<CompileError> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| {
            CompileError::scan(
                format!("unexpected character {:?}", t.literal),
                t.span.offset,
                t.span.len,
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_ends_with_one_eof() {
        let tokens = scan("let x = 1;");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn scan_empty_source() {
        let tokens = scan("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].literal, "");
    }

    #[test]
    fn check_accepts_clean_source() {
        let tokens = check("let add = fn(x, y) { x + y; };").expect("no illegal characters");
        assert_eq!(tokens[0].kind, TokenKind::Let);
    }

    #[test]
    fn check_reports_each_illegal_character() {
        let errors = check("let x = @;\nlet y = #;").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains('@'));
        assert!(errors[1].to_string().contains('#'));
        assert_eq!(errors[0].span().offset(), 8);
        assert_eq!(errors[1].span().offset(), 19);
    }
}
