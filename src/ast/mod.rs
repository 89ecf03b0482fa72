use std::fmt;

use crate::scanner::token::Token;

/// Capability shared by every syntax-tree node.
pub trait Node {
    /// Literal text of the token the node originated from.
    fn token_literal(&self) -> &str;
}

/// Root of a parsed program: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program<'a> {
    pub statements: Vec<Statement<'a>>,
}

impl Program<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Program<'_> {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |s| s.token_literal())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Let(LetStatement<'a>),
}

impl Node for Statement<'_> {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => s.token_literal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
}

impl Node for Expression<'_> {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(i) => i.token_literal(),
        }
    }
}

/// A name, used both as an expression and as a binding target.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier<'a> {
    pub token: Token<'a>,
    pub value: String,
}

impl<'a> Identifier<'a> {
    pub fn new(token: Token<'a>) -> Self {
        Self {
            token,
            value: token.literal.to_string(),
        }
    }
}

impl Node for Identifier<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

/// `let <name> = <value>;`. The value stays `None` until a parser fills it.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement<'a> {
    pub token: Token<'a>,
    pub name: Identifier<'a>,
    pub value: Option<Expression<'a>>,
}

impl<'a> LetStatement<'a> {
    pub fn new(token: Token<'a>, name: Identifier<'a>) -> Self {
        Self {
            token,
            name,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Expression<'a>) -> Self {
        self.value = Some(value);
        self
    }
}

impl Node for LetStatement<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(i) => write!(f, "{i}"),
        }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for LetStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        f.write_str(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::token::{Span, TokenKind};

    fn ident(name: &str, offset: usize) -> Identifier<'_> {
        Identifier::new(Token::new(
            TokenKind::Identifier,
            name,
            Span::new(offset, name.len()),
        ))
    }

    fn let_stmt<'a>(name: &'a str, value: Option<&'a str>) -> Statement<'a> {
        let token = Token::new(TokenKind::Let, "let", Span::new(0, 3));
        let stmt = LetStatement::new(token, ident(name, 4));
        Statement::Let(match value {
            Some(v) => stmt.with_value(Expression::Identifier(ident(v, 8))),
            None => stmt,
        })
    }

    #[test]
    fn empty_program_has_empty_literal() {
        assert_eq!(Program::new().token_literal(), "");
        assert_eq!(Program::new().to_string(), "");
    }

    #[test]
    fn program_literal_is_first_statement_literal() {
        let program = Program {
            statements: vec![let_stmt("x", Some("y")), let_stmt("z", None)],
        };
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn identifier_decodes_value_from_token() {
        let id = ident("anotherVar", 0);
        assert_eq!(id.value, "anotherVar");
        assert_eq!(id.token_literal(), "anotherVar");
        assert_eq!(Expression::Identifier(id).token_literal(), "anotherVar");
    }

    #[test]
    fn let_statement_display() {
        let program = Program {
            statements: vec![let_stmt("myVar", Some("anotherVar"))],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn let_statement_without_value_display() {
        assert_eq!(let_stmt("x", None).to_string(), "let x = ;");
    }

    #[test]
    fn program_display_concatenates_statements() {
        let program = Program {
            statements: vec![let_stmt("a", Some("b")), let_stmt("c", Some("d"))],
        };
        assert_eq!(program.to_string(), "let a = b;let c = d;");
    }
}
