pub mod ast;
pub mod error;
pub mod repl;
pub mod scanner;

pub use error::CompileError;
pub use scanner::lexer::Lexer;
pub use scanner::token::{Token, TokenKind};
