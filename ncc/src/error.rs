use crate::grammer::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

// Token information carried in diagnostics
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.kind, self.line + 1, self.col + 1)
    }
}

impl From<&Token> for TokenInfo {
    fn from(token: &Token) -> Self {
        TokenInfo {
            kind: token.kind.clone(),
            line: token.pos.line,
            col: token.pos.col,
        }
    }
}

// Unified error type for the compiler
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Lex errors
    #[error("Unrecognized input: {0:?}")]
    UnknownToken(String),

    // Parse errors
    #[error("Unexpected end of input")]
    UnexpectedEOF,

    #[error("Unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: TokenInfo },

    // Emit errors
    #[error("Failed to write assembly: {0}")]
    Emit(std::io::Error),

    // Driver errors
    #[error("Command failed: {0}")]
    Command(String),
}
