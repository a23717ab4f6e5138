use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos) -> Self {
        Token { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Punctuation
    LParen,    // '('
    RParen,    // ')'
    LCurly,    // '{'
    RCurly,    // '}'
    Semicolon, // ';'

    // Keywords
    KwInt,    // "int"
    KwVoid,   // "void"
    KwReturn, // "return"

    // Identifier
    Ident(String),

    // Literals
    Constant(i32),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LCurly => write!(f, "'{{'"),
            TokenKind::RCurly => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::KwInt => write!(f, "keyword(\"int\")"),
            TokenKind::KwVoid => write!(f, "keyword(\"void\")"),
            TokenKind::KwReturn => write!(f, "keyword(\"return\")"),
            TokenKind::Ident(name) => write!(f, "ident({name:?})"),
            TokenKind::Constant(value) => write!(f, "constant(\"{value}\")"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}
