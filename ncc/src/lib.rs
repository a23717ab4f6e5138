mod codegen;
mod emit;
mod error;
mod grammer;

pub use codegen::generate;
pub use emit::{emit_assembly, render};
pub use error::{Error, TokenInfo};
pub use grammer::ast::{Expr, Function, Program, Stmt};
pub use grammer::lexer::lex;
pub use grammer::parser::Parser;
pub use grammer::token::{Pos, Token, TokenKind};
