use crate::error::Error;
use crate::grammer::ast::{Expr, Function, Program, Stmt};
use crate::grammer::token::{Token, TokenKind};

/// Cursor over a shared token buffer. Consuming a token advances the
/// index; the buffer itself is never mutated.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    pub fn parse(mut self) -> Result<Program, Error> {
        self.parse_program()
    }
}

// ----------------------------------------------------------------------------
// Cursor
// ----------------------------------------------------------------------------

impl<'a> Parser<'a> {
    /// Watch the next token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token and return it.
    fn next(&mut self) -> Result<&'a Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(Error::UnexpectedEOF),
        }
    }

    /// Next token must equal `expected`.
    fn expect(&mut self, expected: TokenKind) -> Result<&'a Token, Error> {
        let token = self.next()?;
        if token.kind == expected {
            Ok(token)
        } else {
            Err(Error::UnexpectedToken {
                expected: expected.to_string(),
                found: token.into(),
            })
        }
    }
}

// ----------------------------------------------------------------------------
// Grammar rules
// ----------------------------------------------------------------------------

impl<'a> Parser<'a> {
    /// program = function EOF
    fn parse_program(&mut self) -> Result<Program, Error> {
        let function = self.parse_function()?;
        if let Some(token) = self.peek() {
            return Err(Error::UnexpectedToken {
                expected: "end of input after function definition".to_string(),
                found: token.into(),
            });
        }
        Ok(Program(function))
    }

    /// function = "int" ident "(" "void" ")" "{" stmt "}"
    fn parse_function(&mut self) -> Result<Function, Error> {
        self.expect(TokenKind::KwInt)?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::KwVoid)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LCurly)?;
        let body = self.parse_stmt()?;
        self.expect(TokenKind::RCurly)?;
        Ok(Function { name, body })
    }

    /// stmt = "return" expr ";"
    fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        self.expect(TokenKind::KwReturn)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return(expr))
    }

    /// expr = int-literal
    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let value = self.parse_constant()?;
        Ok(Expr::Constant(value))
    }

    fn parse_ident(&mut self) -> Result<String, Error> {
        let token = self.next()?;
        match &token.kind {
            TokenKind::Ident(name) => Ok(name.clone()),
            _ => Err(Error::UnexpectedToken {
                expected: "an identifier".to_string(),
                found: token.into(),
            }),
        }
    }

    fn parse_constant(&mut self) -> Result<i32, Error> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Constant(value) => Ok(value),
            _ => Err(Error::UnexpectedToken {
                expected: "a constant".to_string(),
                found: token.into(),
            }),
        }
    }
}
