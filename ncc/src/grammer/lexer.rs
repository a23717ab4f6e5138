use crate::error::Error;
use crate::grammer::token::{Pos, Token, TokenKind};

/// One lexical pattern: an anchored recognizer returning the length matched
/// at the start of the input, and a converter from the matched text to a
/// token kind.
struct TokenDef {
    pattern: fn(&str) -> Option<usize>,
    convert: fn(&str) -> TokenKind,
}

/// Every definition is tried at every position. The longest match wins;
/// equal lengths fall back to table order.
const TOKEN_TABLE: &[TokenDef] = &[
    TokenDef {
        pattern: match_word,
        convert: convert_word,
    },
    TokenDef {
        pattern: match_constant,
        convert: convert_constant,
    },
    TokenDef {
        pattern: |s| match_punct(s, '('),
        convert: |_| TokenKind::LParen,
    },
    TokenDef {
        pattern: |s| match_punct(s, ')'),
        convert: |_| TokenKind::RParen,
    },
    TokenDef {
        pattern: |s| match_punct(s, '{'),
        convert: |_| TokenKind::LCurly,
    },
    TokenDef {
        pattern: |s| match_punct(s, '}'),
        convert: |_| TokenKind::RCurly,
    },
    TokenDef {
        pattern: |s| match_punct(s, ';'),
        convert: |_| TokenKind::Semicolon,
    },
];

pub fn lex(src: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut rest = src;
    let mut pos = Pos { line: 0, col: 0 };

    loop {
        // 0. End of input
        if rest.is_empty() {
            return Ok(tokens);
        }

        // 1. Skip whitespaces
        let trimmed = rest.trim_start();
        if trimmed.len() != rest.len() {
            pos = advance(pos, &rest[..rest.len() - trimmed.len()]);
            rest = trimmed;
            continue;
        }

        // 2. Try every pattern, keeping the longest match.
        //    Strictly-greater replacement keeps the earliest definition on
        //    equal lengths.
        let mut best: Option<(usize, &TokenDef)> = None;
        for def in TOKEN_TABLE {
            if let Some(len) = (def.pattern)(rest) {
                match best {
                    Some((longest, _)) if len <= longest => {}
                    _ => best = Some((len, def)),
                }
            }
        }

        // 3. Convert the winner and advance past it
        match best {
            Some((len, def)) => {
                let lexeme = &rest[..len];
                tokens.push(Token::new((def.convert)(lexeme), pos));
                pos = advance(pos, lexeme);
                rest = &rest[len..];
            }
            None => {
                let fragment: String = rest.chars().take(8).collect();
                return Err(Error::UnknownToken(fragment));
            }
        }
    }
}

fn advance(mut pos: Pos, text: &str) -> Pos {
    for ch in text.chars() {
        if ch == '\n' {
            pos.line += 1;
            pos.col = 0;
        } else {
            pos.col += 1;
        }
    }
    pos
}

// ----------------------------------------------------------------------------
// Patterns and converters
// ----------------------------------------------------------------------------

// word = [A-Za-z_][A-Za-z0-9_]*
fn match_word(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, ch)) if ch.is_ascii_alphabetic() || ch == '_' => {}
        _ => return None,
    }
    for (idx, ch) in chars {
        if !(ch.is_ascii_alphanumeric() || ch == '_') {
            return Some(idx);
        }
    }
    Some(s.len())
}

fn convert_word(lexeme: &str) -> TokenKind {
    match keyword(lexeme) {
        Some(kind) => kind,
        None => TokenKind::Ident(lexeme.to_string()),
    }
}

fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "int" => Some(TokenKind::KwInt),
        "void" => Some(TokenKind::KwVoid),
        "return" => Some(TokenKind::KwReturn),
        _ => None,
    }
}

// constant = [0-9]+
fn match_constant(s: &str) -> Option<usize> {
    let digits = s.chars().take_while(|ch| ch.is_ascii_digit()).count();
    if digits == 0 {
        None
    } else {
        Some(digits)
    }
}

fn convert_constant(lexeme: &str) -> TokenKind {
    // The pattern admits decimal digits only; failing to parse here means
    // the recognizer and converter no longer agree.
    let value = lexeme
        .parse::<i32>()
        .expect("digit-only lexeme should parse as an integer");
    TokenKind::Constant(value)
}

fn match_punct(s: &str, punct: char) -> Option<usize> {
    if s.starts_with(punct) {
        Some(punct.len_utf8())
    } else {
        None
    }
}
