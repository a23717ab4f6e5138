use ncc::{lex, Error, Pos, TokenKind};

fn case(code: &str, expects: Vec<TokenKind>) {
    let tokens = lex(code).unwrap();

    println!(" {code}");
    for (idx, token) in tokens.iter().enumerate() {
        println!("{:>2}: {:?}", idx, token.kind);
    }

    assert_eq!(tokens.len(), expects.len());
    for (idx, expect) in expects.iter().enumerate() {
        assert_eq!(tokens[idx].kind, *expect);
    }
}

#[test]
fn keywords_and_punctuation() {
    use TokenKind::*;
    case(
        "int main(void) { return 2; }",
        vec![
            KwInt,
            Ident(format!("main")),
            LParen,
            KwVoid,
            RParen,
            LCurly,
            KwReturn,
            Constant(2),
            Semicolon,
            RCurly,
        ],
    );
}

#[test]
fn longest_match() {
    use TokenKind::*;
    // A keyword is never split into a shorter identifier plus a tail.
    case("return", vec![KwReturn]);
    case("returnx", vec![Ident(format!("returnx"))]);
    case("ret urn", vec![Ident(format!("ret")), Ident(format!("urn"))]);
    case("123", vec![Constant(123)]);
    case("1 23", vec![Constant(1), Constant(23)]);
}

#[test]
fn word_boundaries() {
    use TokenKind::*;
    case("123(", vec![Constant(123), LParen]);
    case("_int", vec![Ident(format!("_int"))]);
    case("int0", vec![Ident(format!("int0"))]);
}

#[test]
fn whitespace_invariance() {
    let a = lex("int main(void){return 0;}").unwrap();
    let b = lex("  int   main  ( void )  {  return  0  ;  }  ").unwrap();
    let a: Vec<_> = a.into_iter().map(|t| t.kind).collect();
    let b: Vec<_> = b.into_iter().map(|t| t.kind).collect();
    assert_eq!(a, b);
}

#[test]
fn determinism() {
    let src = "int main(void) { return 42; }";
    assert_eq!(lex(src).unwrap(), lex(src).unwrap());
}

#[test]
fn empty_input() {
    assert!(lex("").unwrap().is_empty());
    assert!(lex("   \n\t ").unwrap().is_empty());
}

#[test]
fn unknown_input() {
    let err = lex("int $ main").unwrap_err();
    match err {
        Error::UnknownToken(fragment) => assert!(fragment.starts_with('$')),
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn positions() {
    let tokens = lex("int\n  main").unwrap();
    assert_eq!(tokens[0].pos, Pos { line: 0, col: 0 });
    assert_eq!(tokens[1].pos, Pos { line: 1, col: 2 });
}
