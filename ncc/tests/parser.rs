use ncc::{lex, Error, Expr, Parser, Program, Stmt};

fn parse(code: &str) -> Result<Program, Error> {
    let tokens = lex(code).unwrap();
    Parser::new(&tokens).parse()
}

macro_rules! accept {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            let program = parse($code);
            println!("{:#?}", program);
            assert!(program.is_ok(), "Errors found: {:?}", program);
        }
    };
}

macro_rules! reject {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            let err = parse($code).unwrap_err();
            println!("{:?}", err);
            assert!(matches!(err, Error::UnexpectedToken { .. }));
        }
    };
}

accept!(minimal, "int main(void) { return 0; }");
accept!(spread_out, " int   main ( void ) { return  42 ; } ");
accept!(underscore_name, "int _start(void) { return 1; }");

// Malformed programs fail on the mismatching token.
reject!(missing_semicolon, "int main(void) { return 0 }");
reject!(missing_void, "int main() { return 0; }");
reject!(keyword_as_name, "int return(void) { return 0; }");
reject!(expression_not_constant, "int main(void) { return x; }");
reject!(trailing_tokens, "int main(void) { return 0; };");

#[test]
fn ast_shape() {
    let program = parse("int main(void) { return 2; }").unwrap();
    assert_eq!(program.0.name, "main");
    assert_eq!(program.0.body, Stmt::Return(Expr::Constant(2)));
}

// A truncated stream is diagnosed as running out of input, not as a
// token mismatch.
#[test]
fn truncated_stream() {
    for code in ["int main", "int main(void) {", "int main(void) { return 0;"] {
        let err = parse(code).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEOF), "{code:?}: {err:?}");
    }
}

#[test]
fn empty_stream() {
    let err = Parser::new(&[]).parse().unwrap_err();
    assert!(matches!(err, Error::UnexpectedEOF));
}
