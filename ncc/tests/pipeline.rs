use arch::asm::{Asm, Instruction, Operand};
use ncc::{generate, lex, Parser};

fn compile(code: &str) -> Asm {
    let tokens = lex(code).unwrap();
    let ast = Parser::new(&tokens).parse().unwrap();
    generate(&ast)
}

#[test]
fn round_trip() {
    let Asm::Program(function) = compile("int main(void) { return 42; }");

    assert_eq!(function.label, "main");
    assert_eq!(
        function.instructions,
        vec![
            Instruction::Mov(Operand::Imm(42), Operand::Reg),
            Instruction::Ret,
        ]
    );
}

#[test]
fn label_is_verbatim() {
    let Asm::Program(function) = compile("int my_func(void) { return 0; }");
    assert_eq!(function.label, "my_func");
}

#[test]
fn return_is_two_instructions() {
    let Asm::Program(function) = compile("int f(void) { return 7; }");
    assert_eq!(function.instructions.len(), 2);
    assert_eq!(function.instructions[1], Instruction::Ret);
}
