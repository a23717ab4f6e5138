//! Lowering of the AST into the platform-independent assembly
//! representation.

use arch::asm::{Asm, Function, Instruction, Operand};

use crate::grammer::ast;

/// Lower a parsed program. Total over well-formed ASTs; malformed input
/// never reaches this pass.
pub fn generate(program: &ast::Program) -> Asm {
    Asm::Program(generate_function(&program.0))
}

fn generate_function(function: &ast::Function) -> Function {
    let mut instructions = Vec::new();

    match &function.body {
        ast::Stmt::Return(expr) => {
            instructions.push(Instruction::Mov(generate_operand(expr), Operand::Reg));
            instructions.push(Instruction::Ret);
        }
    }

    Function {
        // The name becomes the externally visible symbol.
        label: function.name.clone(),
        instructions,
    }
}

fn generate_operand(expr: &ast::Expr) -> Operand {
    match expr {
        ast::Expr::Constant(value) => Operand::Imm(*value),
    }
}
