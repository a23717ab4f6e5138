//! Rendering of the assembly representation into target-specific text.

use std::fs;
use std::path::Path;

use arch::asm::{Asm, Function, Instruction};
use arch::platform::Platform;

use crate::error::Error;

/// Render the program and write it out in a single write.
pub fn emit_assembly(path: &Path, asm: &Asm, target: Platform) -> Result<(), Error> {
    fs::write(path, render(asm, target)).map_err(Error::Emit)
}

/// Render the full assembly text for the given target.
pub fn render(asm: &Asm, target: Platform) -> String {
    match asm {
        Asm::Program(function) => render_function(function, target),
    }
}

fn render_function(function: &Function, target: Platform) -> String {
    let label = match target {
        Platform::Linux => function.label.clone(),
        Platform::Osx => format!("_{}", function.label), // Mach-O symbol prefix
    };

    let mut text = String::new();
    match target {
        Platform::Linux => {
            text.push_str(&format!("\t.globl {label}\n"));
            text.push_str(&format!("{label}:\n"));
            for inst in &function.instructions {
                render_instruction(&mut text, inst, target);
            }
            // The program does not need an executable stack.
            text.push_str("\t.section .note.GNU-stack,\"\",@progbits\n");
        }
        Platform::Osx => {
            text.push_str("\t.section __TEXT,__text,regular,pure_instructions\n");
            text.push_str(&format!("\t.globl {label}\n"));
            text.push_str("\t.p2align 4, 0x90\n"); // 16-byte aligned entry
            text.push_str(&format!("{label}:\n"));
            text.push_str("\tpushq %rbp\n");
            text.push_str("\tmovq %rsp, %rbp\n");
            for inst in &function.instructions {
                render_instruction(&mut text, inst, target);
            }
            text.push_str("\tpopq %rbp\n");
            text.push_str("\tretq\n");
            text.push_str(".subsections_via_symbols\n");
        }
    }
    text
}

fn render_instruction(text: &mut String, inst: &Instruction, target: Platform) {
    match inst {
        Instruction::Mov(src, dst) => {
            text.push_str(&format!("\tmovl {src}, {dst}\n"));
        }
        Instruction::Ret => match target {
            Platform::Linux => text.push_str("\tret\n"),
            // The fixed epilogue restores %rbp and returns.
            Platform::Osx => {}
        },
    }
}
