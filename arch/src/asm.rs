use std::fmt;

/// Platform-independent assembly program.
#[derive(Debug, Clone, PartialEq)]
pub enum Asm {
    Program(Function),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub label: String,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Mov(Operand, Operand), // movl src, dst
    Ret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Imm(i32), // '$' immediate
    Reg,      // return value register
}

// Operand syntax is shared by every target; label naming and framing are not.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Imm(value) => write!(f, "${}", value),
            Operand::Reg => write!(f, "%eax"),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Operand::Imm(42).to_string(), "$42");
    assert_eq!(Operand::Imm(-1).to_string(), "$-1");
    assert_eq!(Operand::Reg.to_string(), "%eax");
}
