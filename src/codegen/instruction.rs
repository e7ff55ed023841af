// dc instruction set emitted by the code generator

use crate::parser::ast::BinOp;
use std::fmt;

/// One line of dc output
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `l<name>`: push the value of register `name`
    Load(String),
    /// `s<name>`: pop into register `name`
    Store(String),
    /// `p`: print the top of the stack
    Print,
    PushInt(i32),
    /// Always rendered with one fractional digit
    PushFloat(f32),
    Op(BinOp),
    /// Fixed text such as a precision reset
    Directive(&'static str),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Load(name) => write!(f, "l{}", name),
            Instruction::Store(name) => write!(f, "s{}", name),
            Instruction::Print => write!(f, "p"),
            Instruction::PushInt(value) => write!(f, "{}", value),
            Instruction::PushFloat(value) => write!(f, "{:.1}", value),
            Instruction::Op(op) => write!(f, "{}", op.symbol()),
            Instruction::Directive(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(Instruction::Load("ab".to_string()).to_string(), "lab");
        assert_eq!(Instruction::Store("a".to_string()).to_string(), "sa");
        assert_eq!(Instruction::Print.to_string(), "p");
        assert_eq!(Instruction::PushInt(-7).to_string(), "-7");
        assert_eq!(Instruction::Op(BinOp::Div).to_string(), "/");
        assert_eq!(Instruction::Directive("0 k").to_string(), "0 k");
    }

    #[test]
    fn test_float_has_one_fractional_digit() {
        assert_eq!(Instruction::PushFloat(2.5).to_string(), "2.5");
        assert_eq!(Instruction::PushFloat(3.0).to_string(), "3.0");
        assert_eq!(Instruction::PushFloat(1.96).to_string(), "2.0");
    }
}
