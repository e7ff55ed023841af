// Lowers a checked program to dc instructions

use super::instruction::Instruction;
use crate::config::{CompilerConfig, COERCION_DIRECTIVE, POST_STORE_DIRECTIVE};
use crate::parser::ast::{Expr, ExprKind, Program, Statement};

pub struct CodeGenerator {
    coercion_scale: bool,
    instructions: Vec<Instruction>,
}

impl CodeGenerator {
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            coercion_scale: config.coercion_scale,
            instructions: Vec::new(),
        }
    }

    /// Emit code for every statement in source order
    pub fn generate(mut self, program: &Program) -> Vec<Instruction> {
        for stmt in &program.statements {
            self.emit_statement(stmt);
        }
        tracing::debug!(instructions = self.instructions.len(), "generated code");
        self.instructions
    }

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Print { name, .. } => {
                self.instructions.push(Instruction::Load(name.clone()));
                self.instructions.push(Instruction::Print);
            }
            Statement::Assignment { target, expr, .. } => {
                self.emit_expression(expr);
                self.instructions.push(Instruction::Store(target.clone()));
                self.instructions.push(Instruction::Directive(POST_STORE_DIRECTIVE));
            }
        }
    }

    fn emit_expression(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Identifier(name) => self.instructions.push(Instruction::Load(name.clone())),
            ExprKind::IntLiteral(value) => self.instructions.push(Instruction::PushInt(*value)),
            ExprKind::FloatLiteral(value) => self.instructions.push(Instruction::PushFloat(*value)),
            ExprKind::Binary { op, left, right } => {
                self.emit_expression(left);
                self.emit_expression(right);
                self.instructions.push(Instruction::Op(*op));
            }
            ExprKind::Coercion(inner) => {
                self.emit_expression(inner);
                if self.coercion_scale {
                    self.instructions.push(Instruction::Directive(COERCION_DIRECTIVE));
                }
            }
        }
    }
}

/// Join instructions one per line, each terminated by `\n`
pub fn render(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for instruction in instructions {
        out.push_str(&instruction.to_string());
        out.push('\n');
    }
    out
}
