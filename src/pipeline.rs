//! Whole-unit compilation: source text in, dc text out

use crate::codegen::{render, CodeGenerator};
use crate::config::CompilerConfig;
use crate::parser::ast::Program;
use crate::parser::parse::{ParseError, Parser};
use crate::semantic::checker::TypeChecker;
use crate::semantic::errors::Diagnostics;
use crate::semantic::symbols::SymbolTable;

/// Result of a compilation that got past parsing
#[derive(Debug, Clone)]
pub struct Compilation {
    /// The checked (coerced and folded) program
    pub program: Program,
    pub diagnostics: Diagnostics,
    /// Generated dc code, one instruction per line
    pub output: String,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Compile one AcDc source.
///
/// Lexical and syntax errors abort with `Err`. Semantic errors are collected
/// in [`Compilation::diagnostics`] and code is generated regardless.
pub fn compile(source: &str, config: &CompilerConfig) -> Result<Compilation, ParseError> {
    let mut program = Parser::new(source).parse_program()?;

    let mut diagnostics = Diagnostics::new();
    let symbols =
        SymbolTable::build(&program.declarations, config.symbol_capacity, &mut diagnostics);
    TypeChecker::new(&symbols, &mut diagnostics).check_program(&mut program);

    let instructions = CodeGenerator::new(config).generate(&program);
    let output = render(&instructions);

    tracing::info!(
        declarations = program.declarations.len(),
        statements = program.statements.len(),
        diagnostics = diagnostics.len(),
        "compiled"
    );

    Ok(Compilation {
        program,
        diagnostics,
        output,
    })
}
