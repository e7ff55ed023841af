//! # Introduction
//!
//! A single-pass compiler from AcDc, a tiny typed calculator language, to
//! the postfix stack-machine language of `dc`.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Symbol table → Checker/Folder → Codegen → dc
//! ```
//!
//! 1. [`parser`]: scans the source (with whole-lexeme pushback) and builds
//!    the AST by recursive descent.
//! 2. [`semantic`]: builds the fixed-capacity symbol table, resolves types,
//!    inserts int → float coercions and folds constant subexpressions.
//! 3. [`codegen`]: lowers the checked AST to dc instructions.
//! 4. [`pipeline`]: runs all of the above for one source file.
//! 5. [`config`]: compile-time limits and the runtime [`config::CompilerConfig`].
//!
//! ## Language
//!
//! ```text
//! f b      declare float b
//! i a      declare int a
//! a = 1    assign
//! b = a + 2.5
//! p b      print
//! ```
//!
//! Lexical and syntax errors stop compilation. Semantic errors (undeclared
//! names, duplicate declarations, float → int narrowing) are reported as
//! diagnostics and code is still generated.

pub mod codegen;
pub mod config;
pub mod parser;
pub mod pipeline;
pub mod semantic;

pub use config::CompilerConfig;
pub use pipeline::{compile, Compilation};
