//! AcDc source code parser
//!
//! This module transforms AcDc source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Scanning (characters → lexemes, with whole-lexeme pushback)
//! - [`parse`]: Parser struct, error type and helpers
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Declarations: `f name` (float), `i name` (int), all before any statement
//! - Statements: `name = expression`, `p name`
//! - Expressions: identifiers, int and float literals, `+ - * /`
//! - `f`, `i` and `p` are reserved; every other lowercase run is an identifier
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with two precedence tiers.
//! Lexical and syntax errors are fatal and returned as [`parse::ParseError`].

pub mod ast;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;
