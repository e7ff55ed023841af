//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing `f name` / `i name` declarations
//! - `statements`: Parsing assignments and print statements
//! - `expressions`: Parsing expressions with two precedence tiers
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! Lexemes are pulled from the [`Lexer`] on demand rather than tokenized up
//! front; when a production over-reads, the lexeme is handed back with
//! [`Parser::push_back`].

use crate::config::MAX_NAME_LEN;
use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexeme, LexemeKind, Lexer};
use std::str::Chars;
use thiserror::Error;

/// Parser error type. Both variants abort compilation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),

    #[error("Syntax error at {location}: {message}, found {found}")]
    Syntax {
        message: String,
        found: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>, found: &Lexeme) -> Self {
        ParseError::Syntax {
            message: message.into(),
            found: found.to_string(),
            location: found.location,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lexical(err) => err.location(),
            ParseError::Syntax { location, .. } => *location,
        }
    }
}

/// Recursive descent parser for AcDc
pub struct Parser<I: Iterator<Item = char>> {
    pub(crate) lexer: Lexer<I>,
}

impl<'a> Parser<Chars<'a>> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn from_lexer(lexer: Lexer<I>) -> Self {
        Self { lexer }
    }

    /// Parse the entire program: declarations, then statements
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let declarations = self.parse_declarations()?;
        let statements = self.parse_statements()?;

        tracing::debug!(
            declarations = declarations.len(),
            statements = statements.len(),
            "parsed program"
        );

        Ok(Program {
            declarations,
            statements,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn next_lexeme(&mut self) -> Result<Lexeme, ParseError> {
        let lexeme = self.lexer.next_lexeme()?;
        tracing::trace!(kind = ?lexeme.kind, text = %lexeme.text, "lexeme");
        Ok(lexeme)
    }

    pub(crate) fn push_back(&mut self, lexeme: &Lexeme) {
        self.lexer.unread(lexeme);
    }

    /// Validate a name lexeme against [`MAX_NAME_LEN`]
    pub(crate) fn bounded_name(&self, lexeme: &Lexeme) -> Result<String, ParseError> {
        if lexeme.text.chars().count() > MAX_NAME_LEN {
            return Err(ParseError::syntax(
                format!("Identifier longer than {MAX_NAME_LEN} characters"),
                lexeme,
            ));
        }
        Ok(lexeme.text.clone())
    }

    pub(crate) fn expect_identifier(
        &mut self,
        message: &str,
    ) -> Result<(String, SourceLocation), ParseError> {
        let lexeme = self.next_lexeme()?;
        if lexeme.kind != LexemeKind::Identifier {
            return Err(ParseError::syntax(message, &lexeme));
        }
        Ok((self.bounded_name(&lexeme)?, lexeme.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_program() {
        let mut parser = Parser::new("i a\nf b\na = 1\np a");
        let program = parser.parse_program().unwrap();

        assert_eq!(program.declarations.len(), 2);
        assert_eq!(program.declarations[0].ty, DataType::Int);
        assert_eq!(program.declarations[0].name, "a");
        assert_eq!(program.declarations[1].ty, DataType::Float);
        assert_eq!(program.declarations[1].name, "b");

        assert_eq!(program.statements.len(), 2);
        match &program.statements[0] {
            Statement::Assignment { target, expr, ty, .. } => {
                assert_eq!(target, "a");
                assert_eq!(expr.kind, ExprKind::IntLiteral(1));
                assert_eq!(*ty, None);
            }
            _ => panic!("Expected assignment"),
        }
        assert!(matches!(&program.statements[1], Statement::Print { name, .. } if name == "a"));
    }

    #[test]
    fn test_parse_empty_program() {
        let program = Parser::new("  \n ").parse_program().unwrap();
        assert_eq!(program, Program::new());
    }

    #[test]
    fn test_lexical_error_surfaces() {
        let err = Parser::new("i a\na = 1 % 2").parse_program().unwrap_err();
        assert!(matches!(err, ParseError::Lexical(LexError::InvalidCharacter { ch: '%', .. })));
    }

    #[test]
    fn test_name_too_long() {
        let source = format!("i {}", "a".repeat(MAX_NAME_LEN + 1));
        let err = Parser::new(&source).parse_program().unwrap_err();
        match err {
            ParseError::Syntax { message, .. } => assert!(message.contains("longer than")),
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_name_at_limit_is_accepted() {
        let name = "b".repeat(MAX_NAME_LEN);
        let source = format!("i {name}\np {name}");
        let program = Parser::new(&source).parse_program().unwrap();
        assert_eq!(program.declarations[0].name, name);
    }

    #[test]
    fn test_error_location() {
        let err = Parser::new("i a\n\na 1").parse_program().unwrap_err();
        assert_eq!(err.location(), SourceLocation::new(3, 3));
    }
}
