//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statements ::= statement*
//! statement  ::= identifier "=" expression
//!              | "p" identifier
//! ```
//!
//! Statements are collected iteratively until end of file.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexeme, LexemeKind};
use crate::parser::parse::{ParseError, Parser};

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse statements until end of file
    pub(crate) fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        loop {
            let lexeme = self.next_lexeme()?;
            match lexeme.kind {
                LexemeKind::Identifier | LexemeKind::Print => {
                    statements.push(self.parse_statement(&lexeme)?);
                }
                LexemeKind::Eof => break,
                _ => return Err(ParseError::syntax("Expect statements", &lexeme)),
            }
        }

        Ok(statements)
    }

    /// Parse a statement whose first lexeme has already been read
    pub(crate) fn parse_statement(&mut self, first: &Lexeme) -> Result<Statement, ParseError> {
        match first.kind {
            LexemeKind::Identifier => {
                let target = self.bounded_name(first)?;

                let op = self.next_lexeme()?;
                if op.kind != LexemeKind::Assign {
                    return Err(ParseError::syntax("Expect an assignment op", &op));
                }

                let value = self.parse_value()?;
                let expr = self.parse_expression(value)?;

                Ok(Statement::Assignment {
                    target,
                    expr,
                    ty: None,
                    location: first.location,
                })
            }
            LexemeKind::Print => {
                let (name, _) = self.expect_identifier("Expect an identifier")?;
                Ok(Statement::Print {
                    name,
                    location: first.location,
                })
            }
            _ => Err(ParseError::syntax("Expect a statement", first)),
        }
    }
}
