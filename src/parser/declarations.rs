//! Declaration parsing implementation
//!
//! # Grammar
//!
//! ```text
//! declarations ::= declaration*
//! declaration  ::= ("f" | "i") identifier
//! ```
//!
//! The declaration section ends at the first identifier, `p` or end of file.
//! An identifier or `p` is pushed back so the statement parser sees it again.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexeme, LexemeKind};
use crate::parser::parse::{ParseError, Parser};

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse declarations until the statement section starts
    pub(crate) fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            let lexeme = self.next_lexeme()?;
            match lexeme.kind {
                LexemeKind::FloatDeclaration | LexemeKind::IntegerDeclaration => {
                    declarations.push(self.parse_declaration(&lexeme)?);
                }
                LexemeKind::Identifier | LexemeKind::Print => {
                    self.push_back(&lexeme);
                    break;
                }
                LexemeKind::Eof => break,
                _ => return Err(ParseError::syntax("Expect declarations", &lexeme)),
            }
        }

        Ok(declarations)
    }

    /// Parse the name following a declaration keyword
    pub(crate) fn parse_declaration(
        &mut self,
        keyword: &Lexeme,
    ) -> Result<Declaration, ParseError> {
        let ty = match keyword.kind {
            LexemeKind::FloatDeclaration => DataType::Float,
            LexemeKind::IntegerDeclaration => DataType::Int,
            _ => return Err(ParseError::syntax("Expect Declaration", keyword)),
        };

        let name = self.next_lexeme()?;
        match name.kind {
            LexemeKind::FloatDeclaration | LexemeKind::IntegerDeclaration | LexemeKind::Print => {
                return Err(ParseError::syntax("Reserved letter cannot be used as id", &name));
            }
            LexemeKind::Identifier => {}
            _ => return Err(ParseError::syntax("Expect an identifier", &name)),
        }

        Ok(Declaration {
            ty,
            name: self.bounded_name(&name)?,
            location: keyword.location,
        })
    }
}
