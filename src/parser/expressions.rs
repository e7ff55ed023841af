//! Expression parsing implementation
//!
//! Two precedence tiers, no precedence table:
//!
//! ```text
//! expression ::= value (("*" | "/") value)* (("+" | "-") term)*
//! term       ::= value (("*" | "/") value)*
//! value      ::= identifier | int-literal | float-literal
//! ```
//!
//! [`Parser::parse_expression`] runs the loose `+ -` loop. After a `+` or `-`
//! it parses one value and lets [`Parser::parse_term_tail`] absorb any `* /`
//! that follow, so `2+3*4` groups as `2+(3*4)`. Both tiers are
//! left-associative. An expression ends at an identifier or `p` (pushed back
//! for the next statement) or at end of file.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexeme, LexemeKind, Literal};
use crate::parser::parse::{ParseError, Parser};

fn binary_op(lexeme: &Lexeme) -> Option<BinOp> {
    match lexeme.kind {
        LexemeKind::Plus => Some(BinOp::Add),
        LexemeKind::Minus => Some(BinOp::Sub),
        LexemeKind::Star => Some(BinOp::Mul),
        LexemeKind::Slash => Some(BinOp::Div),
        _ => None,
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Parse a single value: identifier or numeric literal
    pub(crate) fn parse_value(&mut self) -> Result<Expr, ParseError> {
        let lexeme = self.next_lexeme()?;
        let loc = lexeme.location;

        match (lexeme.kind, lexeme.literal) {
            (LexemeKind::Identifier, _) => Ok(Expr::identifier(self.bounded_name(&lexeme)?, loc)),
            (_, Some(Literal::Int(value))) => Ok(Expr::int(value, loc)),
            (_, Some(Literal::Float(value))) => Ok(Expr::float(value, loc)),
            _ => Err(ParseError::syntax("Expect Identifier or a Number", &lexeme)),
        }
    }

    /// Parse the rest of an expression whose first value is `left`
    pub(crate) fn parse_expression(&mut self, mut left: Expr) -> Result<Expr, ParseError> {
        loop {
            let lexeme = self.next_lexeme()?;
            let location = lexeme.location;
            match binary_op(&lexeme) {
                Some(op @ (BinOp::Mul | BinOp::Div)) => {
                    let right = self.parse_value()?;
                    left = Expr::binary(op, left, right, location);
                }
                Some(op) => {
                    let value = self.parse_value()?;
                    let right = self.parse_term_tail(value)?;
                    left = Expr::binary(op, left, right, location);
                }
                None => return self.end_expression(lexeme, left),
            }
        }
    }

    /// Absorb `* /` operations following `left`; stop before `+ -`
    pub(crate) fn parse_term_tail(&mut self, mut left: Expr) -> Result<Expr, ParseError> {
        loop {
            let lexeme = self.next_lexeme()?;
            match binary_op(&lexeme) {
                Some(op @ (BinOp::Mul | BinOp::Div)) => {
                    let right = self.parse_value()?;
                    left = Expr::binary(op, left, right, lexeme.location);
                }
                Some(_) => {
                    self.push_back(&lexeme);
                    return Ok(left);
                }
                None => return self.end_expression(lexeme, left),
            }
        }
    }

    /// Handle a non-operator lexeme after a complete operand
    fn end_expression(&mut self, lexeme: Lexeme, left: Expr) -> Result<Expr, ParseError> {
        match lexeme.kind {
            LexemeKind::Identifier | LexemeKind::Print => {
                self.push_back(&lexeme);
                Ok(left)
            }
            LexemeKind::Eof => Ok(left),
            _ => Err(ParseError::syntax(
                "Expect a numeric value or an identifier",
                &lexeme,
            )),
        }
    }
}
