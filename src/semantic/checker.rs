//! Type checking and constant folding over the parsed program
//!
//! The checker walks each statement's expression tree post-order. Leaves get
//! their types from the symbol table or their literal kind, binary nodes are
//! generalized, coerced and folded, and the assignment root is finally
//! coerced to the target's declared type. The tree is rewritten in place.
//!
//! Problems are reported to [`Diagnostics`]; checking always runs to the end.

use crate::parser::ast::{DataType, Expr, ExprKind, Program, SourceLocation, Statement};
use crate::semantic::errors::{Diagnostic, Diagnostics};
use crate::semantic::folding::fold_constants;
use crate::semantic::symbols::SymbolTable;
use crate::semantic::type_system::{coerce, generalize, Coercion};
use tracing::debug;

pub struct TypeChecker<'a> {
    symbols: &'a SymbolTable,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbols: &'a SymbolTable, diagnostics: &'a mut Diagnostics) -> Self {
        Self { symbols, diagnostics }
    }

    pub fn check_program(&mut self, program: &mut Program) {
        for stmt in &mut program.statements {
            self.check_statement(stmt);
        }
    }

    pub fn check_statement(&mut self, stmt: &mut Statement) {
        match stmt {
            Statement::Assignment {
                target,
                expr,
                ty,
                location,
            } => {
                debug!(target = %target, "assignment");
                self.check_expression(expr);
                *ty = self.resolve(target, *location);

                let Some(target_ty) = *ty else {
                    return;
                };
                match coerce(expr, target_ty) {
                    Coercion::Coerced => debug!(at = %expr.location, "convert to float"),
                    Coercion::Rejected => self.diagnostics.report(Diagnostic::Narrowing {
                        target: target.clone(),
                        location: *location,
                    }),
                    Coercion::Unchanged => {}
                }
            }
            Statement::Print { name, location } => {
                debug!(name = %name, "print");
                self.resolve(name, *location);
            }
        }
    }

    pub fn check_expression(&mut self, expr: &mut Expr) {
        let location = expr.location;

        let (ty, folded) = match &mut expr.kind {
            ExprKind::Identifier(name) => {
                debug!(name = %name, "identifier");
                (self.resolve(name, location), None)
            }
            ExprKind::IntLiteral(_) => {
                debug!("constant : int");
                (Some(DataType::Int), None)
            }
            ExprKind::FloatLiteral(_) => {
                debug!("constant : float");
                (Some(DataType::Float), None)
            }
            ExprKind::Coercion(inner) => {
                self.check_expression(inner);
                (Some(DataType::Float), None)
            }
            ExprKind::Binary { op, left, right } => {
                self.check_expression(left);
                self.check_expression(right);

                let ty = generalize(left.ty, right.ty);
                debug!(%ty, "generalize");

                let left_coerced = Self::coerce_operand(left, ty);
                let right_coerced = Self::coerce_operand(right, ty);

                let folded = fold_constants(*op, left, right, left_coerced, right_coerced);
                if let Some(kind) = &folded {
                    debug!(op = %op.symbol(), result = ?kind, "folded");
                }
                (Some(ty), folded)
            }
        };

        expr.ty = ty;
        if let Some(kind) = folded {
            expr.kind = kind;
        }
    }

    /// Coerce a binary operand to the generalized type. Operands are never
    /// narrowed here, since `generalize` only widens. Returns true if a
    /// coercion node was inserted.
    fn coerce_operand(operand: &mut Expr, target: DataType) -> bool {
        let coerced = coerce(operand, target) == Coercion::Coerced;
        if coerced {
            debug!(at = %operand.location, "convert to float");
        }
        coerced
    }

    fn resolve(&mut self, name: &str, location: SourceLocation) -> Option<DataType> {
        match self.symbols.lookup(name, location) {
            Ok(ty) => Some(ty),
            Err(diagnostic) => {
                self.diagnostics.report(diagnostic);
                None
            }
        }
    }
}
