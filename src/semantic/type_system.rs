//! Type generalization and int → float coercion
//!
//! # Rules
//!
//! - Literals have their natural type; identifiers take their declared type
//! - A binary operation is `float` if either operand is `float`, else `int`
//! - An `int` operand of a `float` operation is wrapped in a coercion node
//! - `float` never narrows to `int` implicitly

use crate::parser::ast::{DataType, Expr};

/// Result of trying to coerce an expression to a target type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Already the target type, or untyped
    Unchanged,
    /// Wrapped in an int → float coercion node
    Coerced,
    /// A float where an int is required; left as-is
    Rejected,
}

/// Result type of combining two operands
pub fn generalize(left: Option<DataType>, right: Option<DataType>) -> DataType {
    if left == Some(DataType::Float) || right == Some(DataType::Float) {
        DataType::Float
    } else {
        DataType::Int
    }
}

/// Coerce `expr` to `target` in place
pub fn coerce(expr: &mut Expr, target: DataType) -> Coercion {
    match (expr.ty, target) {
        (Some(DataType::Float), DataType::Int) => Coercion::Rejected,
        (Some(DataType::Int), DataType::Float) => {
            expr.wrap_in_coercion(DataType::Float);
            Coercion::Coerced
        }
        _ => Coercion::Unchanged,
    }
}
