//! Constant folding
//!
//! Applied to one binary node right after its operands were coerced. A node
//! folds when both operands are literals once coercions are looked through:
//!
//! - no coercion: `int op int` or `float op float`
//! - one side coerced: the coerced side wraps an int literal and the other
//!   side is a float literal; the result is a float
//! - both sides coerced: never folded
//!
//! Integer arithmetic wraps on overflow. Integer division by zero (and
//! `i32::MIN / -1`) is left for the target machine to evaluate.

use crate::parser::ast::{BinOp, Expr, ExprKind};

/// Literal replacing the binary node, if it can be computed now
pub fn fold_constants(
    op: BinOp,
    left: &Expr,
    right: &Expr,
    left_coerced: bool,
    right_coerced: bool,
) -> Option<ExprKind> {
    match (left_coerced, right_coerced) {
        (false, false) => match (&left.kind, &right.kind) {
            (ExprKind::IntLiteral(a), ExprKind::IntLiteral(b)) => {
                fold_ints(op, *a, *b).map(ExprKind::IntLiteral)
            }
            (ExprKind::FloatLiteral(a), ExprKind::FloatLiteral(b)) => {
                Some(ExprKind::FloatLiteral(fold_floats(op, *a, *b)))
            }
            _ => None,
        },
        (true, false) => match (coerced_int(left), &right.kind) {
            (Some(a), ExprKind::FloatLiteral(b)) => {
                Some(ExprKind::FloatLiteral(fold_floats(op, a as f32, *b)))
            }
            _ => None,
        },
        (false, true) => match (&left.kind, coerced_int(right)) {
            (ExprKind::FloatLiteral(a), Some(b)) => {
                Some(ExprKind::FloatLiteral(fold_floats(op, *a, b as f32)))
            }
            _ => None,
        },
        (true, true) => None,
    }
}

/// Value of an int literal nested directly inside a coercion node
fn coerced_int(expr: &Expr) -> Option<i32> {
    match &expr.kind {
        ExprKind::Coercion(inner) => match inner.kind {
            ExprKind::IntLiteral(value) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

fn fold_ints(op: BinOp, a: i32, b: i32) -> Option<i32> {
    match op {
        BinOp::Add => Some(a.wrapping_add(b)),
        BinOp::Sub => Some(a.wrapping_sub(b)),
        BinOp::Mul => Some(a.wrapping_mul(b)),
        BinOp::Div => {
            let quotient = a.checked_div(b);
            if quotient.is_none() {
                tracing::warn!(dividend = a, divisor = b, "integer division not folded");
            }
            quotient
        }
    }
}

fn fold_floats(op: BinOp, a: f32, b: f32) -> f32 {
    match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
    }
}
