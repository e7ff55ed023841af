//! dc code generation
//!
//! Walks the checked AST and produces one [`instruction::Instruction`] per
//! output line. Expressions are emitted post-order, which is exactly dc's
//! postfix form.
//!
//! | Node           | Output                                   |
//! |----------------|------------------------------------------|
//! | identifier     | `l<name>`                                |
//! | int literal    | decimal                                  |
//! | float literal  | one fractional digit                     |
//! | binary         | left, right, operator                    |
//! | coercion       | child, then `5k` unless disabled         |
//! | `x = e`        | `e`, `sx`, `0 k`                         |
//! | `p x`          | `lx`, `p`                                |

pub mod generator;
pub mod instruction;

pub use generator::{render, CodeGenerator};
pub use instruction::Instruction;
