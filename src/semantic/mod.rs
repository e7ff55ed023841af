//! Semantic analysis for AcDc programs
//!
//! - [`symbols`]: fixed-capacity symbol table built from the declarations
//! - [`checker`]: type resolution, coercion insertion and constant folding
//! - [`type_system`]: generalization and coercion rules
//! - [`folding`]: literal evaluation of binary nodes
//! - [`errors`]: non-fatal [`errors::Diagnostic`]s

pub mod checker;
pub mod errors;
pub mod folding;
pub mod symbols;
pub mod type_system;
