//! Semantic diagnostics for the AcDc compiler
//!
//! This module defines [`Diagnostic`], the errors found after parsing:
//! duplicate declarations, undeclared identifiers and float → int narrowing.
//!
//! Unlike lexical and syntax errors, none of these stop compilation. They are
//! collected in [`Diagnostics`] and code is still generated.

use crate::parser::ast::SourceLocation;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Semantic errors reported during symbol table construction and type checking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// Same name declared twice; the first declaration is kept
    #[error("id {name} has been declared (at {location})")]
    DuplicateDeclaration {
        name: String,
        location: SourceLocation,
    },

    /// Name used without a declaration
    #[error("identifier {name} is not declared (at {location})")]
    UndeclaredIdentifier {
        name: String,
        location: SourceLocation,
    },

    /// Float-typed expression assigned to an int variable
    #[error("can't convert float to integer when assigning to {target} (at {location})")]
    Narrowing {
        target: String,
        location: SourceLocation,
    },

    /// No free slot left in the fixed-capacity symbol table
    #[error("symbol table full ({capacity} slots), cannot declare {name} (at {location})")]
    SymbolTableFull {
        name: String,
        capacity: usize,
        location: SourceLocation,
    },
}

/// Diagnostic categories, for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Declaration,
    Reference,
    Type,
    Capacity,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::DuplicateDeclaration { .. } => DiagnosticKind::Declaration,
            Diagnostic::UndeclaredIdentifier { .. } => DiagnosticKind::Reference,
            Diagnostic::Narrowing { .. } => DiagnosticKind::Type,
            Diagnostic::SymbolTableFull { .. } => DiagnosticKind::Capacity,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Diagnostic::DuplicateDeclaration { location, .. }
            | Diagnostic::UndeclaredIdentifier { location, .. }
            | Diagnostic::Narrowing { location, .. }
            | Diagnostic::SymbolTableFull { location, .. } => *location,
        }
    }
}

/// Ordered collection of reported diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = ?diagnostic.kind(), "{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Number of diagnostics per category
    pub fn counts_by_kind(&self) -> FxHashMap<DiagnosticKind, usize> {
        let mut counts = FxHashMap::default();
        for diagnostic in &self.items {
            *counts.entry(diagnostic.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
