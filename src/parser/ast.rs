// AST (Abstract Syntax Tree) definitions for the AcDc compiler

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Declared or resolved type of a variable or expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Float,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::Float => write!(f, "float"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

/// A single `f name` / `i name` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub ty: DataType,
    pub name: String,
    pub location: SourceLocation,
}

/// Expression node shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Identifier(String),
    IntLiteral(i32),
    FloatLiteral(f32),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Implicit int -> float conversion inserted by the checker
    Coercion(Box<Expr>),
}

/// Expression tree node.
///
/// `ty` stays `None` until the checker resolves it, and remains `None` for
/// identifiers that never made it into the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Option<DataType>,
    pub location: SourceLocation,
}

impl Expr {
    pub fn new(kind: ExprKind, location: SourceLocation) -> Self {
        Self {
            kind,
            ty: None,
            location,
        }
    }

    pub fn identifier(name: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(ExprKind::Identifier(name.into()), location)
    }

    pub fn int(value: i32, location: SourceLocation) -> Self {
        Self::new(ExprKind::IntLiteral(value), location)
    }

    pub fn float(value: f32, location: SourceLocation) -> Self {
        Self::new(ExprKind::FloatLiteral(value), location)
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr, location: SourceLocation) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            location,
        )
    }

    /// True for identifiers and literals
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Identifier(_) | ExprKind::IntLiteral(_) | ExprKind::FloatLiteral(_)
        )
    }

    /// Wrap this node in a [`ExprKind::Coercion`] to `target`, in place.
    pub fn wrap_in_coercion(&mut self, target: DataType) {
        let location = self.location;
        let inner = std::mem::replace(self, Expr::int(0, location));
        *self = Expr {
            kind: ExprKind::Coercion(Box::new(inner)),
            ty: Some(target),
            location,
        };
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Print {
        name: String,
        location: SourceLocation,
    },
    Assignment {
        target: String,
        expr: Expr,
        /// Declared type of `target`, filled in by the checker
        ty: Option<DataType>,
        location: SourceLocation,
    },
}

impl Statement {
    /// Get the source location of this statement
    pub fn location(&self) -> &SourceLocation {
        match self {
            Statement::Print { location, .. } => location,
            Statement::Assignment { location, .. } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
