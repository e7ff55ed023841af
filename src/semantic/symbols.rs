//! Symbol table: name → declared type
//!
//! A fixed-capacity, open-addressed table with linear probing. Slots are
//! indexed by the djb2 hash of the name modulo the capacity. The table is
//! built once from the declaration list and read-only afterwards.
//!
//! The capacity is a ceiling, not a hint: the table never grows. Probing
//! visits at most `capacity` slots, so a full table reports
//! [`Diagnostic::SymbolTableFull`] on insert and "not declared" on a missed
//! lookup instead of probing forever.

use crate::parser::ast::{DataType, Declaration, SourceLocation};
use crate::semantic::errors::{Diagnostic, Diagnostics};

/// djb2: `h = h * 33 + byte`, seeded with 5381
pub fn djb2(name: &str) -> u64 {
    name.bytes()
        .fold(5381u64, |hash, byte| hash.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Empty,
    Occupied { name: String, ty: DataType },
}

/// Outcome of probing for a name
enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    slots: Vec<Slot>,
    len: usize,
}

impl SymbolTable {
    /// Create an empty table with exactly `capacity` slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity.max(1)],
            len: 0,
        }
    }

    /// Build a table from declarations in source order.
    ///
    /// Duplicate and overflow errors go to `diagnostics`; the first
    /// declaration of a name wins.
    pub fn build(
        declarations: &[Declaration],
        capacity: usize,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut table = Self::with_capacity(capacity);
        for decl in declarations {
            if let Err(diagnostic) = table.insert(&decl.name, decl.ty, decl.location) {
                diagnostics.report(diagnostic);
            }
        }
        tracing::debug!(symbols = table.len(), capacity = table.capacity(), "built symbol table");
        table
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Home slot of `name`
    pub fn hash(&self, name: &str) -> usize {
        (djb2(name) % self.capacity() as u64) as usize
    }

    /// Declare `name`. An existing entry is left untouched.
    pub fn insert(
        &mut self,
        name: &str,
        ty: DataType,
        location: SourceLocation,
    ) -> Result<(), Diagnostic> {
        match self.probe(name) {
            Probe::Found(_) => Err(Diagnostic::DuplicateDeclaration {
                name: name.to_string(),
                location,
            }),
            Probe::Vacant(index) => {
                self.slots[index] = Slot::Occupied {
                    name: name.to_string(),
                    ty,
                };
                self.len += 1;
                Ok(())
            }
            Probe::Full => Err(Diagnostic::SymbolTableFull {
                name: name.to_string(),
                capacity: self.capacity(),
                location,
            }),
        }
    }

    /// Resolve `name`, reporting it as undeclared when missing
    pub fn lookup(&self, name: &str, location: SourceLocation) -> Result<DataType, Diagnostic> {
        self.get(name).ok_or_else(|| Diagnostic::UndeclaredIdentifier {
            name: name.to_string(),
            location,
        })
    }

    /// Resolve `name` without producing a diagnostic
    pub fn get(&self, name: &str) -> Option<DataType> {
        match self.probe(name) {
            Probe::Found(index) => match &self.slots[index] {
                Slot::Occupied { ty, .. } => Some(*ty),
                Slot::Empty => None,
            },
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    fn probe(&self, name: &str) -> Probe {
        let capacity = self.capacity();
        let start = self.hash(name);

        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(index),
                Slot::Occupied { name: existing, .. } if existing == name => {
                    return Probe::Found(index);
                }
                Slot::Occupied { .. } => {}
            }
        }

        Probe::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SYMBOL_TABLE_CAPACITY;
    use crate::semantic::errors::DiagnosticKind;
    use rustc_hash::FxHashMap;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
        assert_eq!(djb2("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::with_capacity(SYMBOL_TABLE_CAPACITY);
        table.insert("a", DataType::Int, loc()).unwrap();
        table.insert("b", DataType::Float, loc()).unwrap();

        assert_eq!(table.lookup("a", loc()), Ok(DataType::Int));
        assert_eq!(table.lookup("b", loc()), Ok(DataType::Float));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut table = SymbolTable::with_capacity(SYMBOL_TABLE_CAPACITY);
        table.insert("a", DataType::Int, loc()).unwrap();
        let err = table.insert("a", DataType::Float, loc()).unwrap_err();

        assert_eq!(err.kind(), DiagnosticKind::Declaration);
        assert_eq!(table.get("a"), Some(DataType::Int));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_undeclared() {
        let table = SymbolTable::with_capacity(SYMBOL_TABLE_CAPACITY);
        let err = table.lookup("x", loc()).unwrap_err();
        assert!(matches!(err, Diagnostic::UndeclaredIdentifier { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_collisions_probe_linearly() {
        // With two slots, every name collides with something
        let mut table = SymbolTable::with_capacity(2);
        table.insert("a", DataType::Int, loc()).unwrap();
        table.insert("b", DataType::Float, loc()).unwrap();

        assert_eq!(table.get("a"), Some(DataType::Int));
        assert_eq!(table.get("b"), Some(DataType::Float));
    }

    #[test]
    fn test_full_table_does_not_hang() {
        let mut table = SymbolTable::with_capacity(2);
        table.insert("a", DataType::Int, loc()).unwrap();
        table.insert("b", DataType::Int, loc()).unwrap();

        let err = table.insert("c", DataType::Int, loc()).unwrap_err();
        assert!(matches!(err, Diagnostic::SymbolTableFull { capacity: 2, .. }));
        assert!(table.lookup("c", loc()).is_err());
    }

    #[test]
    fn test_build_reports_duplicates() {
        let declarations = vec![
            Declaration {
                ty: DataType::Int,
                name: "a".to_string(),
                location: loc(),
            },
            Declaration {
                ty: DataType::Float,
                name: "a".to_string(),
                location: SourceLocation::new(2, 1),
            },
        ];
        let mut diagnostics = Diagnostics::new();
        let table = SymbolTable::build(&declarations, SYMBOL_TABLE_CAPACITY, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].location(), SourceLocation::new(2, 1));
        assert_eq!(table.get("a"), Some(DataType::Int));
    }

    #[test]
    fn test_agrees_with_hash_map() {
        let names: Vec<String> = (0..40)
            .map(|i| {
                let mut name = String::new();
                let mut n = i + 26;
                while n > 0 {
                    name.push((b'a' + (n % 26) as u8) as char);
                    n /= 26;
                }
                name
            })
            .collect();

        let mut table = SymbolTable::with_capacity(SYMBOL_TABLE_CAPACITY);
        let mut model = FxHashMap::default();
        for (i, name) in names.iter().enumerate() {
            let ty = if i % 3 == 0 { DataType::Float } else { DataType::Int };
            let inserted = table.insert(name, ty, loc()).is_ok();
            assert_eq!(inserted, !model.contains_key(name));
            model.entry(name.clone()).or_insert(ty);
        }

        for (name, ty) in &model {
            assert_eq!(table.get(name), Some(*ty));
        }
        assert_eq!(table.len(), model.len());
    }
}
