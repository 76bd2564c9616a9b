//! Field value types.
//!
//! This module defines the runtime representation of an enum field as it sits
//! on a document, and the two storage shapes a backing field can take.

use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Storage shape of a backing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Exactly one symbol (scalar mode).
    Symbol,

    /// Ordered, duplicate-free collection of symbols (set mode).
    SymbolSet,
}

/// Runtime representation of a field value.
///
/// Assignment is unchecked, so any shape can end up in any field. The
/// validators decide what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Symbol(Symbol),
    Set(SymbolSet),
    /// Unset.
    #[default]
    Nil,
}

impl FieldValue {
    pub fn symbol(name: impl Into<Symbol>) -> Self {
        FieldValue::Symbol(name.into())
    }

    pub fn set<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        FieldValue::Set(names.into_iter().map(Into::into).collect())
    }

    pub fn empty_set() -> Self {
        FieldValue::Set(SymbolSet::new())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, FieldValue::Nil)
    }

    /// Check if this value counts as "present".
    ///
    /// - Symbol: always
    /// - Set: when non-empty
    /// - Nil: never
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Symbol(_) => true,
            FieldValue::Set(set) => !set.is_empty(),
            FieldValue::Nil => false,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            FieldValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SymbolSet> {
        match self {
            FieldValue::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Whether this value fits a field of the given type. `Nil` fits both.
    pub fn fits(&self, ty: FieldType) -> bool {
        matches!(
            (self, ty),
            (FieldValue::Nil, _)
                | (FieldValue::Symbol(_), FieldType::Symbol)
                | (FieldValue::Set(_), FieldType::SymbolSet)
        )
    }
}

impl From<Symbol> for FieldValue {
    fn from(sym: Symbol) -> Self {
        FieldValue::Symbol(sym)
    }
}

impl From<SymbolSet> for FieldValue {
    fn from(set: SymbolSet) -> Self {
        FieldValue::Set(set)
    }
}

/// Ordered set of symbols.
///
/// Insertion order is kept and a symbol appears at most once. Sets are small
/// (bounded by the number of declared values), so membership is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolSet {
    items: Vec<Symbol>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sym` unless already present. Returns true if it was added.
    pub fn insert(&mut self, sym: Symbol) -> bool {
        if self.contains(sym.as_str()) {
            return false;
        }
        self.items.push(sym);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|s| s.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.items
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        let mut set = SymbolSet::new();
        for sym in iter {
            set.insert(sym);
        }
        set
    }
}

impl From<Vec<Symbol>> for SymbolSet {
    fn from(items: Vec<Symbol>) -> Self {
        items.into_iter().collect()
    }
}

impl From<SymbolSet> for Vec<Symbol> {
    fn from(set: SymbolSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq<[&str]> for SymbolSet {
    fn eq(&self, other: &[&str]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for SymbolSet {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
