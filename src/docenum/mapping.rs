//! Mapping Builder.
//!
//! Turns the ordered value list of a declaration into a stable value → index
//! table. The index of a value is its position in the declaration; it never
//! changes for the lifetime of the mapping.

use crate::error::DeclarationError;
use crate::naming::validate_identifier;
use crate::symbol::Symbol;
use indexmap::IndexMap;
use serde::Serialize;

/// A declared value, identified by its index in the owning [`EnumMapping`].
///
/// Handles are only meaningful for the mapping that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumValue {
    index: usize,
}

impl EnumValue {
    pub fn index(self) -> usize {
        self.index
    }
}

/// Read-only value table for one enum.
///
/// Serializes as the `{value: index}` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnumMapping {
    #[serde(skip)]
    values: Vec<Symbol>,
    index: IndexMap<Symbol, usize>,
}

impl EnumMapping {
    /// Build the mapping for `alias`.
    ///
    /// Fails when `values` is empty, contains a duplicate, or contains a
    /// token that is not an identifier.
    pub fn build(alias: &str, values: &[Symbol]) -> Result<Self, DeclarationError> {
        if values.is_empty() {
            return Err(DeclarationError::EmptyValues {
                alias: alias.to_string(),
            });
        }

        let mut index = IndexMap::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            validate_identifier(value.as_str())?;
            if index.insert(value.clone(), i).is_some() {
                return Err(DeclarationError::DuplicateValue {
                    alias: alias.to_string(),
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            values: values.to_vec(),
            index,
        })
    }

    /// Declared values, in declaration order.
    pub fn values(&self) -> &[Symbol] {
        &self.values
    }

    /// Index of `name`, if declared.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<EnumValue> {
        self.get(name).map(|index| EnumValue { index })
    }

    /// The symbol behind a handle. `None` for a handle from a larger mapping.
    pub fn symbol(&self, value: EnumValue) -> Option<&Symbol> {
        self.values.get(value.index)
    }

    pub fn first(&self) -> EnumValue {
        EnumValue { index: 0 }
    }

    /// Handles for every declared value, in order.
    pub fn enum_values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        (0..self.values.len()).map(|index| EnumValue { index })
    }

    /// `(value, index)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, usize)> + '_ {
        self.index.iter().map(|(sym, i)| (sym, *i))
    }

    pub fn as_map(&self) -> &IndexMap<Symbol, usize> {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a built mapping; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
