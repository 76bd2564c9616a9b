use super::{ValidationErrorKind, ValidationErrors, Validator, ValidatorKind};
use crate::mapping::EnumMapping;
use crate::symbol::Symbol;
use crate::value::FieldValue;
use std::sync::Arc;

/// Set-mode check: every member must be a declared value.
///
/// Nil counts as the empty set, and the empty set always passes. A lone
/// symbol assigned to a set field is checked as a one-element set.
#[derive(Debug, Clone)]
pub struct MultipleValidator {
    mapping: Arc<EnumMapping>,
}

impl MultipleValidator {
    pub fn new(mapping: Arc<EnumMapping>) -> Self {
        Self { mapping }
    }

    pub fn allowed(&self) -> &[Symbol] {
        self.mapping.values()
    }
}

impl Validator for MultipleValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Multiple
    }

    fn validate(&self, field: &str, value: &FieldValue, errors: &mut ValidationErrors) {
        let ok = match value {
            FieldValue::Nil => true,
            FieldValue::Symbol(sym) => self.mapping.contains(sym.as_str()),
            FieldValue::Set(set) => set.iter().all(|sym| self.mapping.contains(sym.as_str())),
        };

        if !ok {
            errors.add(field, ValidationErrorKind::ContainsInvalidMember, value);
        }
    }
}
