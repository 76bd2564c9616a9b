use super::{ValidationErrorKind, ValidationErrors, Validator, ValidatorKind};
use crate::mapping::EnumMapping;
use crate::symbol::Symbol;
use crate::value::FieldValue;
use std::sync::Arc;

/// Scalar-mode check: the field must hold one of the declared values.
///
/// An unset field passes only when `allow_nil` is set (the declaration was
/// not `required`). A set stored in a scalar field never passes.
#[derive(Debug, Clone)]
pub struct InclusionValidator {
    mapping: Arc<EnumMapping>,
    allow_nil: bool,
}

impl InclusionValidator {
    pub fn new(mapping: Arc<EnumMapping>, allow_nil: bool) -> Self {
        Self { mapping, allow_nil }
    }

    /// Values the field may hold.
    pub fn allowed(&self) -> &[Symbol] {
        self.mapping.values()
    }

    pub fn allows_nil(&self) -> bool {
        self.allow_nil
    }
}

impl Validator for InclusionValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Inclusion
    }

    fn validate(&self, field: &str, value: &FieldValue, errors: &mut ValidationErrors) {
        let ok = match value {
            FieldValue::Symbol(sym) => self.mapping.contains(sym.as_str()),
            FieldValue::Nil => self.allow_nil,
            FieldValue::Set(_) => false,
        };

        if !ok {
            errors.add(field, ValidationErrorKind::NotIncluded, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::symbols;

    fn validator(allow_nil: bool) -> InclusionValidator {
        let mapping =
            EnumMapping::build("status", &symbols(["awaiting_approval", "approved", "banned"]))
                .unwrap();
        InclusionValidator::new(Arc::new(mapping), allow_nil)
    }

    fn run(v: &InclusionValidator, value: FieldValue) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        v.validate("_status", &value, &mut errors);
        errors
    }

    #[test]
    fn allows_every_declared_value() {
        let v = validator(false);
        for value in ["awaiting_approval", "approved", "banned"] {
            assert!(run(&v, FieldValue::symbol(value)).is_empty());
        }
        assert_eq!(v.allowed(), symbols(["awaiting_approval", "approved", "banned"]));
    }

    #[test]
    fn rejects_undeclared_value() {
        let errors = run(&validator(false), FieldValue::symbol("deleted"));
        assert!(errors.has_kind("_status", ValidationErrorKind::NotIncluded));
    }

    #[test]
    fn nil_depends_on_required() {
        assert!(!run(&validator(false), FieldValue::Nil).is_empty());
        assert!(run(&validator(true), FieldValue::Nil).is_empty());
    }

    #[test]
    fn rejects_set_in_scalar_field() {
        let errors = run(&validator(true), FieldValue::set(["approved"]));
        assert!(errors.has_kind("_status", ValidationErrorKind::NotIncluded));
    }
}
