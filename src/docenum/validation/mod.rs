//! # Validation
//!
//! Enum fields are unchecked on assignment. Validation is the single point
//! where membership is enforced: the binder attaches one validator to each
//! backing field, and the document layer runs them on `validate`/`save`.
//!
//! | Mode | Validator | Failure kind |
//! |------|-----------|--------------|
//! | scalar | [`InclusionValidator`] | [`ValidationErrorKind::NotIncluded`] |
//! | set | [`MultipleValidator`] | [`ValidationErrorKind::ContainsInvalidMember`] |
//!
//! Failures never abort: they are collected into [`ValidationErrors`] keyed
//! by field name, and the caller inspects them.

mod inclusion;
mod multiple;

pub use inclusion::InclusionValidator;
pub use multiple::MultipleValidator;

use crate::value::FieldValue;
use serde::Serialize;
use std::fmt;

/// Which validator implementation is attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidatorKind {
    Inclusion,
    Multiple,
}

/// A check run against one field at validation time.
pub trait Validator: fmt::Debug + Send + Sync {
    fn kind(&self) -> ValidatorKind;

    /// Inspect `value` (the current content of `field`) and record any failure.
    fn validate(&self, field: &str, value: &FieldValue, errors: &mut ValidationErrors);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Scalar field holds something other than a declared value.
    NotIncluded,
    /// Set field holds at least one undeclared value.
    ContainsInvalidMember,
}

impl ValidationErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::NotIncluded => "is not included in the list",
            ValidationErrorKind::ContainsInvalidMember => "contains a value that is not allowed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
    /// The offending value as it was stored.
    pub value: FieldValue,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind.message())
    }
}

/// Errors accumulated on a document by the last validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, kind: ValidationErrorKind, value: &FieldValue) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            kind,
            value: value.clone(),
        });
    }

    /// Errors recorded for `field`.
    pub fn on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_kind(&self, field: &str, kind: ValidationErrorKind) -> bool {
        self.on(field).any(|e| e.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
