//! Field & Validation Binder.
//!
//! Decides the storage shape, the default and the validator of the backing
//! field for one declaration.
//!
//! | | scalar | set (`multiple`) |
//! |---|---|---|
//! | field type | `Symbol` | `SymbolSet` |
//! | default when omitted | first declared value | empty set |
//! | validator | [`InclusionValidator`] | [`MultipleValidator`] |
//! | `required` | unset field fails when true | ignored |
//!
//! A supplied default is taken verbatim. Its shape must match the mode, but
//! its members are not checked here; they are checked like any other stored
//! value when a document is validated.

use crate::config::EnumConfig;
use crate::declaration::EnumDeclaration;
use crate::document::FieldSpec;
use crate::error::DeclarationError;
use crate::mapping::EnumMapping;
use crate::naming;
use crate::validation::{InclusionValidator, MultipleValidator, Validator};
use crate::value::{FieldType, FieldValue};
use std::sync::Arc;

/// Output of [`bind`]: what the owning class must register.
#[derive(Debug)]
pub struct BoundField {
    pub spec: FieldSpec,
    pub validator: Box<dyn Validator>,
    /// Effective `required` flag after applying the config default.
    pub required: bool,
}

pub fn bind(
    decl: &EnumDeclaration,
    mapping: &Arc<EnumMapping>,
    config: &EnumConfig,
) -> Result<BoundField, DeclarationError> {
    let name = naming::field_name(config.field_prefix(), &decl.alias);
    let multiple = decl.options.multiple;

    let ty = if multiple {
        FieldType::SymbolSet
    } else {
        FieldType::Symbol
    };

    let default = match &decl.options.default {
        Some(value) if !value.fits(ty) => {
            return Err(DeclarationError::DefaultModeMismatch {
                alias: decl.alias.clone(),
                multiple,
            });
        }
        Some(value) => value.clone(),
        None if multiple => FieldValue::empty_set(),
        None => match mapping.symbol(mapping.first()) {
            Some(first) => FieldValue::Symbol(first.clone()),
            None => {
                return Err(DeclarationError::EmptyValues {
                    alias: decl.alias.clone(),
                })
            }
        },
    };

    let required = decl
        .options
        .required
        .unwrap_or(config.required_by_default);

    let validator: Box<dyn Validator> = if multiple {
        Box::new(MultipleValidator::new(Arc::clone(mapping)))
    } else {
        Box::new(InclusionValidator::new(Arc::clone(mapping), !required))
    };

    Ok(BoundField {
        spec: FieldSpec { name, ty, default },
        validator,
        required,
    })
}
