use crate::symbol::Symbol;
use crate::validation::ValidationErrors;
use thiserror::Error;
use uuid::Uuid;

/// Why an enum declaration was rejected.
///
/// Raised synchronously by the compiler; a rejected declaration leaves the
/// owning class untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("enum alias cannot be empty")]
    EmptyAlias,

    #[error("enum '{alias}' declares no values")]
    EmptyValues { alias: String },

    #[error("enum '{alias}' declares '{value}' more than once")]
    DuplicateValue { alias: String, value: Symbol },

    #[error("'{name}' is not a valid identifier: {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("default for enum '{alias}' does not match its mode (multiple: {multiple})")]
    DefaultModeMismatch { alias: String, multiple: bool },
}

#[derive(Error, Debug)]
pub enum DocEnumError {
    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(#[from] DeclarationError),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Document not found: {class}#{id}")]
    DocumentNotFound { class: String, id: Uuid },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DocEnumError>;
