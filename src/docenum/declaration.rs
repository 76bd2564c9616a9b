//! Enum declarations.
//!
//! An [`EnumDeclaration`] is the input of the compiler: an alias, an ordered
//! list of value tokens, and options. It is a plain value object; nothing is
//! checked until it is compiled.
//!
//! ```
//! use docenum::{EnumDeclaration, FieldValue};
//!
//! let status = EnumDeclaration::new("status", ["awaiting_approval", "approved", "banned"]);
//!
//! let roles = EnumDeclaration::new("roles", ["author", "editor", "admin"])
//!     .multiple()
//!     .default(FieldValue::empty_set())
//!     .required(false);
//!
//! assert!(!status.options.multiple);
//! assert!(roles.options.multiple);
//! ```

use crate::symbol::Symbol;
use crate::value::FieldValue;

/// Options accepted alongside the values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumOptions {
    /// Hold a set of values instead of a single one.
    pub multiple: bool,

    /// Explicit default. `None` means "derive one": the first declared value
    /// in scalar mode, the empty set in set mode.
    pub default: Option<FieldValue>,

    /// Whether an unset scalar field fails validation. `None` defers to
    /// [`crate::config::EnumConfig::required_by_default`]. Has no effect in
    /// set mode.
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub alias: String,
    pub values: Vec<Symbol>,
    pub options: EnumOptions,
}

impl EnumDeclaration {
    pub fn new<I, S>(alias: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            alias: alias.into(),
            values: values.into_iter().map(Into::into).collect(),
            options: EnumOptions::default(),
        }
    }

    /// Switch to set mode.
    pub fn multiple(mut self) -> Self {
        self.options.multiple = true;
        self
    }

    pub fn default(mut self, value: impl Into<FieldValue>) -> Self {
        self.options.default = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.options.required = Some(required);
        self
    }

    pub fn with_options(mut self, options: EnumOptions) -> Self {
        self.options = options;
        self
    }
}
