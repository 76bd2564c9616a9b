//! # Document Model
//!
//! The compiler does not own storage. It talks to the document model through
//! the [`ClassBuilder`] trait, which offers the registration primitives a
//! document-mapping layer must provide:
//!
//! - field registration ([`FieldSpec`]: name, type, default)
//! - validator registration (a [`Validator`] keyed by field name)
//! - class-scope constants and value mappings
//! - installation of the generated surface ([`CompiledEnum`])
//!
//! [`ModelClass`] is the in-process implementation used by this crate, and
//! [`Document`] is its instance type: a bag of named field values plus the
//! validation errors of the last run.
//!
//! ## Lifecycle
//!
//! ```text
//! declare_enum(class, decl)   once per alias, before any document exists
//!         │
//!         ▼
//! class.new_document()        fields start at their defaults
//!         │
//!         ▼
//! accessors mutate fields     unchecked
//!         │
//!         ▼
//! validate / save             validators run, errors land on the document
//! ```

mod class;
mod instance;

pub use class::{ClassMethod, InstanceMethod, ModelClass};
pub use instance::Document;

use crate::accessors::CompiledEnum;
use crate::mapping::EnumMapping;
use crate::symbol::Symbol;
use crate::validation::Validator;
use crate::value::{FieldType, FieldValue};
use serde::Serialize;
use std::sync::Arc;

/// A registered field: what it is called, what it holds, and what a new
/// document starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub ty: FieldType,
    pub default: FieldValue,
}

/// Registration primitives the compiler needs from a document class.
///
/// Every `define_*` call replaces a previous definition of the same name.
pub trait ClassBuilder {
    fn class_name(&self) -> &str;

    fn define_field(&mut self, spec: FieldSpec);

    fn remove_field(&mut self, name: &str);

    fn add_validator(&mut self, field: &str, validator: Box<dyn Validator>);

    fn remove_validators(&mut self, field: &str);

    fn define_constant(&mut self, name: &str, values: Vec<Symbol>);

    fn define_mapping(&mut self, name: &str, mapping: Arc<EnumMapping>);

    /// Install a compiled enum, returning the one it replaces.
    fn install_enum(&mut self, compiled: CompiledEnum) -> Option<CompiledEnum>;
}
