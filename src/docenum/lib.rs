//! # docenum Architecture
//!
//! docenum compiles **enum declarations** on document-model classes. One
//! declaration such as
//!
//! ```text
//! status: [awaiting_approval, approved, banned]
//! ```
//!
//! gives the class a backing field (`_status`), inclusion validation, an
//! ordered-values constant (`STATUS`), a value→index mapping (`statuses`),
//! alias accessors (`status`, `status=`, `status?`) and, per value, a bang
//! (`banned!`), a predicate (`banned?`) and a query scope (`banned`).
//!
//! ## The Three Stages
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Mapping Builder (mapping.rs)                               │
//! │  - Ordered values → value/index table                       │
//! │  - Rejects empty, duplicate and non-identifier values       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Field & Validation Binder (binder.rs, validation/)         │
//! │  - Backing field name, type and default                     │
//! │  - Inclusion validator (scalar) or multiple validator (set) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Accessor & Scope Generator (accessors.rs)                  │
//! │  - Alias accessors and one dispatch entry per value         │
//! │  - Bang, predicate and scope criteria                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`compiler`] runs the three stages and registers the result onto a
//! [`document::ClassBuilder`].
//!
//! ## Collaborators
//!
//! The compiler does not own documents or storage. It talks to two seams:
//!
//! - [`document::ClassBuilder`]: where fields, validators, constants and
//!   accessors are registered. [`document::ModelClass`] is the provided one.
//! - [`store::DocumentStore`]: saves documents and executes scope criteria.
//!   [`store::memory::InMemoryStore`] is the provided one.
//!
//! ## Validation Timing
//!
//! Accessors never validate. Any value can be assigned through `status=` or
//! the raw field; it is rejected only when the document is validated or
//! saved.
//!
//! ## Module Overview
//!
//! - [`api`]: `Model`, the class + store facade
//! - [`compiler`]: Declaration compiler and `declare_enum`
//! - [`declaration`]: Declaration input (`EnumDeclaration`, `EnumOptions`)
//! - [`mapping`]: Value→index mapping and `EnumValue` handles
//! - [`binder`]: Backing field and validator binding
//! - [`accessors`]: Generated accessors and scopes (`CompiledEnum`)
//! - [`validation`]: Validators and validation errors
//! - [`document`]: Classes, documents and the `ClassBuilder` seam
//! - [`query`]: Predicates, criteria and lazy scopes
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`config`]: Compiler configuration
//! - [`naming`]: Identifier rules and generated names
//! - [`symbol`], [`value`]: Stored value types
//! - [`error`]: Error types

pub mod accessors;
pub mod api;
pub mod binder;
pub mod compiler;
pub mod config;
pub mod declaration;
pub mod document;
pub mod error;
pub mod mapping;
pub mod naming;
pub mod query;
pub mod store;
pub mod symbol;
pub mod validation;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::Model;
pub use compiler::{declare_enum, Compiler};
pub use config::EnumConfig;
pub use declaration::{EnumDeclaration, EnumOptions};
pub use document::{ClassBuilder, Document, ModelClass};
pub use error::{DeclarationError, DocEnumError, Result};
pub use store::DocumentStore;
pub use symbol::Symbol;
pub use value::{FieldType, FieldValue, SymbolSet};
