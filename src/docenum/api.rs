//! # Model Facade
//!
//! `Model` pairs a compiled class with the store its documents live in. It is
//! the single entry point for code that uses a declared enum:
//!
//! ```text
//! Model<S>
//!  ├── class: ModelClass     generated accessors, validators, scopes
//!  └── store: S              persistence and query execution
//! ```
//!
//! The facade adds no enum logic of its own. Instance accessors work on a
//! `&mut Document` without a store; the facade only matters once documents
//! are saved or scopes are executed.
//!
//! ## Generic Over DocumentStore
//!
//! `Model<S: DocumentStore>` is generic over the storage backend. Tests run
//! against `Model<InMemoryStore>`.

use crate::compiler::Compiler;
use crate::declaration::EnumDeclaration;
use crate::document::{Document, ModelClass};
use crate::error::Result;
use crate::query::Scope;
use crate::store::DocumentStore;
use uuid::Uuid;

pub struct Model<S: DocumentStore> {
    class: ModelClass,
    store: S,
}

impl<S: DocumentStore> Model<S> {
    pub fn new(class: ModelClass, store: S) -> Self {
        Self { class, store }
    }

    pub fn class(&self) -> &ModelClass {
        &self.class
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Declare another enum on the class with the default configuration.
    pub fn declare(&mut self, decl: &EnumDeclaration) -> Result<()> {
        self.declare_with(&Compiler::default(), decl)
    }

    pub fn declare_with(&mut self, compiler: &Compiler, decl: &EnumDeclaration) -> Result<()> {
        compiler.declare(&mut self.class, decl)
    }

    /// A new, unsaved document with declared defaults applied.
    pub fn new_document(&self) -> Document {
        self.class.new_document()
    }

    pub fn create(&mut self) -> Result<Document> {
        self.store.create(&self.class)
    }

    /// Validate and save. `Ok(false)` leaves the errors on the document.
    pub fn save(&mut self, doc: &mut Document) -> Result<bool> {
        self.store.save(&self.class, doc)
    }

    pub fn save_strict(&mut self, doc: &mut Document) -> Result<()> {
        self.store.save_strict(&self.class, doc)
    }

    pub fn find(&self, id: &Uuid) -> Result<Document> {
        self.store.get(self.class.name(), id)
    }

    pub fn all(&self) -> Result<Vec<Document>> {
        self.store.all(self.class.name())
    }

    pub fn delete(&mut self, doc: &Document) -> Result<()> {
        self.store.delete(self.class.name(), &doc.id)
    }

    /// The scope named `value`, or `None` if no enum declares it.
    pub fn scope(&self, value: &str) -> Option<Scope<'_, S>> {
        self.class
            .scope(value)
            .map(|criteria| Scope::new(&self.store, criteria))
    }

    /// Apply the bang for `value` and save.
    ///
    /// Returns `Ok(false)` when no enum on the class declares `value`; the
    /// document is left untouched in that case.
    pub fn update_value(&mut self, doc: &mut Document, value: &str) -> Result<bool> {
        let Some(compiled) = self
            .class
            .enums()
            .filter(|compiled| compiled.accessor(value).is_some())
            .last()
        else {
            return Ok(false);
        };
        compiled.bang(doc, value);
        self.store.save_strict(&self.class, doc)?;
        Ok(true)
    }
}
