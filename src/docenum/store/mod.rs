//! # Storage Layer
//!
//! Persistence is not part of the enum compiler; it is the collaborator that
//! saves documents and executes scope queries. This module defines that
//! boundary and provides the in-memory implementation the crate is tested
//! against.
//!
//! ## Layers
//!
//! - [`DocumentStore`]: what callers use (save with validation, lookups,
//!   criteria execution).
//! - [`backend::StorageBackend`]: raw collection I/O, the "how" of storage.
//! - [`doc_store::DocStore`]: the generic store that puts validation and
//!   timestamps on top of any backend.
//!
//! ## Save semantics
//!
//! `save` validates first. An invalid document is not written: `save`
//! returns `Ok(false)` and the errors stay on the document for inspection.
//! `Err` is reserved for storage failures. `save_strict` turns a failed
//! validation into [`DocEnumError::Validation`].
//!
//! ## Ordering
//!
//! Collections keep first-save order, and queries return matches in that
//! order.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `DocStore` over [`mem_backend::MemBackend`].

use crate::document::{Document, ModelClass};
use crate::error::{DocEnumError, Result};
use crate::query::{Criteria, Documents};
use uuid::Uuid;

pub mod backend;
pub mod doc_store;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Validate and, if valid, write the document (create or update).
    ///
    /// Returns `Ok(false)` when validation failed; see [`Document::errors`].
    fn save(&mut self, class: &ModelClass, doc: &mut Document) -> Result<bool>;

    /// Get a document by ID
    fn get(&self, class: &str, id: &Uuid) -> Result<Document>;

    /// All documents of a class, in first-save order
    fn all(&self, class: &str) -> Result<Vec<Document>>;

    /// Execute a criteria. Matching happens while the result is iterated.
    fn find(&self, criteria: &Criteria) -> Result<Documents>;

    /// Delete a document permanently
    fn delete(&mut self, class: &str, id: &Uuid) -> Result<()>;

    /// `save`, with failed validation reported as an error.
    fn save_strict(&mut self, class: &ModelClass, doc: &mut Document) -> Result<()> {
        if self.save(class, doc)? {
            Ok(())
        } else {
            Err(DocEnumError::Validation(doc.errors().clone()))
        }
    }

    /// Build a document with defaults and save it.
    fn create(&mut self, class: &ModelClass) -> Result<Document> {
        let mut doc = class.new_document();
        self.save_strict(class, &mut doc)?;
        Ok(doc)
    }
}
