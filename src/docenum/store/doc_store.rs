use super::backend::StorageBackend;
use super::DocumentStore;
use crate::document::{Document, ModelClass};
use crate::error::{DocEnumError, Result};
use crate::query::{Criteria, Documents};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-read a document's stored state.
    pub fn reload(&self, doc: &Document) -> Result<Document> {
        self.get(&doc.class, &doc.id)
    }
}

impl<B: StorageBackend> DocumentStore for DocStore<B> {
    fn save(&mut self, class: &ModelClass, doc: &mut Document) -> Result<bool> {
        if !doc.validate(class) {
            debug!(
                class = class.name(),
                id = %doc.id,
                errors = %doc.errors(),
                "document failed validation"
            );
            return Ok(false);
        }

        let mut collection = self.backend.load_collection(class.name())?;

        let mut stored = doc.clone();
        stored.mark_persisted(Utc::now());
        // Existing ids keep their position in the collection.
        collection.insert(stored.id, stored.clone());
        self.backend.save_collection(class.name(), &collection)?;

        debug!(class = class.name(), id = %doc.id, "document saved");
        *doc = stored;
        Ok(true)
    }

    fn get(&self, class: &str, id: &Uuid) -> Result<Document> {
        let collection = self.backend.load_collection(class)?;
        collection
            .get(id)
            .cloned()
            .ok_or_else(|| DocEnumError::DocumentNotFound {
                class: class.to_string(),
                id: *id,
            })
    }

    fn all(&self, class: &str) -> Result<Vec<Document>> {
        let collection = self.backend.load_collection(class)?;
        Ok(collection.into_values().collect())
    }

    fn find(&self, criteria: &Criteria) -> Result<Documents> {
        let candidates = self.all(criteria.class())?;
        Ok(Documents::new(candidates, criteria.clone()))
    }

    fn delete(&mut self, class: &str, id: &Uuid) -> Result<()> {
        let mut collection = self.backend.load_collection(class)?;
        if collection.shift_remove(id).is_none() {
            return Err(DocEnumError::DocumentNotFound {
                class: class.to_string(),
                id: *id,
            });
        }
        self.backend.save_collection(class, &collection)
    }
}
