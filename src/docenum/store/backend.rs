use crate::document::Document;
use crate::error::Result;
use indexmap::IndexMap;
use uuid::Uuid;

/// One class's documents, keyed by id, in first-save order.
pub type Collection = IndexMap<Uuid, Document>;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage, while DocStore handles the
/// "what" (validation, timestamps, query execution).
pub trait StorageBackend {
    /// Load every stored document of `class`. Unknown classes are empty.
    fn load_collection(&self, class: &str) -> Result<Collection>;

    /// Replace the stored documents of `class`.
    fn save_collection(&self, class: &str, docs: &Collection) -> Result<()>;

    /// Names of the classes that have stored documents.
    fn collections(&self) -> Result<Vec<String>>;
}
