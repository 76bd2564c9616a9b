use super::backend::{Collection, StorageBackend};
use crate::error::{DocEnumError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend.
///
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait can
/// take `&self`. Not `Sync`: a store is driven from one thread.
#[derive(Default)]
pub struct MemBackend {
    collections: RefCell<HashMap<String, Collection>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_collection(&self, class: &str) -> Result<Collection> {
        let collections = self.collections.borrow();
        Ok(collections.get(class).cloned().unwrap_or_default())
    }

    fn save_collection(&self, class: &str, docs: &Collection) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DocEnumError::Store("Simulated write error".to_string()));
        }
        let mut collections = self.collections.borrow_mut();
        collections.insert(class.to_string(), docs.clone());
        Ok(())
    }

    fn collections(&self) -> Result<Vec<String>> {
        let collections = self.collections.borrow();
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
