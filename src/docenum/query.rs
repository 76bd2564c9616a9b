//! # Queries and Scopes
//!
//! A generated scope is just a [`Criteria`]: the class to search plus one
//! field [`Predicate`]. Execution belongs to the store.
//!
//! - [`Predicate::Eq`]: the field holds exactly the value (scalar enums)
//! - [`Predicate::Contains`]: the field's set has the value as a member (set enums)
//!
//! A [`Scope`] binds a criteria to a store without running it. Each call to
//! [`Scope::iter`] runs the query again, so a scope can be iterated any
//! number of times and always reflects what is currently persisted.
//!
//! ```ignore
//! let banned = class.scope("banned").unwrap();
//! let scope = Scope::new(&store, banned);
//! for doc in scope.iter()? { ... }
//! ```

use crate::document::Document;
use crate::error::Result;
use crate::store::DocumentStore;
use crate::symbol::Symbol;
use crate::value::FieldValue;
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Predicate {
    Eq { field: String, value: Symbol },
    Contains { field: String, value: Symbol },
}

impl Predicate {
    pub fn eq(field: &str, value: Symbol) -> Self {
        Predicate::Eq {
            field: field.to_string(),
            value,
        }
    }

    pub fn contains(field: &str, value: Symbol) -> Self {
        Predicate::Contains {
            field: field.to_string(),
            value,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Predicate::Eq { field, .. } | Predicate::Contains { field, .. } => field,
        }
    }

    pub fn value(&self) -> &Symbol {
        match self {
            Predicate::Eq { value, .. } | Predicate::Contains { value, .. } => value,
        }
    }

    /// Test a field value directly.
    ///
    /// `Contains` also matches a lone symbol equal to the value, the way a
    /// scalar stored in a set field is read as a one-element set.
    pub fn matches(&self, field_value: &FieldValue) -> bool {
        match (self, field_value) {
            (Predicate::Eq { value, .. }, FieldValue::Symbol(sym)) => sym == value,
            (Predicate::Contains { value, .. }, FieldValue::Set(set)) => {
                set.contains(value.as_str())
            }
            (Predicate::Contains { value, .. }, FieldValue::Symbol(sym)) => sym == value,
            _ => false,
        }
    }

    pub fn matches_document(&self, doc: &Document) -> bool {
        self.matches(doc.get(self.field()))
    }
}

/// A query over the persisted documents of one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criteria {
    class: String,
    predicate: Predicate,
}

impl Criteria {
    pub fn new(class: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            class: class.into(),
            predicate,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn matches(&self, doc: &Document) -> bool {
        doc.class == self.class && self.predicate.matches_document(doc)
    }
}

/// Lazy iterator over the documents a store returned for a criteria.
pub struct Documents {
    inner: std::vec::IntoIter<Document>,
    criteria: Criteria,
}

impl Documents {
    pub fn new(candidates: Vec<Document>, criteria: Criteria) -> Self {
        Self {
            inner: candidates.into_iter(),
            criteria,
        }
    }
}

impl Iterator for Documents {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        let criteria = &self.criteria;
        self.inner.by_ref().find(|doc| criteria.matches(doc))
    }
}

/// A criteria bound to a store. Nothing runs until it is iterated.
pub struct Scope<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    criteria: Criteria,
}

impl<'s, S: DocumentStore + ?Sized> Scope<'s, S> {
    pub fn new(store: &'s S, criteria: Criteria) -> Self {
        Self { store, criteria }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Run the query. Every call starts from scratch.
    pub fn iter(&self) -> Result<Documents> {
        trace!(
            class = %self.criteria.class,
            predicate = ?self.criteria.predicate,
            "executing scope"
        );
        self.store.find(&self.criteria)
    }

    pub fn to_vec(&self) -> Result<Vec<Document>> {
        Ok(self.iter()?.collect())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.iter()?.count())
    }

    pub fn first(&self) -> Result<Option<Document>> {
        Ok(self.iter()?.next())
    }

    pub fn exists(&self) -> Result<bool> {
        Ok(self.first()?.is_some())
    }
}
