use super::ModelClass;
use crate::validation::ValidationErrors;
use crate::value::FieldValue;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static NIL: FieldValue = FieldValue::Nil;

/// One document instance.
///
/// Identity is `(class, id)`: two `Document` values are equal when they are
/// the same record, whatever their in-memory field state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub class: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    fields: IndexMap<String, FieldValue>,
    #[serde(skip)]
    new_record: bool,
    #[serde(skip)]
    errors: ValidationErrors,
}

impl Document {
    /// A new, unsaved document with every registered field at its default.
    pub fn new(class: &ModelClass) -> Self {
        let fields = class
            .fields()
            .map(|spec| (spec.name.clone(), spec.default.clone()))
            .collect();

        Self {
            id: Uuid::new_v4(),
            class: class.name().to_string(),
            created_at: None,
            updated_at: None,
            fields,
            new_record: true,
            errors: ValidationErrors::new(),
        }
    }

    /// Current value of `field`; `Nil` when the field was never written.
    pub fn get(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&NIL)
    }

    pub fn get_mut(&mut self, field: &str) -> &mut FieldValue {
        self.fields.entry(field.to_string()).or_default()
    }

    /// Assign `field` without any check.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Run the class validators, replacing the previous errors.
    /// Returns true when the document is valid.
    pub fn validate(&mut self, class: &ModelClass) -> bool {
        self.errors = class.validate(self);
        self.errors.is_empty()
    }

    /// Errors from the last validation run.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn is_persisted(&self) -> bool {
        !self.new_record
    }

    /// Record a successful write at `now`.
    pub(crate) fn mark_persisted(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
        self.new_record = false;
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.id == other.id
    }
}

impl Eq for Document {}
