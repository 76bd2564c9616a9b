use super::doc_store::DocStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::compiler::declare_enum;
    use crate::declaration::EnumDeclaration;
    use crate::document::{Document, ModelClass};
    use crate::store::DocumentStore;

    pub const STATUS_VALUES: [&str; 3] = ["awaiting_approval", "approved", "banned"];
    pub const ROLE_VALUES: [&str; 3] = ["basic", "manager", "administrator"];

    /// `User` with a scalar `status` and a set-mode `roles`.
    pub fn user_class() -> ModelClass {
        let mut class = ModelClass::new("User");
        declare_enum(&mut class, &EnumDeclaration::new("status", STATUS_VALUES))
            .expect("status declaration is valid");
        declare_enum(
            &mut class,
            &EnumDeclaration::new("roles", ROLE_VALUES).multiple(),
        )
        .expect("roles declaration is valid");
        class
    }

    pub struct StoreFixture {
        pub class: ModelClass,
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                class: user_class(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for _ in 0..count {
                self.store.create(&self.class).unwrap();
            }
            self
        }

        /// Save a user after applying the bang of each named value.
        pub fn with_user(mut self, values: &[&str]) -> Self {
            self.save_user(values);
            self
        }

        pub fn save_user(&mut self, values: &[&str]) -> Document {
            let mut doc = self.class.new_document();
            for value in values {
                let applied = self
                    .class
                    .enums()
                    .any(|compiled| compiled.accessor(value).is_some());
                assert!(applied, "no enum declares {value}");
                for compiled in self.class.enums() {
                    compiled.bang(&mut doc, value);
                }
            }
            self.store.save_strict(&self.class, &mut doc).unwrap();
            doc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{user_class, StoreFixture};
    use super::*;
    use crate::error::DocEnumError;
    use crate::query::Scope;
    use crate::store::DocumentStore;
    use crate::symbol::Symbol;
    use crate::test_utils::init_test_tracing;
    use crate::validation::ValidationErrorKind;
    use crate::value::FieldValue;

    #[test]
    fn create_persists_defaults() {
        let class = user_class();
        let mut store = InMemoryStore::new();

        let doc = store.create(&class).unwrap();
        assert!(doc.is_persisted());
        assert!(doc.created_at.is_some());

        let stored = store.get("User", &doc.id).unwrap();
        assert_eq!(stored.get("_status"), &FieldValue::symbol("awaiting_approval"));
        assert_eq!(stored.get("_roles"), &FieldValue::empty_set());
    }

    #[test]
    fn invalid_document_is_not_written() {
        init_test_tracing();
        let class = user_class();
        let mut store = InMemoryStore::new();
        let mut doc = class.new_document();
        doc.set("_status", Symbol::new("unknown"));

        assert!(!store.save(&class, &mut doc).unwrap());
        assert!(doc.is_new_record());
        let errors: Vec<_> = doc.errors().on("_status").collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NotIncluded);
        assert!(store.all("User").unwrap().is_empty());
    }

    #[test]
    fn save_strict_reports_validation() {
        let class = user_class();
        let mut store = InMemoryStore::new();
        let mut doc = class.new_document();
        doc.set("_roles", FieldValue::set(["basic", "superuser"]));

        let err = store.save_strict(&class, &mut doc).unwrap_err();
        match err {
            DocEnumError::Validation(errors) => {
                assert!(errors.has_kind("_roles", ValidationErrorKind::ContainsInvalidMember));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resave_keeps_position() {
        let mut fixture = StoreFixture::new();
        let mut first = fixture.save_user(&[]);
        let second = fixture.save_user(&["banned"]);

        first.set("_status", Symbol::new("approved"));
        fixture.store.save_strict(&fixture.class, &mut first).unwrap();

        let ids: Vec<_> = fixture
            .store
            .all("User")
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(
            fixture.store.reload(&first).unwrap().get("_status"),
            &FieldValue::symbol("approved")
        );
    }

    #[test]
    fn find_executes_criteria_in_order() {
        init_test_tracing();
        let mut fixture = StoreFixture::new();
        let a = fixture.save_user(&["banned", "manager"]);
        fixture.save_user(&["approved"]);
        let c = fixture.save_user(&["banned"]);

        let banned = fixture.class.scope("banned").unwrap();
        let ids: Vec<_> = fixture.store.find(&banned).unwrap().map(|d| d.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);

        let managers = fixture.class.scope("manager").unwrap();
        let scope = Scope::new(&fixture.store, managers);
        assert_eq!(scope.count().unwrap(), 1);
        assert_eq!(scope.first().unwrap().map(|d| d.id), Some(a.id));
    }

    #[test]
    fn get_and_delete_missing() {
        let mut fixture = StoreFixture::new().with_users(1);
        let id = fixture.store.all("User").unwrap()[0].id;

        fixture.store.delete("User", &id).unwrap();
        assert!(matches!(
            fixture.store.get("User", &id),
            Err(DocEnumError::DocumentNotFound { .. })
        ));
        assert!(matches!(
            fixture.store.delete("User", &id),
            Err(DocEnumError::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn write_error_leaves_document_unsaved() {
        let class = user_class();
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);

        let mut doc = class.new_document();
        let result = store.save(&class, &mut doc);
        assert!(matches!(result, Err(DocEnumError::Store(_))));
        assert!(doc.is_new_record());
    }

    #[test]
    fn fixture_builds_users() {
        let fixture = StoreFixture::new()
            .with_users(2)
            .with_user(&["approved", "administrator"]);
        let docs = fixture.store.all("User").unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[2].get("_roles"), &FieldValue::set(["administrator"]));
    }
}
