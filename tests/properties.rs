use docenum::store::memory::InMemoryStore;
use docenum::validation::ValidationErrorKind;
use docenum::{
    declare_enum, DocumentStore, EnumDeclaration, FieldValue, ModelClass, Symbol, SymbolSet,
};
use proptest::prelude::*;

/// Distinct identifier-shaped values, in arbitrary order.
fn arb_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,7}", 1..6)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn class_with(values: &[String], multiple: bool) -> ModelClass {
    let mut decl = EnumDeclaration::new("kind", values.iter().map(String::as_str));
    if multiple {
        decl = decl.multiple();
    }
    let mut class = ModelClass::new("Item");
    declare_enum(&mut class, &decl).unwrap();
    class
}

proptest! {
    #[test]
    fn mapping_and_constant_follow_declaration_order(values in arb_values()) {
        let class = class_with(&values, false);
        let mapping = class.mapping("kinds").unwrap();
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(mapping.get(value), Some(i));
        }
        let constant: Vec<&str> = class.constant("KIND").unwrap().iter().map(Symbol::as_str).collect();
        prop_assert_eq!(constant, values.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn defaults_without_explicit_default(values in arb_values()) {
        let scalar = class_with(&values, false).new_document();
        prop_assert_eq!(scalar.get("_kind"), &FieldValue::symbol(values[0].as_str()));

        let set = class_with(&values, true).new_document();
        prop_assert_eq!(set.get("_kind"), &FieldValue::empty_set());
    }

    #[test]
    fn scalar_bang_sets_exactly_one_predicate(values in arb_values(), pick in any::<prop::sample::Index>()) {
        let class = class_with(&values, false);
        let compiled = class.enum_field("kind").unwrap();
        let chosen = pick.get(&values);

        let mut doc = class.new_document();
        prop_assert!(compiled.bang(&mut doc, chosen));
        for value in &values {
            prop_assert_eq!(compiled.is(&doc, value), value == chosen);
        }
    }

    #[test]
    fn set_bang_keeps_first_call_order_without_duplicates(
        values in arb_values(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let class = class_with(&values, true);
        let compiled = class.enum_field("kind").unwrap();
        let mut doc = class.new_document();

        let mut expected = SymbolSet::new();
        for pick in &picks {
            let value = pick.get(&values);
            compiled.bang(&mut doc, value);
            expected.insert(Symbol::new(value.as_str()));
        }

        prop_assert_eq!(doc.get("_kind"), &FieldValue::Set(expected));
        prop_assert!(doc.validate(&class));
    }

    #[test]
    fn scopes_return_exactly_the_matching_documents(
        values in arb_values(),
        multiple in any::<bool>(),
        docs in prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..3), 0..8),
    ) {
        let class = class_with(&values, multiple);
        let compiled = class.enum_field("kind").unwrap();
        let mut store = InMemoryStore::new();

        let mut saved = Vec::new();
        for picks in &docs {
            let mut doc = class.new_document();
            for pick in picks {
                compiled.bang(&mut doc, pick.get::<String>(&values));
            }
            store.save_strict(&class, &mut doc).unwrap();
            saved.push(doc);
        }

        for value in &values {
            let criteria = compiled.scope(class.name(), value).unwrap();
            let found: Vec<_> = store.find(&criteria).unwrap().map(|d| d.id).collect();
            let expected: Vec<_> = saved
                .iter()
                .filter(|d| compiled.is(d, value))
                .map(|d| d.id)
                .collect();
            prop_assert_eq!(found, expected);
        }
    }

    #[test]
    fn validation_rejects_undeclared_values(values in arb_values(), other in "[A-Z]{1,6}") {
        let class = class_with(&values, false);
        let mut doc = class.new_document();

        doc.set("_kind", Symbol::new(other.as_str()));
        prop_assert!(!doc.validate(&class));
        prop_assert!(doc.errors().has_kind("_kind", ValidationErrorKind::NotIncluded));

        doc.set("_kind", Symbol::new(values[values.len() - 1].as_str()));
        prop_assert!(doc.validate(&class));
        prop_assert!(doc.errors().is_empty());
    }
}
