//! Accessor & Scope Generator.
//!
//! For one declaration this builds a [`CompiledEnum`]: the alias-level
//! getter, setter and presence predicate, plus a dispatch table with one
//! [`ValueAccessor`] per declared value. Each entry carries the value's
//! bang-setter (`v!`), predicate (`v?`) and scope (`Class.v`).
//!
//! The table is indexed by [`EnumValue`], so lookups by handle are direct and
//! lookups by name go through the mapping.
//!
//! All accessors are unchecked. They never fail; bad states are reported by
//! validation.
//!
//! | | scalar | set |
//! |---|---|---|
//! | `v!` | field = `v` | append `v` unless present (nil → `[v]`) |
//! | `v?` | field == `v` | field contains `v` (nil → false) |
//! | scope `v` | `field == v` | `field contains v` |
//! | `alias?` | field is not nil | field is non-empty |

use crate::document::Document;
use crate::mapping::{EnumMapping, EnumValue};
use crate::naming;
use crate::query::{Criteria, Predicate};
use crate::symbol::Symbol;
use crate::value::{FieldType, FieldValue, SymbolSet};
use std::sync::Arc;

/// Generated methods for a single declared value.
#[derive(Debug, Clone)]
pub struct ValueAccessor {
    value: EnumValue,
    symbol: Symbol,
    field: String,
    multiple: bool,
}

impl ValueAccessor {
    pub fn value(&self) -> EnumValue {
        self.value
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        self.symbol.as_str()
    }

    /// `v!`: make the field hold this value. Does not persist.
    pub fn bang(&self, doc: &mut Document) {
        if !self.multiple {
            doc.set(&self.field, FieldValue::Symbol(self.symbol.clone()));
            return;
        }

        let slot = doc.get_mut(&self.field);
        // Nil starts a fresh set; a stray scalar becomes its first member.
        let mut set = match std::mem::take(slot) {
            FieldValue::Set(set) => set,
            FieldValue::Symbol(existing) => std::iter::once(existing).collect(),
            FieldValue::Nil => SymbolSet::new(),
        };
        set.insert(self.symbol.clone());
        *slot = FieldValue::Set(set);
    }

    /// `v?`: does the field currently hold this value.
    pub fn is_set(&self, doc: &Document) -> bool {
        self.predicate().matches(doc.get(&self.field))
    }

    /// Query predicate behind the scope.
    pub fn predicate(&self) -> Predicate {
        if self.multiple {
            Predicate::contains(&self.field, self.symbol.clone())
        } else {
            Predicate::eq(&self.field, self.symbol.clone())
        }
    }

    /// The scope `Class.v` as a query on documents of `class`.
    pub fn criteria(&self, class: &str) -> Criteria {
        Criteria::new(class, self.predicate())
    }
}

/// The generated surface of one declared enum.
#[derive(Debug, Clone)]
pub struct CompiledEnum {
    alias: String,
    field: String,
    mapping: Arc<EnumMapping>,
    multiple: bool,
    accessors: Vec<ValueAccessor>,
}

/// Build the generated surface for `alias` backed by `field`.
pub fn generate(
    alias: &str,
    field: &str,
    mapping: Arc<EnumMapping>,
    multiple: bool,
) -> CompiledEnum {
    let accessors = mapping
        .enum_values()
        .zip(mapping.values())
        .map(|(value, symbol)| ValueAccessor {
            value,
            symbol: symbol.clone(),
            field: field.to_string(),
            multiple,
        })
        .collect();

    CompiledEnum {
        alias: alias.to_string(),
        field: field.to_string(),
        mapping,
        multiple,
        accessors,
    }
}

impl CompiledEnum {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }

    pub fn mapping(&self) -> &EnumMapping {
        &self.mapping
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn field_type(&self) -> FieldType {
        if self.multiple {
            FieldType::SymbolSet
        } else {
            FieldType::Symbol
        }
    }

    // --- Alias accessors ---

    /// `alias`: the field exactly as stored.
    pub fn get<'d>(&self, doc: &'d Document) -> &'d FieldValue {
        doc.get(&self.field)
    }

    /// `alias=`: unchecked assignment.
    pub fn set(&self, doc: &mut Document, value: impl Into<FieldValue>) {
        doc.set(&self.field, value);
    }

    /// `alias?`: non-nil in scalar mode, non-empty in set mode.
    pub fn is_present(&self, doc: &Document) -> bool {
        self.get(doc).is_present()
    }

    // --- Per-value dispatch ---

    pub fn accessors(&self) -> &[ValueAccessor] {
        &self.accessors
    }

    pub fn accessor(&self, value: &str) -> Option<&ValueAccessor> {
        self.mapping
            .value(value)
            .and_then(|v| self.accessor_for(v))
    }

    /// Accessor for a handle obtained from [`Self::mapping`]. `None` for a
    /// handle from a larger mapping.
    pub fn accessor_for(&self, value: EnumValue) -> Option<&ValueAccessor> {
        self.accessors.get(value.index())
    }

    /// `value!` by name. Returns false, leaving `doc` untouched, when `value`
    /// is not declared.
    pub fn bang(&self, doc: &mut Document, value: &str) -> bool {
        match self.accessor(value) {
            Some(accessor) => {
                accessor.bang(doc);
                true
            }
            None => false,
        }
    }

    /// `value?` by name. Undeclared values are never set.
    pub fn is(&self, doc: &Document, value: &str) -> bool {
        self.accessor(value).is_some_and(|a| a.is_set(doc))
    }

    /// Scope for `value` on documents of `class`.
    pub fn scope(&self, class: &str, value: &str) -> Option<Criteria> {
        self.accessor(value).map(|a| a.criteria(class))
    }

    // --- Introspection ---

    /// Instance method names this enum generates.
    pub fn method_names(&self) -> Vec<String> {
        let mut names = vec![
            self.alias.clone(),
            naming::setter_name(&self.alias),
            naming::predicate_name(&self.alias),
        ];
        for accessor in &self.accessors {
            names.push(naming::bang_name(accessor.name()));
            names.push(naming::predicate_name(accessor.name()));
        }
        names
    }

    /// Class-level scope names, one per value.
    pub fn scope_names(&self) -> Vec<String> {
        self.accessors.iter().map(|a| a.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ModelClass;
    use crate::symbol::symbols;

    fn compiled(multiple: bool) -> CompiledEnum {
        let (alias, values) = if multiple {
            ("roles", symbols(["author", "editor", "admin"]))
        } else {
            ("status", symbols(["awaiting_approval", "approved", "banned"]))
        };
        let mapping = Arc::new(EnumMapping::build(alias, &values).unwrap());
        generate(alias, &format!("_{}", alias), mapping, multiple)
    }

    fn blank_doc() -> Document {
        ModelClass::new("User").new_document()
    }

    #[test]
    fn scalar_bang_overwrites() {
        let status = compiled(false);
        let mut doc = blank_doc();

        assert!(status.bang(&mut doc, "approved"));
        assert!(status.bang(&mut doc, "banned"));
        assert_eq!(status.get(&doc), &FieldValue::symbol("banned"));
        assert!(status.is(&doc, "banned"));
        assert!(!status.is(&doc, "approved"));
    }

    #[test]
    fn scalar_bang_with_unknown_value_is_noop() {
        let status = compiled(false);
        let mut doc = blank_doc();

        assert!(!status.bang(&mut doc, "deleted"));
        assert!(status.get(&doc).is_nil());
        assert!(!status.is(&doc, "deleted"));
    }

    #[test]
    fn set_bang_starts_from_nil() {
        let roles = compiled(true);
        let mut doc = blank_doc();
        roles.set(&mut doc, FieldValue::Nil);

        roles.bang(&mut doc, "author");
        assert_eq!(roles.get(&doc), &FieldValue::set(["author"]));
    }

    #[test]
    fn set_bang_appends_once_in_call_order() {
        let roles = compiled(true);
        let mut doc = blank_doc();

        roles.bang(&mut doc, "editor");
        roles.bang(&mut doc, "author");
        roles.bang(&mut doc, "editor");
        assert_eq!(roles.get(&doc), &FieldValue::set(["editor", "author"]));
    }

    #[test]
    fn set_bang_promotes_a_stray_scalar() {
        let roles = compiled(true);
        let mut doc = blank_doc();
        roles.set(&mut doc, FieldValue::symbol("admin"));

        roles.bang(&mut doc, "author");
        assert_eq!(roles.get(&doc), &FieldValue::set(["admin", "author"]));
    }

    #[test]
    fn set_predicates() {
        let roles = compiled(true);
        let mut doc = blank_doc();
        assert!(!roles.is(&doc, "author"));

        roles.bang(&mut doc, "author");
        roles.bang(&mut doc, "editor");
        assert!(roles.is(&doc, "author"));
        assert!(roles.is(&doc, "editor"));
        assert!(!roles.is(&doc, "admin"));
    }

    #[test]
    fn alias_presence() {
        let status = compiled(false);
        let roles = compiled(true);
        let mut doc = blank_doc();
        assert!(!status.is_present(&doc));
        assert!(!roles.is_present(&doc));

        status.set(&mut doc, FieldValue::symbol("approved"));
        roles.set(&mut doc, FieldValue::empty_set());
        assert!(status.is_present(&doc));
        assert!(!roles.is_present(&doc));

        roles.bang(&mut doc, "admin");
        assert!(roles.is_present(&doc));
    }

    #[test]
    fn scope_predicates_follow_mode() {
        let status = compiled(false);
        let roles = compiled(true);

        assert_eq!(
            status.accessor("banned").unwrap().predicate(),
            Predicate::eq("_status", "banned".into())
        );
        assert_eq!(
            roles.accessor("admin").unwrap().predicate(),
            Predicate::contains("_roles", "admin".into())
        );

        let criteria = status.scope("User", "approved").unwrap();
        assert_eq!(criteria.class(), "User");
        assert!(status.scope("User", "nope").is_none());
    }

    #[test]
    fn dispatch_table_is_indexed_by_value() {
        let status = compiled(false);
        for value in status.mapping().enum_values() {
            let accessor = status.accessor_for(value).unwrap();
            assert_eq!(accessor.value(), value);
            assert_eq!(Some(accessor.symbol()), status.mapping().symbol(value));
        }
        assert_eq!(status.accessors().len(), 3);
    }

    #[test]
    fn foreign_handle_resolves_to_no_accessor() {
        let roles = compiled(true);
        let wide = EnumMapping::build("size", &symbols(["s", "m", "l", "xl"])).unwrap();
        assert!(roles.accessor_for(wide.value("xl").unwrap()).is_none());
        assert!(roles.accessor_for(wide.value("s").unwrap()).is_some());
    }

    #[test]
    fn method_names_cover_alias_and_values() {
        let names = compiled(false).method_names();
        for expected in [
            "status",
            "status=",
            "status?",
            "awaiting_approval!",
            "approved?",
            "banned!",
            "banned?",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
        assert_eq!(names.len(), 3 + 2 * 3);
    }
}
