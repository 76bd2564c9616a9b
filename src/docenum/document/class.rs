use super::{ClassBuilder, Document, FieldSpec};
use crate::accessors::{CompiledEnum, ValueAccessor};
use crate::mapping::EnumMapping;
use crate::naming;
use crate::query::Criteria;
use crate::symbol::Symbol;
use crate::validation::{ValidationErrors, Validator};
use indexmap::IndexMap;
use std::sync::Arc;

/// An instance-level generated method, resolved by name.
#[derive(Debug, Clone, Copy)]
pub enum InstanceMethod<'c> {
    /// `status`
    Get(&'c CompiledEnum),
    /// `status=`
    Set(&'c CompiledEnum),
    /// `status?`
    Present(&'c CompiledEnum),
    /// `banned!`
    Bang(&'c ValueAccessor),
    /// `banned?`
    Predicate(&'c ValueAccessor),
}

/// A class-level generated method, resolved by name.
#[derive(Debug, Clone, Copy)]
pub enum ClassMethod<'c> {
    /// `statuses`
    Mapping(&'c EnumMapping),
    /// `banned`
    Scope(&'c ValueAccessor),
}

/// A document class: its fields, validators and generated enum surface.
#[derive(Debug, Default)]
pub struct ModelClass {
    name: String,
    fields: IndexMap<String, FieldSpec>,
    validators: Vec<(String, Box<dyn Validator>)>,
    constants: IndexMap<String, Vec<Symbol>>,
    mappings: IndexMap<String, Arc<EnumMapping>>,
    /// Keyed by alias, in declaration order (a redefinition moves to the end).
    enums: IndexMap<String, CompiledEnum>,
}

impl ModelClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    pub fn validators_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a dyn Validator> + 'a {
        self.validators
            .iter()
            .filter(move |(f, _)| f == field)
            .map(|(_, v)| v.as_ref())
    }

    /// Ordered-values constant, e.g. `STATUS`.
    pub fn constant(&self, name: &str) -> Option<&[Symbol]> {
        self.constants.get(name).map(Vec::as_slice)
    }

    /// Value → index mapping, e.g. `statuses`.
    pub fn mapping(&self, name: &str) -> Option<&EnumMapping> {
        self.mappings.get(name).map(Arc::as_ref)
    }

    /// The compiled enum declared under `alias`.
    pub fn enum_field(&self, alias: &str) -> Option<&CompiledEnum> {
        self.enums.get(alias)
    }

    pub fn enums(&self) -> impl Iterator<Item = &CompiledEnum> {
        self.enums.values()
    }

    pub fn new_document(&self) -> Document {
        Document::new(self)
    }

    /// Run every registered validator against `doc`.
    pub fn validate(&self, doc: &Document) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, validator) in &self.validators {
            validator.validate(field, doc.get(field), &mut errors);
        }
        errors
    }

    /// Resolve a generated instance method. When two enums generate the same
    /// name, the later declaration wins. Within one enum, a value's `v?`
    /// shadows the alias predicate.
    pub fn instance_method(&self, name: &str) -> Option<InstanceMethod<'_>> {
        self.enums.values().rev().find_map(|e| {
            if name == e.alias() {
                return Some(InstanceMethod::Get(e));
            }
            if let Some(base) = name.strip_suffix('=') {
                return (base == e.alias()).then_some(InstanceMethod::Set(e));
            }
            if let Some(base) = name.strip_suffix('?') {
                return e
                    .accessor(base)
                    .map(InstanceMethod::Predicate)
                    .or_else(|| (base == e.alias()).then_some(InstanceMethod::Present(e)));
            }
            if let Some(base) = name.strip_suffix('!') {
                return e.accessor(base).map(InstanceMethod::Bang);
            }
            None
        })
    }

    /// Resolve a generated class method. When a mapping accessor and a scope
    /// share a name, the later declaration wins; within one enum the mapping
    /// accessor does.
    pub fn class_method(&self, name: &str) -> Option<ClassMethod<'_>> {
        self.enums.values().rev().find_map(|e| {
            if naming::mapping_name(e.alias()) == name {
                return Some(ClassMethod::Mapping(e.mapping()));
            }
            e.accessor(name).map(ClassMethod::Scope)
        })
    }

    pub fn responds_to(&self, method: &str) -> bool {
        self.instance_method(method).is_some()
    }

    /// Query for the scope named `value`, e.g. `banned`.
    pub fn scope(&self, value: &str) -> Option<Criteria> {
        match self.class_method(value)? {
            ClassMethod::Scope(accessor) => Some(accessor.criteria(&self.name)),
            ClassMethod::Mapping(_) => None,
        }
    }

    /// Every generated instance method name, sorted.
    pub fn instance_method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.enums().flat_map(CompiledEnum::method_names).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Every generated class method name (mapping accessors and scopes), sorted.
    pub fn class_method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .mappings
            .keys()
            .cloned()
            .chain(self.enums().flat_map(|e| e.scope_names()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }
}

impl ClassBuilder for ModelClass {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn define_field(&mut self, spec: FieldSpec) {
        self.fields.insert(spec.name.clone(), spec);
    }

    fn remove_field(&mut self, name: &str) {
        self.fields.shift_remove(name);
    }

    fn add_validator(&mut self, field: &str, validator: Box<dyn Validator>) {
        self.validators.push((field.to_string(), validator));
    }

    fn remove_validators(&mut self, field: &str) {
        self.validators.retain(|(f, _)| f != field);
    }

    fn define_constant(&mut self, name: &str, values: Vec<Symbol>) {
        self.constants.insert(name.to_string(), values);
    }

    fn define_mapping(&mut self, name: &str, mapping: Arc<EnumMapping>) {
        self.mappings.insert(name.to_string(), mapping);
    }

    fn install_enum(&mut self, compiled: CompiledEnum) -> Option<CompiledEnum> {
        let previous = self.enums.shift_remove(compiled.alias());
        if let Some(old) = &previous {
            // A different prefix may have moved the backing field.
            if old.field_name() != compiled.field_name() {
                self.remove_validators(old.field_name());
                self.remove_field(old.field_name());
            }
        }
        self.enums.insert(compiled.alias().to_string(), compiled);
        previous
    }
}
