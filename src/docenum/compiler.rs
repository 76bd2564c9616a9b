//! # Enum Declaration Compiler
//!
//! One declaration in, one bundle of generated behavior out:
//!
//! ```text
//! EnumDeclaration
//!      │  mapping::EnumMapping::build     value → index table
//!      ▼
//!  EnumMapping ──► binder::bind           backing field + validator + default
//!      │
//!      ▼
//!  accessors::generate                    alias accessors + per-value table
//!      │
//!      ▼
//! CompiledDeclaration::register           onto a ClassBuilder
//! ```
//!
//! [`Compiler::compile`] is pure: it returns the bundle and touches nothing.
//! [`Compiler::declare`] compiles and registers. A declaration that fails to
//! compile registers nothing, so earlier declarations on the class are
//! unaffected.
//!
//! Declaring the same alias twice replaces everything the first declaration
//! registered. Compilation runs once per alias at class setup; it is not
//! meant to race with code using the class.

use crate::accessors::{self, CompiledEnum};
use crate::binder::{self, BoundField};
use crate::config::EnumConfig;
use crate::declaration::EnumDeclaration;
use crate::document::ClassBuilder;
use crate::error::{DeclarationError, Result};
use crate::mapping::EnumMapping;
use crate::naming;
use std::sync::Arc;
use tracing::debug;

/// Everything one declaration generates, ready to register.
#[derive(Debug)]
pub struct CompiledDeclaration {
    pub alias: String,
    pub mapping: Arc<EnumMapping>,
    /// Name of the ordered-values constant, e.g. `STATUS`.
    pub constant_name: String,
    /// Name of the class-level mapping accessor, e.g. `statuses`.
    pub mapping_name: String,
    pub field: BoundField,
    pub generated: CompiledEnum,
}

impl CompiledDeclaration {
    /// Register onto `class`. Returns the enum this replaces, if any.
    pub fn register<C: ClassBuilder + ?Sized>(self, class: &mut C) -> Option<CompiledEnum> {
        class.define_constant(&self.constant_name, self.mapping.values().to_vec());
        class.define_mapping(&self.mapping_name, Arc::clone(&self.mapping));

        let BoundField {
            spec, validator, ..
        } = self.field;
        let field_name = spec.name.clone();
        class.remove_validators(&field_name);
        class.define_field(spec);
        class.add_validator(&field_name, validator);

        class.install_enum(self.generated)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: EnumConfig,
}

impl Compiler {
    pub fn new(config: EnumConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnumConfig {
        &self.config
    }

    pub fn compile(
        &self,
        decl: &EnumDeclaration,
    ) -> std::result::Result<CompiledDeclaration, DeclarationError> {
        if decl.alias.is_empty() {
            return Err(DeclarationError::EmptyAlias);
        }
        naming::validate_identifier(&decl.alias)?;

        let mapping = Arc::new(EnumMapping::build(&decl.alias, &decl.values)?);
        let field = binder::bind(decl, &mapping, &self.config)?;
        let generated = accessors::generate(
            &decl.alias,
            &field.spec.name,
            Arc::clone(&mapping),
            decl.options.multiple,
        );

        Ok(CompiledDeclaration {
            alias: decl.alias.clone(),
            constant_name: naming::constant_name(&decl.alias),
            mapping_name: naming::mapping_name(&decl.alias),
            mapping,
            field,
            generated,
        })
    }

    /// Compile `decl` and register it onto `class`.
    pub fn declare<C: ClassBuilder + ?Sized>(
        &self,
        class: &mut C,
        decl: &EnumDeclaration,
    ) -> Result<()> {
        let compiled = self.compile(decl)?;

        debug!(
            class = class.class_name(),
            alias = %compiled.alias,
            field = %compiled.field.spec.name,
            multiple = decl.options.multiple,
            values = compiled.mapping.len(),
            "compiled enum declaration"
        );

        if compiled.register(class).is_some() {
            debug!(
                class = class.class_name(),
                alias = %decl.alias,
                "enum redefined"
            );
        }
        Ok(())
    }
}

/// Declare `decl` on `class` with the default configuration.
pub fn declare_enum<C: ClassBuilder + ?Sized>(class: &mut C, decl: &EnumDeclaration) -> Result<()> {
    Compiler::default().declare(class, decl)
}
