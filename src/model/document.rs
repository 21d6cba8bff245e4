//! JSON class-model documents and their translation into descriptors.
//!
//! The host build exports one document per compilation unit:
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "name": "com.example.HomeController",
//!       "extends": ["com.bluelinelabs.conductor.Controller"],
//!       "line": 14,
//!       "constructors": [
//!         { "visibility": "public", "params": ["android.os.Bundle"], "line": 18 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Everything but `name` defaults: visibility to `public`, flags to false,
//! positions to the start of the file. The supertype chain is flattened by
//! the exporter, so deciding whether a class descends from the controller
//! base type is a plain membership test here.

use serde::Deserialize;

use crate::error::{CtrlintError, ModelError};
use crate::model::{ClassDescriptor, ConstructorDescriptor, Visibility};
use crate::span::Span;

fn default_position() -> usize {
    1
}

/// A class model: the flattened shape of every class the lint should see.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassModel {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

/// One class in a model document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Fully-qualified class name.
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub nested: bool,
    /// Flattened supertype chain, fully-qualified names.
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default = "default_position")]
    pub line: usize,
    #[serde(default = "default_position")]
    pub column: usize,
    /// Declared constructors, in declaration order.
    #[serde(default)]
    pub constructors: Vec<CtorEntry>,
}

/// One declared constructor in a model document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtorEntry {
    #[serde(default)]
    pub visibility: Visibility,
    /// Fully-qualified parameter type names.
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default = "default_position")]
    pub line: usize,
    #[serde(default = "default_position")]
    pub column: usize,
}

impl ClassModel {
    /// Parse and validate a model document.
    pub fn from_json(source: &str) -> Result<Self, CtrlintError> {
        let model: ClassModel = serde_json::from_str(source)?;
        model.validate()?;
        Ok(model)
    }

    /// Reject documents the adapter cannot translate into well-formed
    /// descriptors.
    fn validate(&self) -> Result<(), ModelError> {
        for entry in &self.classes {
            if entry.name.trim().is_empty() {
                return Err(ModelError::empty_class_name(entry.span()));
            }
            for ctor in &entry.constructors {
                if ctor.params.iter().any(|p| p.trim().is_empty()) {
                    return Err(ModelError::empty_parameter_type(
                        &entry.name,
                        ctor.span(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl ClassEntry {
    pub fn span(&self) -> Span {
        Span::at(self.line, self.column)
    }

    /// Translate this entry into the descriptors the rules consume.
    ///
    /// `base_class` is the fully-qualified name of the controller base type;
    /// the entry descends from it when the name appears in the flattened
    /// `extends` chain.
    pub fn to_descriptors(
        &self,
        base_class: &str,
    ) -> (ClassDescriptor, Vec<ConstructorDescriptor>) {
        let class = ClassDescriptor {
            qualified_name: self.name.clone(),
            is_abstract: self.is_abstract,
            is_public: self.visibility.is_public(),
            is_static: self.is_static,
            is_nested: self.nested,
            extends_controller: self.extends.iter().any(|s| s == base_class),
            span: self.span(),
        };

        let constructors = self
            .constructors
            .iter()
            .map(|ctor| ConstructorDescriptor {
                is_public: ctor.visibility.is_public(),
                param_types: ctor.params.clone(),
                span: ctor.span(),
            })
            .collect();

        (class, constructors)
    }
}

impl CtorEntry {
    pub fn span(&self) -> Span {
        Span::at(self.line, self.column)
    }
}
