//! Class-shape descriptors consumed by the lint rules.
//!
//! A descriptor is an immutable snapshot of one class as reported by the
//! host's type system: constructed once per visited class, checked, then
//! discarded. The JSON document form and its translation into descriptors
//! live in [`document`].

pub mod document;

use serde::Deserialize;

use crate::span::Span;

/// Visibility modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// The shape of one candidate class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    pub qualified_name: String,
    pub is_abstract: bool,
    pub is_public: bool,
    pub is_static: bool,
    pub is_nested: bool,
    /// Whether the class descends from the controller base type the rule
    /// constrains.
    pub extends_controller: bool,
    pub span: Span,
}

/// One declared constructor of a [`ClassDescriptor`], in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDescriptor {
    pub is_public: bool,
    /// Fully-qualified parameter type names, in declaration order.
    pub param_types: Vec<String>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert!(Visibility::Public.is_public());
        assert!(!Visibility::Private.is_public());
        assert!(!Visibility::Protected.is_public());
    }
}
