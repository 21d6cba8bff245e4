//! Diagnostics and the lint driver.

pub mod registry;
pub mod rules;

use crate::model::document::{ClassEntry, ClassModel};
use crate::span::Span;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// Which construct a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Class,
    Constructor,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Class => write!(f, "class"),
            Anchor::Constructor => write!(f, "constructor"),
        }
    }
}

/// A reported rule violation.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub severity: Severity,
    /// Fully-qualified name of the offending class.
    pub class_name: String,
    pub message: String,
    pub anchor: Anchor,
    /// Position of the anchored construct.
    pub span: Span,
}

/// Runs the rules over a class model.
pub struct Linter {
    base_class: String,
    diagnostics: Vec<Diagnostic>,
}

impl Linter {
    /// `base_class` is the fully-qualified name of the controller base type
    /// the rules constrain.
    pub fn new(base_class: impl Into<String>) -> Self {
        Self {
            base_class: base_class.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn lint(mut self, model: &ClassModel) -> Vec<Diagnostic> {
        for entry in &model.classes {
            self.lint_class(entry);
        }

        self.diagnostics
            .sort_by_key(|d| (d.span.line, d.span.column));
        self.diagnostics
    }

    fn lint_class(&mut self, entry: &ClassEntry) {
        let (class, constructors) = entry.to_descriptors(&self.base_class);
        if let Some(diagnostic) = rules::instantiable::check_instantiable(&class, &constructors) {
            self.diagnostics.push(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::ClassModel;

    const BASE: &str = "com.bluelinelabs.conductor.Controller";

    fn lint(source: &str) -> Vec<Diagnostic> {
        let model = ClassModel::from_json(source).expect("test model should parse");
        Linter::new(BASE).lint(&model)
    }

    #[test]
    fn test_diagnostics_sorted_by_position() {
        let source = format!(
            r#"{{"classes": [
                {{"name": "com.example.Late", "visibility": "private", "extends": ["{base}"], "line": 90}},
                {{"name": "com.example.Early", "visibility": "private", "extends": ["{base}"], "line": 4}}
            ]}}"#,
            base = BASE
        );
        let diagnostics = lint(&source);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].class_name, "com.example.Early");
        assert_eq!(diagnostics[1].class_name, "com.example.Late");
    }

    #[test]
    fn test_at_most_one_diagnostic_per_class() {
        // Non-public AND nested non-static: only the highest-priority
        // violation is reported.
        let source = format!(
            r#"{{"classes": [{{
                "name": "com.example.Outer.Inner",
                "visibility": "private",
                "nested": true,
                "extends": ["{}"]
            }}]}}"#,
            BASE
        );
        let diagnostics = lint(&source);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("public"));
    }

    #[test]
    fn test_classes_checked_independently() {
        let source = format!(
            r#"{{"classes": [
                {{"name": "com.example.Bad", "visibility": "private", "extends": ["{base}"]}},
                {{"name": "com.example.Good", "extends": ["{base}"]}}
            ]}}"#,
            base = BASE
        );
        let diagnostics = lint(&source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].class_name, "com.example.Bad");
    }

    #[test]
    fn test_base_class_is_configurable() {
        let source = r#"{"classes": [{
            "name": "com.example.Screen",
            "visibility": "private",
            "extends": ["com.example.nav.Screen"]
        }]}"#;
        let model = ClassModel::from_json(source).unwrap();

        assert!(Linter::new(BASE).lint(&model).is_empty());
        let diagnostics = Linter::new("com.example.nav.Screen").lint(&model);
        assert_eq!(diagnostics.len(), 1);
    }
}
