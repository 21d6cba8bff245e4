//! Ctrlint: validates that controller classes can be re-created by their
//! framework.
//!
//! A navigation framework re-instantiates controllers after the hosting
//! process is killed, which only works when a concrete controller subclass is
//! public, static if nested, and exposes a public default constructor or a
//! public single-argument constructor taking the framework's `Bundle` type.
//! Ctrlint checks those conditions over an exported JSON class model instead
//! of a live AST, so it runs anywhere the build can drop a model file.
//!
//! The decision logic is a pure function over flat descriptors
//! ([`lint::rules::instantiable::check_instantiable`]); everything else is
//! model loading, adaptation, and reporting.

pub mod error;
pub mod lint;
pub mod model;
pub mod report;
pub mod span;

use std::path::Path;

use error::CtrlintError;
use lint::{Diagnostic, Linter};
use model::document::ClassModel;

/// Controller base type checked when none is configured.
pub const DEFAULT_BASE_CLASS: &str = "com.bluelinelabs.conductor.Controller";

/// Lint a parsed class model.
pub fn check_model(model: &ClassModel, base_class: &str) -> Vec<Diagnostic> {
    Linter::new(base_class).lint(model)
}

/// Parse a JSON model document and lint it.
pub fn check_source(source: &str, base_class: &str) -> Result<Vec<Diagnostic>, CtrlintError> {
    let model = ClassModel::from_json(source)?;
    Ok(check_model(&model, base_class))
}

/// Read a model file and lint it.
pub fn check_file(path: &Path, base_class: &str) -> Result<Vec<Diagnostic>, CtrlintError> {
    let source = std::fs::read_to_string(path)?;
    check_source(&source, base_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_source_end_to_end() {
        let source = format!(
            r#"{{"classes": [{{
                "name": "com.example.HomeController",
                "extends": ["{}"],
                "constructors": [{{"params": ["int", "long"], "line": 3}}]
            }}]}}"#,
            DEFAULT_BASE_CLASS
        );
        let diagnostics = check_source(&source, DEFAULT_BASE_CLASS).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.line, 3);
    }

    #[test]
    fn test_check_source_propagates_parse_errors() {
        assert!(check_source("not json", DEFAULT_BASE_CLASS).is_err());
    }
}
