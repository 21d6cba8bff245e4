//! Diagnostic rendering: colored text lines or a JSON report.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::lint::Diagnostic;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Collects per-file lint results and renders the final report.
pub struct Reporter {
    format: OutputFormat,
    entries: Vec<(PathBuf, Vec<Diagnostic>)>,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
        }
    }

    /// Record the diagnostics for one linted model file.
    pub fn add_file(&mut self, path: &Path, diagnostics: Vec<Diagnostic>) {
        if self.format == OutputFormat::Text {
            for diagnostic in &diagnostics {
                println!("{}", text_line(path, diagnostic));
            }
        }
        self.entries.push((path.to_path_buf(), diagnostics));
    }

    /// Render the summary (text) or the whole report (JSON). Returns the
    /// total issue count.
    pub fn finish(self) -> usize {
        let total_files = self.entries.len();
        let files_with_issues = self
            .entries
            .iter()
            .filter(|(_, diagnostics)| !diagnostics.is_empty())
            .count();
        let total_issues: usize = self
            .entries
            .iter()
            .map(|(_, diagnostics)| diagnostics.len())
            .sum();

        match self.format {
            OutputFormat::Text => {
                if total_issues > 0 {
                    println!();
                    println!(
                        "{}",
                        format!(
                            "{} issue(s) found in {} file(s)",
                            total_issues, files_with_issues
                        )
                        .red()
                    );
                } else {
                    println!(
                        "{}",
                        format!("No issues found in {} file(s)", total_files).green()
                    );
                }
            }
            OutputFormat::Json => {
                println!("{}", json_report(&self.entries));
            }
        }

        total_issues
    }
}

/// One `file:line:column - [rule] message` line.
fn text_line(path: &Path, diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{}:{} - [{}] {}",
        path.display(),
        diagnostic.span.line,
        diagnostic.span.column,
        diagnostic.rule.red().bold(),
        diagnostic.message
    )
}

fn json_report(entries: &[(PathBuf, Vec<Diagnostic>)]) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct JsonReport {
        summary: JsonSummary,
        diagnostics: Vec<JsonDiagnostic>,
    }

    #[derive(Serialize)]
    struct JsonSummary {
        files: usize,
        issues: usize,
    }

    #[derive(Serialize)]
    struct JsonDiagnostic {
        file: String,
        line: usize,
        column: usize,
        rule: String,
        severity: String,
        anchor: String,
        class: String,
        message: String,
    }

    let diagnostics: Vec<JsonDiagnostic> = entries
        .iter()
        .flat_map(|(path, diagnostics)| {
            diagnostics.iter().map(move |d| JsonDiagnostic {
                file: path.display().to_string(),
                line: d.span.line,
                column: d.span.column,
                rule: d.rule.to_string(),
                severity: d.severity.to_string(),
                anchor: d.anchor.to_string(),
                class: d.class_name.clone(),
                message: d.message.clone(),
            })
        })
        .collect();

    let report = JsonReport {
        summary: JsonSummary {
            files: entries.len(),
            issues: diagnostics.len(),
        },
        diagnostics,
    };

    serde_json::to_string_pretty(&report).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Anchor, Severity};
    use crate::span::Span;

    fn diagnostic() -> Diagnostic {
        Diagnostic {
            rule: "ValidController",
            severity: Severity::Fatal,
            class_name: "com.example.HiddenController".to_string(),
            message: "This Controller class should be public (com.example.HiddenController)"
                .to_string(),
            anchor: Anchor::Class,
            span: Span::new(0, 0, 7, 3),
        }
    }

    #[test]
    fn test_text_line_contains_position_rule_and_message() {
        colored::control::set_override(false);
        let line = text_line(Path::new("app/model.json"), &diagnostic());
        assert!(line.starts_with("app/model.json:7:3 - "));
        assert!(line.contains("[ValidController]"));
        assert!(line.contains("should be public"));
    }

    #[test]
    fn test_json_report_shape() {
        let entries = vec![
            (PathBuf::from("a.json"), vec![diagnostic()]),
            (PathBuf::from("b.json"), vec![]),
        ];
        let value: serde_json::Value = serde_json::from_str(&json_report(&entries)).unwrap();

        assert_eq!(value["summary"]["files"], 2);
        assert_eq!(value["summary"]["issues"], 1);
        let row = &value["diagnostics"][0];
        assert_eq!(row["file"], "a.json");
        assert_eq!(row["line"], 7);
        assert_eq!(row["column"], 3);
        assert_eq!(row["rule"], "ValidController");
        assert_eq!(row["severity"], "fatal");
        assert_eq!(row["anchor"], "class");
        assert_eq!(row["class"], "com.example.HiddenController");
    }
}
