use crate::diagnostics::{Diagnostic, Severity};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, diagnostics: &[Diagnostic]) -> Result<()> {
        let report = JsonReport::from_diagnostics(diagnostics);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_issues: usize,
    issues: Vec<JsonIssue>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonIssue {
    rule: &'static str,
    code: &'static str,
    severity: &'static str,
    message: String,
    file: String,
    line: usize,
    column: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    infos: usize,
}

impl JsonReport {
    fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;

        let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
        ordered.sort_by_key(|d| (d.file.clone(), d.line, d.column, d.code));

        let issues = ordered
            .iter()
            .map(|d| {
                match d.severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                    Severity::Info => infos += 1,
                }
                JsonIssue {
                    rule: d.rule,
                    code: d.code,
                    severity: d.severity.as_str(),
                    message: d.message.clone(),
                    file: d.file.display().to_string(),
                    line: d.line,
                    column: d.column,
                }
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            total_issues: diagnostics.len(),
            issues,
            summary: JsonSummary {
                errors,
                warnings,
                infos,
            },
        }
    }
}
