// Diagnostic types - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use crate::parser::Location;
use serde::Serialize;
use std::path::PathBuf;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding emitted by a rule
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Rule name, e.g. "dead-code"
    pub rule: &'static str,

    /// Stable rule code, e.g. "GS001"
    pub code: &'static str,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// File the finding is anchored in
    pub file: PathBuf,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

/// Append-only sink the rules report into.
///
/// Rules only ever write; ordering of reads happens in the reporter.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding anchored at a source location
    pub fn report(
        &mut self,
        rule: &'static str,
        code: &'static str,
        severity: Severity,
        location: &Location,
        message: String,
    ) {
        self.items.push(Diagnostic {
            rule,
            code,
            severity,
            message,
            file: location.file.clone(),
            line: location.line,
            column: location.column,
        });
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Diagnostic> {
        self.items
    }
}
