use crate::diagnostics::{Diagnostic, Severity};
use colored::Colorize;
use miette::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Terminal reporter with colored output, grouped by file
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, diagnostics: &[Diagnostic]) -> Result<()> {
        if diagnostics.is_empty() {
            println!("{}", "No issues found!".green().bold());
            return Ok(());
        }

        // Group by file
        let mut by_file: HashMap<PathBuf, Vec<&Diagnostic>> = HashMap::new();
        for item in diagnostics {
            by_file.entry(item.file.clone()).or_default().push(item);
        }

        println!();
        println!(
            "{}",
            format!("Found {} issues:", diagnostics.len()).yellow().bold()
        );
        println!();

        let mut files: Vec<_> = by_file.keys().collect();
        files.sort();

        for file in files {
            let mut items = by_file[file].clone();
            items.sort_by_key(|d| (d.line, d.column, d.code));

            println!("{}", file.display().to_string().cyan().bold());

            for item in items {
                self.print_item(item);
            }

            println!();
        }

        self.print_summary(diagnostics);

        Ok(())
    }

    fn print_item(&self, item: &Diagnostic) {
        let severity_str = match item.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };

        let location = format!("{}:{}", item.line, item.column);

        println!(
            "  {} {} [{}] {}",
            location.dimmed(),
            severity_str,
            item.code.dimmed(),
            item.message
        );
    }

    fn print_summary(&self, diagnostics: &[Diagnostic]) {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;

        for item in diagnostics {
            match item.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }

        println!("{}", "─".repeat(60).dimmed());

        let mut severity_parts = Vec::new();
        if errors > 0 {
            severity_parts.push(format!("{} errors", errors).red().to_string());
        }
        if warnings > 0 {
            severity_parts.push(format!("{} warnings", warnings).yellow().to_string());
        }
        if infos > 0 {
            severity_parts.push(format!("{} info", infos).blue().to_string());
        }
        println!("Summary: {}", severity_parts.join(", "));

        println!();
        println!(
            "{}",
            "Tip: Use --rules or a .gostrict.yml to narrow the checks".dimmed()
        );
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
