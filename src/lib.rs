//! gostrict - Strict code-quality rules for Go packages
//!
//! This library provides static analysis for Go source packages: a set of
//! single-pass style rules plus a whole-package dead-code detector for
//! private functions and methods.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .go files
//! 2. **Parsing** - Parse source files using tree-sitter
//! 3. **Package Grouping** - Collect files into Go packages by directory
//! 4. **Rules** - Run every enabled rule over each package
//! 5. **Reporting** - Output results to the terminal or as JSON

pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod engine;
pub mod parser;
pub mod report;
pub mod rules;

pub use config::Config;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use discovery::{FileFinder, SourceFile};
pub use engine::{Engine, GoPackage};
pub use parser::{GoParser, ParsedFile};
pub use report::{Reporter, ReportFormat};
pub use rules::{all_rules, select_rules, Rule, RuleContext};
