//! Dead-code detection: private functions and methods never referenced
//! anywhere in the production portion of a package.
//!
//! Three kinds of usage evidence are collected (direct calls, member
//! calls, value or argument references) and matched against the
//! declaration set by bare name. The matching deliberately ignores
//! receiver types: any symbol sharing a name counts as evidence for
//! every declaration of that name. This trades precision for a detector
//! that needs no type resolution.

mod declarations;
mod usage;

pub use declarations::{DeclarationIndex, FnDecl};
pub use usage::{scan_call_arguments, scan_calls, scan_references, UsageIndex};

use super::{rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use tracing::debug;

pub const RULE_NAME: &str = "dead-code";
pub const RULE_CODE: &str = "GS001";

/// Flags private declarations with no usage evidence in production code
pub struct DeadCodeRule;

impl Rule for DeadCodeRule {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn code(&self) -> &'static str {
        RULE_CODE
    }

    fn check(&self, pkg: &GoPackage, ctx: &RuleContext<'_>, sink: &mut Diagnostics) {
        if !ctx.config.rule_enabled(RULE_NAME) {
            return;
        }

        let files = rule_files(RULE_NAME, pkg, ctx);

        let declarations = DeclarationIndex::collect(&files);
        if declarations.is_empty() {
            return;
        }

        // The scans only ever set flags, so their order is irrelevant.
        let mut usage = UsageIndex::default();
        for file in &files {
            scan_calls(file, &mut usage);
        }
        for file in &files {
            scan_references(file, &mut usage);
        }
        for file in &files {
            scan_call_arguments(file, &mut usage);
        }

        debug!(
            "Package '{}': {} private declarations, {} used names",
            pkg.name,
            declarations.len(),
            usage.len()
        );

        for (name, decls) in declarations.iter() {
            if usage.contains(name) {
                continue;
            }
            // One diagnostic per declaration, no deduplication: two
            // declarations sharing name and receiver are both reported.
            for decl in decls {
                let message = match &decl.receiver {
                    Some(receiver) => format!(
                        "private method '{}.{}' is never called in production code. Remove it if it is no longer needed.",
                        receiver, name
                    ),
                    None => format!(
                        "private function '{}' is never called in production code. Remove it if it is no longer needed.",
                        name
                    ),
                };
                sink.report(RULE_NAME, RULE_CODE, Severity::Warning, &decl.location, message);
            }
        }
    }
}
