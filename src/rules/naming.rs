use super::{function_declarations, rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use crate::parser::point_to_location;
use regex::Regex;
use std::sync::OnceLock;

pub const RULE_NAME: &str = "naming";
pub const RULE_CODE: &str = "GS002";

/// Initialisms that are legitimately written in full upper case
const INITIALISMS: [&str; 26] = [
    "ACL", "API", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "RAM", "RPC", "SLA", "SQL", "SSH", "TCP", "TLS", "UDP", "UI", "UID", "URI", "URL",
    "XML",
];

fn all_caps_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9]+$").expect("valid regex"))
}

/// Go naming convention: MixedCaps or mixedCaps. Underscores are out,
/// and a fully upper-case name only passes when it is a known initialism.
fn is_mixed_caps(name: &str) -> bool {
    if name.is_empty() || name == "_" {
        return false;
    }
    if name.contains('_') {
        return false;
    }
    if name.chars().any(|c| c.is_ascii_alphabetic()) && all_caps_pattern().is_match(name) {
        return INITIALISMS.contains(&name);
    }
    true
}

/// Enforces MixedCaps/mixedCaps function and method names
pub struct NamingRule;

impl Rule for NamingRule {
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

        for file in rule_files(RULE_NAME, pkg, ctx) {
            for decl in function_declarations(file) {
                if decl.name == "_" || is_mixed_caps(decl.name) {
                    continue;
                }
                let kind = if decl.is_method { "method" } else { "function" };
                let location = point_to_location(&file.path, decl.name_node.start_position());
                sink.report(
                    RULE_NAME,
                    RULE_CODE,
                    Severity::Warning,
                    &location,
                    format!(
                        "{} '{}' does not use MixedCaps naming. Use MixedCaps for exported and mixedCaps for private names, not snake_case.",
                        kind, decl.name
                    ),
                );
            }
        }
    }
}
