use super::{function_declarations, rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use crate::parser::{descendants, point_to_location, ParsedFile};
use tree_sitter::Node;

pub const RULE_NAME: &str = "complexity";
pub const RULE_CODE: &str = "GS005";

/// Flags functions whose cyclomatic complexity reaches the configured
/// threshold
pub struct ComplexityRule;

impl Rule for ComplexityRule {
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
        let limit = ctx.config.limits.max_complexity;

        for file in rule_files(RULE_NAME, pkg, ctx) {
            for decl in function_declarations(file) {
                let Some(body) = decl.node.child_by_field_name("body") else {
                    continue;
                };
                let complexity = cyclomatic_complexity(file, body);
                if complexity < limit {
                    continue;
                }
                let location = point_to_location(&file.path, decl.name_node.start_position());
                sink.report(
                    RULE_NAME,
                    RULE_CODE,
                    Severity::Warning,
                    &location,
                    format!(
                        "function '{}' has cyclomatic complexity {} (>= {}). Extract helper functions or simplify the branching.",
                        decl.name, complexity, limit
                    ),
                );
            }
        }
    }
}

/// 1 + one per decision point: if, for, switch/select case, `&&`, `||`
fn cyclomatic_complexity(file: &ParsedFile, body: Node<'_>) -> usize {
    let mut complexity = 1;
    for node in descendants(body) {
        match node.kind() {
            "if_statement" | "for_statement" => complexity += 1,
            "expression_case" | "type_case" | "communication_case" => complexity += 1,
            "binary_expression" => {
                if let Some(op) = node.child_by_field_name("operator") {
                    if matches!(file.text(op), "&&" | "||") {
                        complexity += 1;
                    }
                }
            }
            _ => {}
        }
    }
    complexity
}
