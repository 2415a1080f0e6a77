use super::{function_declarations, rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use crate::parser::point_to_location;
use tree_sitter::Node;

pub const RULE_NAME: &str = "func-len";
pub const RULE_CODE: &str = "GS004";

/// Flags functions whose body spans more lines than the configured limit
pub struct FuncLenRule;

impl Rule for FuncLenRule {
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
        let limit = ctx.config.limits.max_func_lines;

        for file in rule_files(RULE_NAME, pkg, ctx) {
            for decl in function_declarations(file) {
                let Some(body) = decl.node.child_by_field_name("body") else {
                    continue;
                };
                let lines = body_lines(body);
                if lines <= limit {
                    continue;
                }
                let location = point_to_location(&file.path, decl.name_node.start_position());
                sink.report(
                    RULE_NAME,
                    RULE_CODE,
                    Severity::Info,
                    &location,
                    format!(
                        "function '{}' is too long ({} lines > {}). Split it into smaller functions.",
                        decl.name, lines, limit
                    ),
                );
            }
        }
    }
}

/// Lines between the body's braces
fn body_lines(body: Node<'_>) -> usize {
    let span = body.end_position().row.saturating_sub(body.start_position().row);
    span.saturating_sub(1)
}
