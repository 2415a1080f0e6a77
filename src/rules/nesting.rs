use super::{function_declarations, rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use crate::parser::point_to_location;
use tree_sitter::Node;

pub const RULE_NAME: &str = "nesting";
pub const RULE_CODE: &str = "GS006";

/// Statements that open a nesting level
const NESTING_KINDS: [&str; 5] = [
    "if_statement",
    "for_statement",
    "expression_switch_statement",
    "type_switch_statement",
    "select_statement",
];

/// Flags functions nested deeper than the configured limit
pub struct NestingRule;

impl Rule for NestingRule {
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
        let limit = ctx.config.limits.max_nesting;

        for file in rule_files(RULE_NAME, pkg, ctx) {
            for decl in function_declarations(file) {
                let Some(body) = decl.node.child_by_field_name("body") else {
                    continue;
                };
                let depth = nesting_depth(body, 0);
                if depth <= limit {
                    continue;
                }
                let location = point_to_location(&file.path, decl.name_node.start_position());
                sink.report(
                    RULE_NAME,
                    RULE_CODE,
                    Severity::Warning,
                    &location,
                    format!(
                        "function '{}' has nesting depth {} (> {}). Use early returns or extract helper functions.",
                        decl.name, depth, limit
                    ),
                );
            }
        }
    }
}

/// Deepest nesting level of control-flow statements under `node`
fn nesting_depth(node: Node<'_>, current: usize) -> usize {
    let mut max = current;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let next = if NESTING_KINDS.contains(&child.kind()) {
            current + 1
        } else {
            current
        };
        let depth = nesting_depth(child, next);
        if depth > max {
            max = depth;
        }
    }
    max
}
