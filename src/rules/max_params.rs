use super::{function_declarations, rule_files, Rule, RuleContext};
use crate::diagnostics::{Diagnostics, Severity};
use crate::engine::GoPackage;
use crate::parser::point_to_location;
use tree_sitter::Node;

pub const RULE_NAME: &str = "max-params";
pub const RULE_CODE: &str = "GS003";

/// Flags functions with more parameters than the configured limit
pub struct MaxParamsRule;

impl Rule for MaxParamsRule {
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
        let limit = ctx.config.limits.max_params;

        for file in rule_files(RULE_NAME, pkg, ctx) {
            for decl in function_declarations(file) {
                let count = parameter_count(decl.node);
                if count <= limit {
                    continue;
                }
                let location = point_to_location(&file.path, decl.name_node.start_position());
                sink.report(
                    RULE_NAME,
                    RULE_CODE,
                    Severity::Info,
                    &location,
                    format!(
                        "function '{}' has too many parameters ({} > {}). Group related parameters into a struct.",
                        decl.name, count, limit
                    ),
                );
            }
        }
    }
}

/// Number of parameter names, counting grouped declarations per name
/// (`a, b int` is two) and an unnamed parameter as one. The receiver is
/// not part of the `parameters` field and stays uncounted.
fn parameter_count(decl: Node<'_>) -> usize {
    let Some(params) = decl.child_by_field_name("parameters") else {
        return 0;
    };

    let mut count = 0;
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "parameter_declaration" => {
                let mut name_cursor = child.walk();
                let names = child.children_by_field_name("name", &mut name_cursor).count();
                count += names.max(1);
            }
            "variadic_parameter_declaration" => count += 1,
            _ => {}
        }
    }
    count
}
