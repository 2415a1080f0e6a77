pub mod dead_code;

mod complexity;
mod func_len;
mod max_params;
mod naming;
mod nesting;
mod registry;

pub use complexity::ComplexityRule;
pub use dead_code::DeadCodeRule;
pub use func_len::FuncLenRule;
pub use max_params::MaxParamsRule;
pub use naming::NamingRule;
pub use nesting::NestingRule;
pub use registry::{all_rules, select_rules};

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::engine::GoPackage;
use crate::parser::{descendants, ParsedFile};
use tree_sitter::Node;

/// Shared context handed to every rule invocation
pub struct RuleContext<'a> {
    pub config: &'a Config,
}

/// A single analysis rule.
///
/// Rules are pure: they read the package's syntax trees and write
/// diagnostics into the sink, nothing else. A disabled rule is a
/// complete no-op.
pub trait Rule {
    /// Rule name used in config and CLI selection, e.g. "dead-code"
    fn name(&self) -> &'static str;

    /// Stable diagnostic code, e.g. "GS001"
    fn code(&self) -> &'static str;

    fn check(&self, pkg: &GoPackage, ctx: &RuleContext<'_>, sink: &mut Diagnostics);
}

/// The files a rule actually sees: production files not matched by the
/// rule's exclusion patterns.
pub(crate) fn rule_files<'a>(
    rule: &str,
    pkg: &'a GoPackage,
    ctx: &RuleContext<'_>,
) -> Vec<&'a ParsedFile> {
    pkg.files
        .iter()
        .filter(|f| !f.is_test)
        .filter(|f| !ctx.config.rule_excludes_file(rule, &f.path))
        .collect()
}

/// A function or method declaration as the simple per-declaration rules
/// consume it
pub(crate) struct FunctionDecl<'a> {
    /// The whole declaration node
    pub node: Node<'a>,
    /// The name identifier, diagnostics anchor here
    pub name_node: Node<'a>,
    /// Declared name
    pub name: &'a str,
    /// True for method declarations (receiver present)
    pub is_method: bool,
}

/// All function and method declarations of one file
pub(crate) fn function_declarations<'a>(file: &'a ParsedFile) -> Vec<FunctionDecl<'a>> {
    descendants(file.root())
        .filter(|node| {
            matches!(node.kind(), "function_declaration" | "method_declaration")
        })
        .filter_map(|node| {
            let name_node = node.child_by_field_name("name")?;
            Some(FunctionDecl {
                node,
                name_node,
                name: file.text(name_node),
                is_method: node.kind() == "method_declaration",
            })
        })
        .collect()
}
