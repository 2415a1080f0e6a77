// Usage index - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use crate::parser::{descendants, ParsedFile};
use std::collections::HashSet;
use tree_sitter::Node;

/// Every name for which some usage evidence was seen in production code.
///
/// Monotonic: marks only ever go in, so the three evidence scans commute
/// and may run in any order. Built fresh per analysis run.
#[derive(Debug, Default)]
pub struct UsageIndex {
    seen: HashSet<String>,
}

impl UsageIndex {
    pub fn mark(&mut self, name: &str) {
        if !name.is_empty() {
            self.seen.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Call evidence: `helper()` marks `helper`; `x.compute()` marks
/// `compute` without looking at `x` at all. Matching is receiver-blind
/// by design, so one live `compute` silences every declaration of that
/// name.
pub fn scan_calls(file: &ParsedFile, index: &mut UsageIndex) {
    if file.is_test {
        return;
    }
    for node in descendants(file.root()) {
        if node.kind() != "call_expression" {
            continue;
        }
        let Some(callee) = node.child_by_field_name("function") else {
            continue;
        };
        match callee.kind() {
            "identifier" => index.mark(file.text(callee)),
            "selector_expression" => {
                if let Some(field) = callee.child_by_field_name("field") {
                    index.mark(file.text(field));
                }
            }
            _ => {}
        }
    }
}

/// Reference evidence: every simple name nested in a composite literal,
/// an assignment (including `:=`), or a var/const initializer. Catches
/// functions stored as values, e.g. `handlers := map[string]func(){"x": helper}`
/// or `var _ = helper`.
pub fn scan_references(file: &ParsedFile, index: &mut UsageIndex) {
    if file.is_test {
        return;
    }
    for node in descendants(file.root()) {
        match node.kind() {
            "composite_literal" | "assignment_statement" | "short_var_declaration" => {
                mark_identifiers_within(file, node, index);
            }
            "var_spec" | "const_spec" => {
                if let Some(value) = node.child_by_field_name("value") {
                    mark_identifiers_within(file, value, index);
                }
            }
            _ => {}
        }
    }
}

/// Argument evidence: a bare name or member access passed as a call
/// argument, e.g. `register(dispatch)` or `register(pkg.dispatch)`.
pub fn scan_call_arguments(file: &ParsedFile, index: &mut UsageIndex) {
    if file.is_test {
        return;
    }
    for node in descendants(file.root()) {
        if node.kind() != "call_expression" {
            continue;
        }
        let Some(arguments) = node.child_by_field_name("arguments") else {
            continue;
        };
        let mut cursor = arguments.walk();
        for arg in arguments.named_children(&mut cursor) {
            match arg.kind() {
                "identifier" => index.mark(file.text(arg)),
                "selector_expression" => {
                    if let Some(field) = arg.child_by_field_name("field") {
                        index.mark(file.text(field));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Record every simple name under `node`. Selector members, struct
/// literal keys, and type names all count, mirroring a plain identifier
/// walk over Go's AST.
fn mark_identifiers_within(file: &ParsedFile, node: Node<'_>, index: &mut UsageIndex) {
    for inner in descendants(node) {
        match inner.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "package_identifier" => {
                index.mark(file.text(inner));
            }
            _ => {}
        }
    }
}
