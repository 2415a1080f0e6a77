// Declaration index - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use crate::parser::{children_of_kind, descendants, point_to_location, Location, ParsedFile};
use std::collections::HashMap;
use tracing::trace;
use tree_sitter::Node;

/// Names the runtime invokes implicitly; never candidates for liveness
/// checking.
const ENTRY_POINT_NAMES: [&str; 2] = ["main", "init"];

/// A private function or method declaration
#[derive(Debug, Clone)]
pub struct FnDecl {
    /// Declared name
    pub name: String,

    /// Receiver type for methods, `None` for plain functions. Unrelated
    /// types may share method names, so the same receiver string can
    /// appear under several entries.
    pub receiver: Option<String>,

    /// Position of the name identifier
    pub location: Location,
}

/// All private declarations of one package, grouped by name.
///
/// Built once per analysis run and read-only afterwards. Insertion order
/// inside a name's list is preserved but carries no meaning.
#[derive(Debug, Default)]
pub struct DeclarationIndex {
    by_name: HashMap<String, Vec<FnDecl>>,
}

impl DeclarationIndex {
    /// Collect private function and method declarations from production
    /// files.
    ///
    /// Skipped outright: the blank identifier, `main`, `init`, anything
    /// in a test file, and exported names (first character not an ASCII
    /// lower-case letter). Methods whose receiver is more complex than a
    /// bare identifier behind at most one pointer are dropped without a
    /// report.
    pub fn collect(files: &[&ParsedFile]) -> Self {
        let mut index = Self::default();

        for file in files {
            if file.is_test {
                continue;
            }
            for node in descendants(file.root()) {
                match node.kind() {
                    "function_declaration" | "method_declaration" => {
                        index.collect_declaration(file, node);
                    }
                    _ => {}
                }
            }
        }

        index
    }

    fn collect_declaration(&mut self, file: &ParsedFile, node: Node<'_>) {
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = file.text(name_node);

        if name == "_" || ENTRY_POINT_NAMES.contains(&name) {
            return;
        }
        if !is_private(name) {
            return;
        }

        let receiver = if node.kind() == "method_declaration" {
            match resolve_receiver(file, node) {
                Some(receiver) => Some(receiver),
                // Generic, qualified, or otherwise unsupported receiver
                // shape: the declaration is excluded from consideration.
                None => {
                    trace!(
                        "Dropping method '{}' with unsupported receiver in {}",
                        name,
                        file.path.display()
                    );
                    return;
                }
            }
        } else {
            None
        };

        self.by_name.entry(name.to_string()).or_default().push(FnDecl {
            name: name.to_string(),
            receiver,
            location: point_to_location(&file.path, name_node.start_position()),
        });
    }

    /// Iterate over (name, declarations) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FnDecl])> {
        self.by_name.iter().map(|(name, decls)| (name.as_str(), decls.as_slice()))
    }

    pub fn get(&self, name: &str) -> &[FnDecl] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Privacy by Go naming convention: first character is an ASCII
/// lower-case letter. Deliberately not Unicode-aware.
fn is_private(name: &str) -> bool {
    name.chars().next().map(|c| c.is_ascii_lowercase()).unwrap_or(false)
}

/// Resolve a method receiver down to a bare type identifier, unwrapping
/// at most one layer of pointer indirection. Anything else is `None`.
fn resolve_receiver(file: &ParsedFile, method: Node<'_>) -> Option<String> {
    let receiver_list = method.child_by_field_name("receiver")?;
    let param = children_of_kind(receiver_list, "parameter_declaration")
        .into_iter()
        .next()?;

    let ty = param.child_by_field_name("type")?;
    match ty.kind() {
        "type_identifier" => Some(file.text(ty).to_string()),
        "pointer_type" => {
            let mut inner_cursor = ty.walk();
            let inner = ty.named_children(&mut inner_cursor).next()?;
            if inner.kind() == "type_identifier" {
                Some(file.text(inner).to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}
