use super::common::node_text;
use crate::discovery::is_test_file;
use miette::Result;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser as TsParser, Tree};
use tracing::debug;

/// A parsed Go source file, the unit every rule operates on.
///
/// The tree is produced once per analysis run and borrowed read-only by
/// the rules; nothing here survives past a run.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path the file was read from
    pub path: PathBuf,
    /// Full source text, owned so nodes can be sliced out of it
    pub source: String,
    /// tree-sitter syntax tree
    pub tree: Tree,
    /// Whether the filename follows the `_test.go` suffix convention
    pub is_test: bool,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Slice the source text behind a node
    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(node, &self.source)
    }
}

/// Go source code parser using tree-sitter
pub struct GoParser {
    parser: TsParser,
}

impl GoParser {
    pub fn new() -> Self {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .expect("Failed to load Go grammar");
        Self { parser }
    }

    /// Parse Go source into a [`ParsedFile`].
    ///
    /// A `None` from tree-sitter (grammar failure, not a syntax error in
    /// the input) is surfaced as an error; the rule engine treats it as
    /// fatal rather than analyzing a half-parsed package.
    pub fn parse(&mut self, path: &Path, contents: &str) -> Result<ParsedFile> {
        debug!("Parsing Go file: {}", path.display());

        let tree = self
            .parser
            .parse(contents, None)
            .ok_or_else(|| miette::miette!("Failed to parse Go file: {}", path.display()))?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source: contents.to_string(),
            tree,
            is_test: is_test_file(path),
        })
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the package name from a file's `package` clause
pub fn package_name(file: &ParsedFile) -> Option<String> {
    let root = file.root();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() == "package_clause" {
            let mut pkg_cursor = child.walk();
            for pkg_child in child.children(&mut pkg_cursor) {
                if pkg_child.kind() == "package_identifier" {
                    return Some(file.text(pkg_child).to_string());
                }
            }
        }
    }
    None
}
