//! Java parser using native tree-sitter.

use proptype_core::errors::{ExtractError, ExtractResult};
use tree_sitter::{Node, Parser, Tree};

/// Strict wrapper over the tree-sitter Java grammar.
///
/// tree-sitter recovers from syntax errors; this parser does not. A tree
/// with any ERROR or MISSING node is reported as a parse failure, so a
/// truncated download never yields a half-populated table.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> ExtractResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ExtractError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> ExtractResult<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ExtractError::Parse { line: 1, column: 1 })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error_position(root).unwrap_or((1, 1));
            return Err(ExtractError::Parse { line, column });
        }
        Ok(tree)
    }
}

/// One-based position of the first ERROR or MISSING node in document order.
fn first_error_position(root: Node) -> Option<(usize, usize)> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return Some((pos.row + 1, pos.column + 1));
        }
        // Only descend into subtrees that contain an error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
