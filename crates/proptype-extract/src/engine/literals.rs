//! Reduction of array elements to bare string literals.
//!
//! Nothing is evaluated. An element either is a string literal or is skipped.

use tree_sitter::Node;

const COMMENT_KINDS: [&str; 2] = ["line_comment", "block_comment"];

/// Named children of `node`, comments excluded.
pub fn elements<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !COMMENT_KINDS.contains(&child.kind()))
        .collect();
    children
}

/// Reduce one array element to the quoted text of its name literal.
///
/// A bare string literal is the name itself. A nested array initializer
/// (one upstream row such as `{ "Item Drop", pattern, ... }`) contributes its
/// first element, which must itself be a bare string literal.
pub fn element_literal<'s>(element: Node, source: &'s [u8]) -> Option<&'s str> {
    match element.kind() {
        "string_literal" => string_literal_text(element, source),
        "array_initializer" => elements(element)
            .into_iter()
            .next()
            .filter(|first| first.kind() == "string_literal")
            .and_then(|first| string_literal_text(first, source)),
        _ => None,
    }
}

/// Source text of a single-line string literal; text blocks are rejected.
fn string_literal_text<'s>(node: Node, source: &'s [u8]) -> Option<&'s str> {
    let text = node.utf8_text(source).ok()?;
    if text.starts_with("\"\"\"") || text.chars().count() < 2 {
        return None;
    }
    Some(text)
}

/// Strip exactly the first and last character. Escapes are left as written.
pub fn unquote(literal: &str) -> &str {
    let mut chars = literal.char_indices();
    let start = match chars.next() {
        Some((_, c)) => c.len_utf8(),
        None => return literal,
    };
    match chars.next_back() {
        Some((end, _)) if end >= start => &literal[start..end],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_strips_one_char_each_side() {
        assert_eq!(unquote("\"Item Drop\""), "Item Drop");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\"a\\\"b\""), "a\\\"b");
        assert_eq!(unquote("\"é\""), "é");
    }
}
