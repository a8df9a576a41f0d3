//! Single-pass tree walk with per-node-kind dispatch.
//!
//! The engine walks the tree once, depth-first, and hands every node whose
//! kind a handler declared to that handler's `on_enter`.

use proptype_core::ModifierCategory;
use tracing::debug;
use tree_sitter::{Node, Tree, TreeCursor};

use super::literals::{element_literal, elements, unquote};
use super::remap::remap;
use super::types::CategorizedLiterals;

/// A handler participating in the tree walk.
pub trait NodeHandler {
    /// Node kinds this handler wants to visit. Empty means all nodes.
    fn node_types(&self) -> &[&str];

    /// Called when entering a matching node.
    fn on_enter(&mut self, node: Node, source: &[u8]);
}

/// Walk `tree` depth-first, dispatching to `handler`.
pub fn walk(tree: &Tree, source: &[u8], handler: &mut dyn NodeHandler) {
    let mut cursor = tree.walk();
    walk_recursive(&mut cursor, source, handler);
}

fn walk_recursive(cursor: &mut TreeCursor, source: &[u8], handler: &mut dyn NodeHandler) {
    let node = cursor.node();
    let wanted = handler.node_types();
    if wanted.is_empty() || wanted.contains(&node.kind()) {
        handler.on_enter(node, source);
    }

    if cursor.goto_first_child() {
        loop {
            walk_recursive(cursor, source, handler);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// Collects `<category>Modifiers` array declarations.
#[derive(Debug, Default)]
pub struct ModifiersVisitor {
    modifiers: CategorizedLiterals,
    skipped: usize,
}

impl ModifiersVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declarations and elements skipped for not matching the
    /// expected shape.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn into_literals(self) -> CategorizedLiterals {
        self.modifiers
    }

    fn process_declarator(&mut self, declarator: Node, source: &[u8]) {
        let Some(identifier) = declarator
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source).ok())
        else {
            return;
        };
        let Some(declared) = ModifierCategory::from_declaration(identifier) else {
            return;
        };

        let initializer = declarator
            .child_by_field_name("value")
            .filter(|v| v.kind() == "array_initializer");
        let Some(initializer) = initializer else {
            debug!(identifier, "declaration has no array initializer, skipping");
            self.skipped += 1;
            return;
        };

        for element in elements(initializer) {
            match element_literal(element, source) {
                Some(literal) => {
                    let name = unquote(literal);
                    self.modifiers.push(remap(name, declared), name);
                }
                None => {
                    let pos = element.start_position();
                    debug!(
                        identifier,
                        line = pos.row + 1,
                        kind = element.kind(),
                        "element does not reduce to a string literal, skipping"
                    );
                    self.skipped += 1;
                }
            }
        }
    }
}

impl NodeHandler for ModifiersVisitor {
    fn node_types(&self) -> &[&str] {
        &["variable_declarator"]
    }

    fn on_enter(&mut self, node: Node, source: &[u8]) {
        self.process_declarator(node, source);
    }
}

/// Run a `ModifiersVisitor` over `tree`.
pub fn collect_modifiers(tree: &Tree, source: &[u8]) -> CategorizedLiterals {
    let mut visitor = ModifiersVisitor::new();
    walk(tree, source, &mut visitor);
    debug!(
        total = visitor.modifiers.total(),
        skipped = visitor.skipped(),
        "modifier walk complete"
    );
    visitor.into_literals()
}
