//! Rendering of the extracted table as Rust source.
//!
//! For each non-empty category the output holds an ordered constant
//! (`NUMERIC_MODIFIERS`) and a literal-union enum (`NumericModifier`). A
//! closing `MODIFIER_TABLE` indexes the non-empty categories by emitted name.
//! Output depends only on the table and the source URL.

pub mod identifiers;

use proptype_core::{FxHashSet, ModifierCategory};

use crate::engine::types::CategorizedLiterals;
use identifiers::IdentAllocator;

const INDENT: &str = "    ";

/// Render the generated schema module.
pub fn render(table: &CategorizedLiterals, source_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "// THIS FILE IS AUTOMATICALLY GENERATED by proptype-extract from\n// {source_url}\n// Do not edit by hand; rerun `proptype-extract` instead.\n\n"
    ));
    out.push_str("#![allow(clippy::enum_variant_names)]\n");

    for (category, names) in table.iter() {
        out.push('\n');
        render_constant(&mut out, category, names);
        out.push('\n');
        render_union(&mut out, category, names);
    }

    out.push('\n');
    render_index(&mut out, table);
    out
}

fn render_constant(out: &mut String, category: ModifierCategory, names: &[String]) {
    out.push_str(&format!("pub const {}: &[&str] = &[\n", category.const_name()));
    for name in names {
        out.push_str(&format!("{INDENT}{name:?},\n"));
    }
    out.push_str("];\n");
}

fn render_union(out: &mut String, category: ModifierCategory, names: &[String]) {
    // Duplicate literals stay in the constant but get one variant.
    let mut seen = FxHashSet::default();
    let mut alloc = IdentAllocator::new();
    let variants: Vec<(String, &str)> = names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| (alloc.allocate(name), name.as_str()))
        .collect();

    let type_name = category.type_name();
    let const_name = category.const_name();

    out.push_str(&format!("/// Literal union over [`{const_name}`].\n"));
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    out.push_str(&format!("pub enum {type_name} {{\n"));
    for (ident, _) in &variants {
        out.push_str(&format!("{INDENT}{ident},\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {type_name} {{\n"));
    out.push_str(&format!("{INDENT}pub const ALL: &'static [Self] = &[\n"));
    for (ident, _) in &variants {
        out.push_str(&format!("{INDENT}{INDENT}Self::{ident},\n"));
    }
    out.push_str(&format!("{INDENT}];\n\n"));

    out.push_str(&format!("{INDENT}pub fn as_str(self) -> &'static str {{\n"));
    out.push_str(&format!("{INDENT}{INDENT}match self {{\n"));
    for (ident, literal) in &variants {
        out.push_str(&format!("{INDENT}{INDENT}{INDENT}Self::{ident} => {literal:?},\n"));
    }
    out.push_str(&format!("{INDENT}{INDENT}}}\n{INDENT}}}\n\n"));

    out.push_str(&format!("{INDENT}pub fn from_name(name: &str) -> Option<Self> {{\n"));
    out.push_str(&format!("{INDENT}{INDENT}match name {{\n"));
    for (ident, literal) in &variants {
        out.push_str(&format!(
            "{INDENT}{INDENT}{INDENT}{literal:?} => Some(Self::{ident}),\n"
        ));
    }
    out.push_str(&format!("{INDENT}{INDENT}{INDENT}_ => None,\n"));
    out.push_str(&format!("{INDENT}{INDENT}}}\n{INDENT}}}\n}}\n\n"));

    out.push_str(&format!("impl std::fmt::Display for {type_name} {{\n"));
    out.push_str(&format!(
        "{INDENT}fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{\n"
    ));
    out.push_str(&format!("{INDENT}{INDENT}f.write_str(self.as_str())\n"));
    out.push_str(&format!("{INDENT}}}\n}}\n"));
}

fn render_index(out: &mut String, table: &CategorizedLiterals) {
    out.push_str("/// Non-empty categories, keyed by emitted name.\n");
    out.push_str("pub const MODIFIER_TABLE: &[(&str, &[&str])] = &[\n");
    for (category, _) in table.iter() {
        out.push_str(&format!(
            "{INDENT}({:?}, {}),\n",
            category.emitted_name(),
            category.const_name()
        ));
    }
    out.push_str("];\n");
}
