//! # proptype-extract
//!
//! Offline schema extractor. Fetches the upstream Java source that declares
//! the modifier arrays, parses it with tree-sitter, collects the declared
//! names per category, and renders the table as Rust source for
//! `proptype-access`.

pub mod codegen;
pub mod engine;
pub mod fetch;
pub mod parsers;
pub mod pipeline;

pub use engine::types::CategorizedLiterals;
pub use pipeline::{ExtractPipeline, ExtractReport};

use proptype_core::errors::ExtractResult;

/// Parse `source_text` and collect the categorized modifier literals.
///
/// This is the only entry point that knows about the upstream grammar and
/// declaration layout.
pub fn extract_categorized_literals(source_text: &str) -> ExtractResult<CategorizedLiterals> {
    let tree = parsers::java::JavaParser::new()?.parse(source_text)?;
    Ok(engine::visitor::collect_modifiers(&tree, source_text.as_bytes()))
}
