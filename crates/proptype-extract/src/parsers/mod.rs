//! Parser wrappers around the tree-sitter grammars.

pub mod java;
