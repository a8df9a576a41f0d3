//! Tree walk that turns modifier declarations into a categorized table.

pub mod literals;
pub mod remap;
pub mod types;
pub mod visitor;
