//! Shared value and category types.

pub mod category;
pub mod collections;
pub mod value;
