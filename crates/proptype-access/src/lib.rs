//! # proptype-access
//!
//! Runtime typed access to a string-valued property store.
//!
//! Callers that know a property's type use the category getters
//! (`get_boolean`, `get_monster`, ...). Callers that don't use [`get`], which
//! classifies the property at runtime from the schema table and the shape of
//! its raw value.
//!
//! [`get`]: accessor::PropertyAccessor::get

pub mod accessor;
pub mod classifier;
pub mod schema;

pub use accessor::PropertyAccessor;
pub use classifier::{classify, is_boolean_shaped, is_numeric_shaped};
pub use schema::SchemaTable;
