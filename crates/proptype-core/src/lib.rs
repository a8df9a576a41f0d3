//! # proptype-core
//!
//! Foundation crate for the proptype property system.
//! Defines the shared types, the external-collaborator traits (storage engine
//! and domain-object registry), errors, config, and tracing setup.
//! The extractor and accessor crates both depend on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ProptypeConfig;
pub use errors::error_code::ProptypeErrorCode;
pub use traits::{MemoryRegistry, MemoryStore, ObjectRegistry, PropertyStore};
pub use types::category::{ModifierCategory, ObjectKind, PropertyCategory};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::value::{DomainObject, IntoRawValue, TypedValue};
