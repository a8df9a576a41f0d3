//! Contracts for the external collaborators: the string-keyed storage engine
//! and the domain-object registry. Both traits are object-safe,
//! `Send + Sync`, and have blanket `Arc<T>` impls.

pub mod memory;
pub mod registry;
pub mod store;

pub use memory::{MemoryRegistry, MemoryStore};
pub use registry::ObjectRegistry;
pub use store::PropertyStore;
