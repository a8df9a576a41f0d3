//! `PropertyStore` trait: the string-keyed storage engine.

use std::sync::Arc;

use crate::errors::StoreError;

/// Raw string storage. Every value is persisted as a string.
pub trait PropertyStore: Send + Sync {
    /// Read the raw value for `key`. An unset key reads as `""`.
    fn read_string(&self, key: &str) -> Result<String, StoreError>;

    /// Overwrite the raw value for `key`.
    fn write_string(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: PropertyStore + ?Sized> PropertyStore for Arc<T> {
    fn read_string(&self, key: &str) -> Result<String, StoreError> {
        (**self).read_string(key)
    }
    fn write_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write_string(key, value)
    }
}
