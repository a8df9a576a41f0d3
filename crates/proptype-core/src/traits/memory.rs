//! In-memory implementations of the collaborator traits.
//!
//! Used by tests and by hosts that want a scratch property space.

use std::sync::{PoisonError, RwLock};

use crate::errors::StoreError;
use crate::types::category::ObjectKind;
use crate::types::collections::FxHashMap;
use crate::types::value::DomainObject;

use super::registry::ObjectRegistry;
use super::store::PropertyStore;

/// Hash-map backed `PropertyStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<FxHashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from `(key, raw value)` pairs.
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: RwLock::new(map),
            read_only: false,
        }
    }

    /// Reject every write with `StoreError::ReadOnly`.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of stored keys. A poisoned lock is a backend error.
    pub fn len(&self) -> Result<usize, StoreError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl PropertyStore for MemoryStore {
    fn read_string(&self, key: &str) -> Result<String, StoreError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned().unwrap_or_default())
    }

    fn write_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly {
                key: key.to_string(),
            });
        }
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn poisoned<T>(e: PoisonError<T>) -> StoreError {
    StoreError::Backend {
        message: e.to_string(),
    }
}

/// Registry over a fixed set of objects.
///
/// Lookup is by exact name within a kind. The literal name `none` and the
/// empty string never resolve.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    objects: FxHashMap<(ObjectKind, String), DomainObject>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object and return its id.
    pub fn register(&mut self, kind: ObjectKind, name: &str) -> i64 {
        let id = self.objects.len() as i64 + 1;
        self.objects
            .entry((kind, name.to_string()))
            .or_insert_with(|| DomainObject::new(kind, id, name))
            .id
    }

    pub fn with_objects<'a>(
        mut self,
        kind: ObjectKind,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        for name in names {
            self.register(kind, name);
        }
        self
    }
}

impl ObjectRegistry for MemoryRegistry {
    fn resolve(&self, kind: ObjectKind, name: &str) -> Option<DomainObject> {
        if name.is_empty() || name == "none" {
            return None;
        }
        self.objects.get(&(kind, name.to_string())).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_read_as_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.read_string("missing").unwrap(), "");
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryStore::with_values([("a", "1")]).read_only();
        let err = store.write_string("a", "2").unwrap_err();
        assert_eq!(err, StoreError::ReadOnly { key: "a".to_string() });
        assert_eq!(store.read_string("a").unwrap(), "1");
    }

    #[test]
    fn len_counts_written_keys() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
        store.write_string("a", "1").unwrap();
        store.write_string("a", "2").unwrap();
        store.write_string("b", "").unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn poisoned_lock_surfaces_as_backend_error() {
        let store = MemoryStore::with_values([("a", "1")]);
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.values.write().unwrap();
            panic!("writer died holding the lock");
        }));

        assert!(matches!(store.len(), Err(StoreError::Backend { .. })));
        assert!(matches!(store.is_empty(), Err(StoreError::Backend { .. })));
        assert!(matches!(store.read_string("a"), Err(StoreError::Backend { .. })));
        assert!(matches!(
            store.write_string("a", "2"),
            Err(StoreError::Backend { .. })
        ));
    }

    #[test]
    fn registry_none_never_resolves() {
        let registry = MemoryRegistry::new().with_objects(ObjectKind::Monster, ["none", "Knob Goblin"]);
        assert!(registry.resolve(ObjectKind::Monster, "none").is_none());
        assert!(registry.resolve(ObjectKind::Monster, "").is_none());
        assert!(registry.resolve(ObjectKind::Location, "Knob Goblin").is_none());
        let goblin = registry.resolve(ObjectKind::Monster, "Knob Goblin").unwrap();
        assert_eq!(goblin.kind, ObjectKind::Monster);
    }

    #[test]
    fn registering_twice_keeps_first_id() {
        let mut registry = MemoryRegistry::new();
        let first = registry.register(ObjectKind::Item, "seal-clubbing club");
        let second = registry.register(ObjectKind::Item, "seal-clubbing club");
        assert_eq!(first, second);
    }
}
