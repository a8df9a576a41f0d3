//! `ObjectRegistry` trait: resolves names to domain objects.

use std::sync::Arc;

use crate::types::category::ObjectKind;
use crate::types::value::DomainObject;

/// Name resolution for domain objects.
///
/// Every kind has a canonical "none" object in the host registry. It comes
/// back as `None` here, and so does any name the registry does not know.
/// Callers never compare against a sentinel instance.
pub trait ObjectRegistry: Send + Sync {
    fn resolve(&self, kind: ObjectKind, name: &str) -> Option<DomainObject>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: ObjectRegistry + ?Sized> ObjectRegistry for Arc<T> {
    fn resolve(&self, kind: ObjectKind, name: &str) -> Option<DomainObject> {
        (**self).resolve(kind, name)
    }
}
