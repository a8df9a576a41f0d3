//! Typed getters and setters over a `PropertyStore`.
//!
//! Every getter reads the raw string fresh from the store; nothing is
//! cached. When a default is supplied and the raw value is empty, the default
//! is returned without coercion.

use proptype_core::config::AccessConfig;
use proptype_core::errors::AccessResult;
use proptype_core::types::value::coerce_number;
use proptype_core::{
    DomainObject, IntoRawValue, ObjectKind, ObjectRegistry, PropertyCategory, PropertyStore,
    TypedValue,
};
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::schema::SchemaTable;

/// Read-then-coerce helper shared by every getter.
fn with_default<T>(raw: String, default: Option<T>, transform: impl FnOnce(String) -> T) -> T {
    match default {
        Some(default) if raw.is_empty() => default,
        _ => transform(raw),
    }
}

/// Split on `,` followed by at most one space.
fn split_comma_separated(raw: &str) -> Vec<String> {
    raw.split(',')
        .enumerate()
        .map(|(i, part)| {
            let part = if i > 0 { part.strip_prefix(' ').unwrap_or(part) } else { part };
            part.to_string()
        })
        .collect()
}

macro_rules! object_getters {
    ($($fn_name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Resolve the property as a `", stringify!($kind), "` reference.")]
            pub fn $fn_name(
                &self,
                name: &str,
                default: Option<DomainObject>,
            ) -> AccessResult<Option<DomainObject>> {
                self.get_object(ObjectKind::$kind, name, default)
            }
        )*
    };
}

/// Typed view over a raw property store.
pub struct PropertyAccessor<S, R> {
    store: S,
    registry: R,
    schema: SchemaTable,
}

impl<S: PropertyStore, R: ObjectRegistry> PropertyAccessor<S, R> {
    /// Accessor using the builtin schema table.
    pub fn new(store: S, registry: R) -> Self {
        Self::with_schema(store, registry, SchemaTable::builtin())
    }

    /// Accessor using the builtin table extended by `config`.
    pub fn from_config(store: S, registry: R, config: &AccessConfig) -> Self {
        Self::with_schema(store, registry, SchemaTable::from_config(config))
    }

    pub fn with_schema(store: S, registry: R, schema: SchemaTable) -> Self {
        Self {
            store,
            registry,
            schema,
        }
    }

    pub fn schema(&self) -> &SchemaTable {
        &self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The raw stored string, unmediated. Unset reads as `""`.
    pub fn get_raw(&self, name: &str) -> AccessResult<String> {
        Ok(self.store.read_string(name)?)
    }

    pub fn get_string(&self, name: &str, default: Option<&str>) -> AccessResult<String> {
        let raw = self.get_raw(name)?;
        Ok(with_default(raw, default.map(str::to_string), |raw| raw))
    }

    /// `true` only for the exact raw string `"true"`.
    pub fn get_boolean(&self, name: &str, default: Option<bool>) -> AccessResult<bool> {
        let raw = self.get_raw(name)?;
        Ok(with_default(raw, default, |raw| raw == "true"))
    }

    /// Numeric value, read like the host's `Number()`: decimal, exponent and
    /// `0x`/`0o`/`0b` forms. An unparseable raw string yields NaN rather than
    /// an error.
    pub fn get_number(&self, name: &str, default: Option<f64>) -> AccessResult<f64> {
        let raw = self.get_raw(name)?;
        Ok(with_default(raw, default, |raw| coerce_number(&raw)))
    }

    /// List value split on `,` or `, `. An empty raw value without a default
    /// is a one-element list holding `""`.
    pub fn get_comma_separated(
        &self,
        name: &str,
        default: Option<Vec<String>>,
    ) -> AccessResult<Vec<String>> {
        let raw = self.get_raw(name)?;
        Ok(with_default(raw, default, |raw| split_comma_separated(&raw)))
    }

    /// Resolve the property through the registry.
    ///
    /// `None` means the reference is unset: the raw value names the
    /// registry's "none" object, is empty with no default, or is unknown.
    pub fn get_object(
        &self,
        kind: ObjectKind,
        name: &str,
        default: Option<DomainObject>,
    ) -> AccessResult<Option<DomainObject>> {
        let raw = self.get_raw(name)?;
        Ok(with_default(raw, default.map(Some), |raw| {
            self.registry.resolve(kind, &raw)
        }))
    }

    object_getters! {
        get_bounty => Bounty,
        get_class => Class,
        get_coinmaster => Coinmaster,
        get_effect => Effect,
        get_element => Element,
        get_familiar => Familiar,
        get_item => Item,
        get_location => Location,
        get_monster => Monster,
        get_phylum => Phylum,
        get_servant => Servant,
        get_skill => Skill,
        get_slot => Slot,
        get_stat => Stat,
        get_thrall => Thrall,
    }

    /// The category `get` would use for this property right now.
    /// `None` means the value is absent.
    pub fn category_of(&self, name: &str) -> AccessResult<Option<PropertyCategory>> {
        let raw = self.get_raw(name)?;
        Ok(classify(&self.schema, name, &raw))
    }

    /// Read a property whose type the caller does not know.
    ///
    /// The raw value is read once and classified at runtime; see
    /// [`classify`]. An empty value returns `default` unchanged, whatever
    /// its type. Object categories without a default resolve the empty value
    /// through the registry, which yields `None`.
    pub fn get(&self, name: &str, default: Option<TypedValue>) -> AccessResult<Option<TypedValue>> {
        let raw = self.get_raw(name)?;
        let category = classify(&self.schema, name, &raw);
        trace!(name, category = ?category, "classified property");

        let value = match category {
            None => default,
            Some(PropertyCategory::Object(kind)) => with_default(raw, default.map(Some), |raw| {
                self.registry.resolve(kind, &raw).map(TypedValue::Object)
            }),
            Some(PropertyCategory::Boolean) => Some(TypedValue::Boolean(raw == "true")),
            Some(PropertyCategory::Numeric) => Some(TypedValue::Number(coerce_number(&raw))),
            Some(PropertyCategory::String) => Some(TypedValue::String(raw)),
        };
        Ok(value)
    }

    /// Write a value in its natural string form. `None` clears the property.
    ///
    /// Any name may be written with any value; the schema table is not
    /// consulted.
    pub fn set(&self, name: &str, value: impl IntoRawValue) -> AccessResult<()> {
        let raw = value.into_raw_value();
        debug!(name, raw = raw.as_str(), "setting property");
        self.store.write_string(name, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_split_eats_one_space() {
        assert_eq!(split_comma_separated("a, b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_comma_separated("a,  b"), vec!["a", " b"]);
        assert_eq!(split_comma_separated(""), vec![""]);
        assert_eq!(split_comma_separated(" a"), vec![" a"]);
    }

    #[test]
    fn default_only_replaces_empty_raw() {
        assert_eq!(with_default(String::new(), Some(5), |_| 0), 5);
        assert_eq!(with_default("3".to_string(), Some(5), |r| r.len()), 1);
        assert_eq!(with_default(String::new(), None::<usize>, |r| r.len()), 0);
    }
}
