//! Property name → category table.
//!
//! The builtin table combines the generated modifier table, the curated
//! object-valued property lists, and any extra names from `AccessConfig`.
//! It is built once and never changes afterwards.

pub mod curated;
pub mod generated;

use proptype_core::config::AccessConfig;
use proptype_core::{FxHashMap, FxHashSet, ModifierCategory, ObjectKind, PropertyCategory};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct SchemaTable {
    names: FxHashMap<PropertyCategory, FxHashSet<String>>,
}

impl SchemaTable {
    /// A table with no known names; classification falls back to heuristics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generated modifier table plus curated object-valued properties.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (emitted, names) in generated::MODIFIER_TABLE {
            match ModifierCategory::from_emitted_name(emitted) {
                Some(category) => table.extend(category.property_category(), names.iter().copied()),
                None => warn!(category = emitted, "unknown category in generated table"),
            }
        }
        table.extend(
            PropertyCategory::Object(ObjectKind::Monster),
            curated::MONSTER_PROPERTIES.iter().copied(),
        );
        table.extend(
            PropertyCategory::Object(ObjectKind::Location),
            curated::LOCATION_PROPERTIES.iter().copied(),
        );
        table
    }

    /// The builtin table with `config`'s extra names merged in.
    pub fn from_config(config: &AccessConfig) -> Self {
        Self::builtin().with_overrides(config)
    }

    pub fn with_overrides(mut self, config: &AccessConfig) -> Self {
        self.extend(PropertyCategory::Boolean, &config.boolean);
        self.extend(PropertyCategory::Numeric, &config.numeric);
        self.extend(PropertyCategory::Object(ObjectKind::Monster), &config.monster);
        self.extend(PropertyCategory::Object(ObjectKind::Location), &config.location);
        self
    }

    pub fn insert(&mut self, category: PropertyCategory, name: impl Into<String>) {
        self.names.entry(category).or_default().insert(name.into());
    }

    pub fn extend<I>(&mut self, category: PropertyCategory, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.names
            .entry(category)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    /// Whether `name` is listed under `category`.
    pub fn contains(&self, category: PropertyCategory, name: &str) -> bool {
        self.names
            .get(&category)
            .is_some_and(|names| names.contains(name))
    }

    /// Number of names listed under `category`.
    pub fn len(&self, category: PropertyCategory) -> usize {
        self.names.get(&category).map_or(0, |names| names.len())
    }

    pub fn is_empty(&self) -> bool {
        self.names.values().all(|names| names.is_empty())
    }
}
