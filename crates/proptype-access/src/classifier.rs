//! Heuristic property classification.
//!
//! Table lookups come first for object categories, whose raw values are bare
//! names indistinguishable from free-form strings. Boolean and numeric
//! properties also fall back to the shape of the raw value, since the table
//! only covers names declared upstream.

use proptype_core::types::value::parse_number;
use proptype_core::{ObjectKind, PropertyCategory};

use crate::schema::SchemaTable;

/// Raw value is exactly `"true"` or `"false"`.
pub fn is_boolean_shaped(raw: &str) -> bool {
    raw == "true" || raw == "false"
}

/// Raw value is a non-blank base-10 number.
pub fn is_numeric_shaped(raw: &str) -> bool {
    !raw.trim().is_empty() && !parse_number(raw).is_nan()
}

/// Classify a property for the polymorphic getter.
///
/// Returns `None` when the value is absent: the raw string is empty and no
/// object category claimed the name. Monster and location properties are
/// classified even when empty, because their getters handle absence
/// themselves.
pub fn classify(table: &SchemaTable, name: &str, raw: &str) -> Option<PropertyCategory> {
    const MONSTER: PropertyCategory = PropertyCategory::Object(ObjectKind::Monster);
    const LOCATION: PropertyCategory = PropertyCategory::Object(ObjectKind::Location);

    if table.contains(MONSTER, name) {
        return Some(MONSTER);
    }
    if table.contains(LOCATION, name) {
        return Some(LOCATION);
    }
    if raw.is_empty() {
        return None;
    }
    if table.contains(PropertyCategory::Boolean, name) || is_boolean_shaped(raw) {
        return Some(PropertyCategory::Boolean);
    }
    if table.contains(PropertyCategory::Numeric, name) || is_numeric_shaped(raw) {
        return Some(PropertyCategory::Numeric);
    }
    Some(PropertyCategory::String)
}
