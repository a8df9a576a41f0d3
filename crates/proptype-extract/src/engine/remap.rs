//! Name-based category overrides.
//!
//! A few upstream modifiers are declared in the string array but hold a
//! reference to a domain object. These names are filed under the object's
//! category instead of the declaring array's.

use proptype_core::ModifierCategory;

pub const AGGREGATE_REMAPPING: [(&str, ModifierCategory); 6] = [
    ("Class", ModifierCategory::Class),
    ("Effect", ModifierCategory::Effect),
    ("Plumber Stat", ModifierCategory::Stat),
    ("Rollover Effect", ModifierCategory::Effect),
    ("Skill", ModifierCategory::Skill),
    ("Avatar", ModifierCategory::Monster),
];

/// Final category for `name` declared in the `declared` array.
pub fn remap(name: &str, declared: ModifierCategory) -> ModifierCategory {
    AGGREGATE_REMAPPING
        .iter()
        .find(|(literal, _)| *literal == name)
        .map(|(_, category)| *category)
        .unwrap_or(declared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remapped_names_ignore_declaring_array() {
        for declared in ModifierCategory::ALL {
            assert_eq!(remap("Rollover Effect", declared), ModifierCategory::Effect);
            assert_eq!(remap("Avatar", declared), ModifierCategory::Monster);
        }
    }

    #[test]
    fn other_names_keep_declaring_array() {
        assert_eq!(remap("Item Drop", ModifierCategory::Numeric), ModifierCategory::Numeric);
        // Case matters.
        assert_eq!(remap("avatar", ModifierCategory::String), ModifierCategory::String);
    }
}
