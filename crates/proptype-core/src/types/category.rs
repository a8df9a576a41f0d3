//! Category enums: what a raw property string should be read as.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry type tag for a domain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Bounty,
    Class,
    Coinmaster,
    Effect,
    Element,
    Familiar,
    Item,
    Location,
    Monster,
    Phylum,
    Servant,
    Skill,
    Slot,
    Stat,
    Thrall,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [ObjectKind; 15] = [
        ObjectKind::Bounty,
        ObjectKind::Class,
        ObjectKind::Coinmaster,
        ObjectKind::Effect,
        ObjectKind::Element,
        ObjectKind::Familiar,
        ObjectKind::Item,
        ObjectKind::Location,
        ObjectKind::Monster,
        ObjectKind::Phylum,
        ObjectKind::Servant,
        ObjectKind::Skill,
        ObjectKind::Slot,
        ObjectKind::Stat,
        ObjectKind::Thrall,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bounty => "bounty",
            Self::Class => "class",
            Self::Coinmaster => "coinmaster",
            Self::Effect => "effect",
            Self::Element => "element",
            Self::Familiar => "familiar",
            Self::Item => "item",
            Self::Location => "location",
            Self::Monster => "monster",
            Self::Phylum => "phylum",
            Self::Servant => "servant",
            Self::Skill => "skill",
            Self::Slot => "slot",
            Self::Stat => "stat",
            Self::Thrall => "thrall",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The semantic type of a property.
///
/// Every property name maps to exactly one category, either through the
/// schema table or through value-shape heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyCategory {
    Boolean,
    Numeric,
    String,
    Object(ObjectKind),
}

impl PropertyCategory {
    /// Returns the registry type tag for object categories.
    pub fn object_kind(self) -> Option<ObjectKind> {
        match self {
            Self::Object(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Numeric => f.write_str("numeric"),
            Self::String => f.write_str("string"),
            Self::Object(kind) => write!(f, "{kind}"),
        }
    }
}

/// Categories discovered by the schema extractor.
///
/// Declaration order is the emission order of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierCategory {
    Boolean,
    Class,
    Numeric,
    Effect,
    Monster,
    Skill,
    Stat,
    String,
}

impl ModifierCategory {
    pub const ALL: [ModifierCategory; 8] = [
        ModifierCategory::Boolean,
        ModifierCategory::Class,
        ModifierCategory::Numeric,
        ModifierCategory::Effect,
        ModifierCategory::Monster,
        ModifierCategory::Skill,
        ModifierCategory::Stat,
        ModifierCategory::String,
    ];

    /// Name used in the upstream declarations (`<source_name>Modifiers`).
    pub fn source_name(self) -> &'static str {
        match self {
            Self::Numeric => "double",
            other => other.emitted_name(),
        }
    }

    /// Name used in generated output.
    pub fn emitted_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Class => "class",
            Self::Numeric => "numeric",
            Self::Effect => "effect",
            Self::Monster => "monster",
            Self::Skill => "skill",
            Self::Stat => "stat",
            Self::String => "string",
        }
    }

    /// Name of the generated literal-union enum, e.g. `NumericModifier`.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Boolean => "BooleanModifier",
            Self::Class => "ClassModifier",
            Self::Numeric => "NumericModifier",
            Self::Effect => "EffectModifier",
            Self::Monster => "MonsterModifier",
            Self::Skill => "SkillModifier",
            Self::Stat => "StatModifier",
            Self::String => "StringModifier",
        }
    }

    /// Name of the generated ordered-sequence constant, e.g. `NUMERIC_MODIFIERS`.
    pub fn const_name(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN_MODIFIERS",
            Self::Class => "CLASS_MODIFIERS",
            Self::Numeric => "NUMERIC_MODIFIERS",
            Self::Effect => "EFFECT_MODIFIERS",
            Self::Monster => "MONSTER_MODIFIERS",
            Self::Skill => "SKILL_MODIFIERS",
            Self::Stat => "STAT_MODIFIERS",
            Self::String => "STRING_MODIFIERS",
        }
    }

    /// Match a declared identifier such as `doubleModifiers`.
    pub fn from_declaration(identifier: &str) -> Option<Self> {
        let source = identifier.strip_suffix("Modifiers")?;
        Self::ALL.into_iter().find(|c| c.source_name() == source)
    }

    pub fn from_emitted_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.emitted_name() == name)
    }

    /// The runtime category a name in this table classifies as.
    pub fn property_category(self) -> PropertyCategory {
        match self {
            Self::Boolean => PropertyCategory::Boolean,
            Self::Numeric => PropertyCategory::Numeric,
            Self::String => PropertyCategory::String,
            Self::Class => PropertyCategory::Object(ObjectKind::Class),
            Self::Effect => PropertyCategory::Object(ObjectKind::Effect),
            Self::Monster => PropertyCategory::Object(ObjectKind::Monster),
            Self::Skill => PropertyCategory::Object(ObjectKind::Skill),
            Self::Stat => PropertyCategory::Object(ObjectKind::Stat),
        }
    }
}

impl fmt::Display for ModifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emitted_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_declarations_map_to_numeric() {
        assert_eq!(
            ModifierCategory::from_declaration("doubleModifiers"),
            Some(ModifierCategory::Numeric)
        );
        assert_eq!(ModifierCategory::from_declaration("numericModifiers"), None);
        assert_eq!(ModifierCategory::Numeric.emitted_name(), "numeric");
    }

    #[test]
    fn unrelated_identifiers_do_not_match() {
        assert_eq!(ModifierCategory::from_declaration("modifiers"), None);
        assert_eq!(ModifierCategory::from_declaration("Modifiers"), None);
        assert_eq!(ModifierCategory::from_declaration("booleanModifier"), None);
        assert_eq!(ModifierCategory::from_declaration("itemModifiers"), None);
    }

    #[test]
    fn object_tables_classify_as_objects() {
        assert_eq!(
            ModifierCategory::Monster.property_category(),
            PropertyCategory::Object(ObjectKind::Monster)
        );
        assert_eq!(
            ModifierCategory::Boolean.property_category().object_kind(),
            None
        );
    }
}
