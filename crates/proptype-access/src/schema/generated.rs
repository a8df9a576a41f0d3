// THIS FILE IS AUTOMATICALLY GENERATED by proptype-extract from
// https://raw.githubusercontent.com/kolmafia/kolmafia/main/src/net/sourceforge/kolmafia/Modifiers.java
// Do not edit by hand; rerun `proptype-extract` instead.

#![allow(clippy::enum_variant_names)]

pub const BOOLEAN_MODIFIERS: &[&str] = &[
    "Softcore Only",
    "Single Equip",
    "Never Fumble",
    "Weakens Monster",
    "Free Pull",
    "Variable",
    "Nonstackable Watch",
    "Cold Immunity",
    "Hot Immunity",
    "Sleaze Immunity",
    "Spooky Immunity",
    "Stench Immunity",
    "Cold Vulnerability",
    "Hot Vulnerability",
    "Sleaze Vulnerability",
    "Spooky Vulnerability",
    "Stench Vulnerability",
    "Moxie Controls MP",
    "Moxie May Control MP",
    "Four Songs",
    "Adventure Underwater",
    "Underwater Familiar",
    "Generic",
    "Unarmed",
    "No Pull",
    "Lasts Until Rollover",
    "Attacks Can't Miss",
    "Pirate",
    "Breakable",
    "Drops Items",
    "Drops Meat",
    "Volleyball or Sombrero",
    "Extra Pickpocket",
    "Negative Status Resist",
];

/// Literal union over [`BOOLEAN_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanModifier {
    SoftcoreOnly,
    SingleEquip,
    NeverFumble,
    WeakensMonster,
    FreePull,
    Variable,
    NonstackableWatch,
    ColdImmunity,
    HotImmunity,
    SleazeImmunity,
    SpookyImmunity,
    StenchImmunity,
    ColdVulnerability,
    HotVulnerability,
    SleazeVulnerability,
    SpookyVulnerability,
    StenchVulnerability,
    MoxieControlsMp,
    MoxieMayControlMp,
    FourSongs,
    AdventureUnderwater,
    UnderwaterFamiliar,
    Generic,
    Unarmed,
    NoPull,
    LastsUntilRollover,
    AttacksCanTMiss,
    Pirate,
    Breakable,
    DropsItems,
    DropsMeat,
    VolleyballOrSombrero,
    ExtraPickpocket,
    NegativeStatusResist,
}

impl BooleanModifier {
    pub const ALL: &'static [Self] = &[
        Self::SoftcoreOnly,
        Self::SingleEquip,
        Self::NeverFumble,
        Self::WeakensMonster,
        Self::FreePull,
        Self::Variable,
        Self::NonstackableWatch,
        Self::ColdImmunity,
        Self::HotImmunity,
        Self::SleazeImmunity,
        Self::SpookyImmunity,
        Self::StenchImmunity,
        Self::ColdVulnerability,
        Self::HotVulnerability,
        Self::SleazeVulnerability,
        Self::SpookyVulnerability,
        Self::StenchVulnerability,
        Self::MoxieControlsMp,
        Self::MoxieMayControlMp,
        Self::FourSongs,
        Self::AdventureUnderwater,
        Self::UnderwaterFamiliar,
        Self::Generic,
        Self::Unarmed,
        Self::NoPull,
        Self::LastsUntilRollover,
        Self::AttacksCanTMiss,
        Self::Pirate,
        Self::Breakable,
        Self::DropsItems,
        Self::DropsMeat,
        Self::VolleyballOrSombrero,
        Self::ExtraPickpocket,
        Self::NegativeStatusResist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftcoreOnly => "Softcore Only",
            Self::SingleEquip => "Single Equip",
            Self::NeverFumble => "Never Fumble",
            Self::WeakensMonster => "Weakens Monster",
            Self::FreePull => "Free Pull",
            Self::Variable => "Variable",
            Self::NonstackableWatch => "Nonstackable Watch",
            Self::ColdImmunity => "Cold Immunity",
            Self::HotImmunity => "Hot Immunity",
            Self::SleazeImmunity => "Sleaze Immunity",
            Self::SpookyImmunity => "Spooky Immunity",
            Self::StenchImmunity => "Stench Immunity",
            Self::ColdVulnerability => "Cold Vulnerability",
            Self::HotVulnerability => "Hot Vulnerability",
            Self::SleazeVulnerability => "Sleaze Vulnerability",
            Self::SpookyVulnerability => "Spooky Vulnerability",
            Self::StenchVulnerability => "Stench Vulnerability",
            Self::MoxieControlsMp => "Moxie Controls MP",
            Self::MoxieMayControlMp => "Moxie May Control MP",
            Self::FourSongs => "Four Songs",
            Self::AdventureUnderwater => "Adventure Underwater",
            Self::UnderwaterFamiliar => "Underwater Familiar",
            Self::Generic => "Generic",
            Self::Unarmed => "Unarmed",
            Self::NoPull => "No Pull",
            Self::LastsUntilRollover => "Lasts Until Rollover",
            Self::AttacksCanTMiss => "Attacks Can't Miss",
            Self::Pirate => "Pirate",
            Self::Breakable => "Breakable",
            Self::DropsItems => "Drops Items",
            Self::DropsMeat => "Drops Meat",
            Self::VolleyballOrSombrero => "Volleyball or Sombrero",
            Self::ExtraPickpocket => "Extra Pickpocket",
            Self::NegativeStatusResist => "Negative Status Resist",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Softcore Only" => Some(Self::SoftcoreOnly),
            "Single Equip" => Some(Self::SingleEquip),
            "Never Fumble" => Some(Self::NeverFumble),
            "Weakens Monster" => Some(Self::WeakensMonster),
            "Free Pull" => Some(Self::FreePull),
            "Variable" => Some(Self::Variable),
            "Nonstackable Watch" => Some(Self::NonstackableWatch),
            "Cold Immunity" => Some(Self::ColdImmunity),
            "Hot Immunity" => Some(Self::HotImmunity),
            "Sleaze Immunity" => Some(Self::SleazeImmunity),
            "Spooky Immunity" => Some(Self::SpookyImmunity),
            "Stench Immunity" => Some(Self::StenchImmunity),
            "Cold Vulnerability" => Some(Self::ColdVulnerability),
            "Hot Vulnerability" => Some(Self::HotVulnerability),
            "Sleaze Vulnerability" => Some(Self::SleazeVulnerability),
            "Spooky Vulnerability" => Some(Self::SpookyVulnerability),
            "Stench Vulnerability" => Some(Self::StenchVulnerability),
            "Moxie Controls MP" => Some(Self::MoxieControlsMp),
            "Moxie May Control MP" => Some(Self::MoxieMayControlMp),
            "Four Songs" => Some(Self::FourSongs),
            "Adventure Underwater" => Some(Self::AdventureUnderwater),
            "Underwater Familiar" => Some(Self::UnderwaterFamiliar),
            "Generic" => Some(Self::Generic),
            "Unarmed" => Some(Self::Unarmed),
            "No Pull" => Some(Self::NoPull),
            "Lasts Until Rollover" => Some(Self::LastsUntilRollover),
            "Attacks Can't Miss" => Some(Self::AttacksCanTMiss),
            "Pirate" => Some(Self::Pirate),
            "Breakable" => Some(Self::Breakable),
            "Drops Items" => Some(Self::DropsItems),
            "Drops Meat" => Some(Self::DropsMeat),
            "Volleyball or Sombrero" => Some(Self::VolleyballOrSombrero),
            "Extra Pickpocket" => Some(Self::ExtraPickpocket),
            "Negative Status Resist" => Some(Self::NegativeStatusResist),
            _ => None,
        }
    }
}

impl std::fmt::Display for BooleanModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const CLASS_MODIFIERS: &[&str] = &[
    "Class",
];

/// Literal union over [`CLASS_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassModifier {
    Class,
}

impl ClassModifier {
    pub const ALL: &'static [Self] = &[
        Self::Class,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "Class",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Class" => Some(Self::Class),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClassModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const NUMERIC_MODIFIERS: &[&str] = &[
    "Familiar Weight",
    "Monster Level",
    "Combat Rate",
    "Initiative",
    "Experience",
    "Item Drop",
    "Meat Drop",
    "Damage Absorption",
    "Damage Reduction",
    "Cold Resistance",
    "Hot Resistance",
    "Sleaze Resistance",
    "Spooky Resistance",
    "Stench Resistance",
    "Mana Cost",
    "Moxie",
    "Moxie Percent",
    "Muscle",
    "Muscle Percent",
    "Mysticality",
    "Mysticality Percent",
    "Maximum HP",
    "Maximum HP Percent",
    "Maximum MP",
    "Maximum MP Percent",
    "Weapon Damage",
    "Ranged Damage",
    "Spell Damage",
    "Spell Damage Percent",
    "Cold Damage",
    "Hot Damage",
    "Sleaze Damage",
    "Spooky Damage",
    "Stench Damage",
    "Cold Spell Damage",
    "Hot Spell Damage",
    "Sleaze Spell Damage",
    "Spooky Spell Damage",
    "Stench Spell Damage",
    "Critical Hit Percent",
    "Fumble",
    "HP Regen Min",
    "HP Regen Max",
    "MP Regen Min",
    "MP Regen Max",
    "Adventures",
    "Familiar Weight Percent",
    "Weapon Damage Percent",
    "Ranged Damage Percent",
    "Stackable Mana Cost",
    "Hobo Power",
    "Base Resting HP",
    "Resting HP Percent",
    "Bonus Resting HP",
    "Base Resting MP",
    "Resting MP Percent",
    "Bonus Resting MP",
    "Critical Hit Percent",
    "Spell Critical Percent",
    "Food Drop",
    "Booze Drop",
    "Hat Drop",
    "Weapon Drop",
    "Offhand Drop",
    "Shirt Drop",
    "Pants Drop",
    "Accessory Drop",
    "Candy Drop",
    "Volleyball Effectiveness",
    "Sombrero Effectiveness",
    "Leprechaun Effectiveness",
    "Fairy Effectiveness",
    "Meat Drop Penalty",
    "Experience (familiar)",
    "Experience (Muscle)",
    "Experience (Mysticality)",
    "Experience (Moxie)",
    "Effect Duration",
    "Muscle Experience Percent",
    "Mysticality Experience Percent",
    "Moxie Experience Percent",
    "Slime Resistance",
    "Slime Hates It",
    "Spell Damage",
    "PvP Fights",
    "Sprinkle Drop",
    "Pool Skill",
    "Surgeonosity",
    "Familiar Damage",
    "Gear Drop",
    "Maximum Hooch",
    "Water Level",
    "Crimbot Outfit Power",
    "Familiar Tuning Muscle",
    "Familiar Tuning Mysticality",
    "Familiar Tuning Moxie",
    "Clowniness",
    "Raveosity",
    "Drippy Damage",
    "Lightning Damage",
];

/// Literal union over [`NUMERIC_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericModifier {
    FamiliarWeight,
    MonsterLevel,
    CombatRate,
    Initiative,
    Experience,
    ItemDrop,
    MeatDrop,
    DamageAbsorption,
    DamageReduction,
    ColdResistance,
    HotResistance,
    SleazeResistance,
    SpookyResistance,
    StenchResistance,
    ManaCost,
    Moxie,
    MoxiePercent,
    Muscle,
    MusclePercent,
    Mysticality,
    MysticalityPercent,
    MaximumHp,
    MaximumHpPercent,
    MaximumMp,
    MaximumMpPercent,
    WeaponDamage,
    RangedDamage,
    SpellDamage,
    SpellDamagePercent,
    ColdDamage,
    HotDamage,
    SleazeDamage,
    SpookyDamage,
    StenchDamage,
    ColdSpellDamage,
    HotSpellDamage,
    SleazeSpellDamage,
    SpookySpellDamage,
    StenchSpellDamage,
    CriticalHitPercent,
    Fumble,
    HpRegenMin,
    HpRegenMax,
    MpRegenMin,
    MpRegenMax,
    Adventures,
    FamiliarWeightPercent,
    WeaponDamagePercent,
    RangedDamagePercent,
    StackableManaCost,
    HoboPower,
    BaseRestingHp,
    RestingHpPercent,
    BonusRestingHp,
    BaseRestingMp,
    RestingMpPercent,
    BonusRestingMp,
    SpellCriticalPercent,
    FoodDrop,
    BoozeDrop,
    HatDrop,
    WeaponDrop,
    OffhandDrop,
    ShirtDrop,
    PantsDrop,
    AccessoryDrop,
    CandyDrop,
    VolleyballEffectiveness,
    SombreroEffectiveness,
    LeprechaunEffectiveness,
    FairyEffectiveness,
    MeatDropPenalty,
    ExperienceFamiliar,
    ExperienceMuscle,
    ExperienceMysticality,
    ExperienceMoxie,
    EffectDuration,
    MuscleExperiencePercent,
    MysticalityExperiencePercent,
    MoxieExperiencePercent,
    SlimeResistance,
    SlimeHatesIt,
    PvpFights,
    SprinkleDrop,
    PoolSkill,
    Surgeonosity,
    FamiliarDamage,
    GearDrop,
    MaximumHooch,
    WaterLevel,
    CrimbotOutfitPower,
    FamiliarTuningMuscle,
    FamiliarTuningMysticality,
    FamiliarTuningMoxie,
    Clowniness,
    Raveosity,
    DrippyDamage,
    LightningDamage,
}

impl NumericModifier {
    pub const ALL: &'static [Self] = &[
        Self::FamiliarWeight,
        Self::MonsterLevel,
        Self::CombatRate,
        Self::Initiative,
        Self::Experience,
        Self::ItemDrop,
        Self::MeatDrop,
        Self::DamageAbsorption,
        Self::DamageReduction,
        Self::ColdResistance,
        Self::HotResistance,
        Self::SleazeResistance,
        Self::SpookyResistance,
        Self::StenchResistance,
        Self::ManaCost,
        Self::Moxie,
        Self::MoxiePercent,
        Self::Muscle,
        Self::MusclePercent,
        Self::Mysticality,
        Self::MysticalityPercent,
        Self::MaximumHp,
        Self::MaximumHpPercent,
        Self::MaximumMp,
        Self::MaximumMpPercent,
        Self::WeaponDamage,
        Self::RangedDamage,
        Self::SpellDamage,
        Self::SpellDamagePercent,
        Self::ColdDamage,
        Self::HotDamage,
        Self::SleazeDamage,
        Self::SpookyDamage,
        Self::StenchDamage,
        Self::ColdSpellDamage,
        Self::HotSpellDamage,
        Self::SleazeSpellDamage,
        Self::SpookySpellDamage,
        Self::StenchSpellDamage,
        Self::CriticalHitPercent,
        Self::Fumble,
        Self::HpRegenMin,
        Self::HpRegenMax,
        Self::MpRegenMin,
        Self::MpRegenMax,
        Self::Adventures,
        Self::FamiliarWeightPercent,
        Self::WeaponDamagePercent,
        Self::RangedDamagePercent,
        Self::StackableManaCost,
        Self::HoboPower,
        Self::BaseRestingHp,
        Self::RestingHpPercent,
        Self::BonusRestingHp,
        Self::BaseRestingMp,
        Self::RestingMpPercent,
        Self::BonusRestingMp,
        Self::SpellCriticalPercent,
        Self::FoodDrop,
        Self::BoozeDrop,
        Self::HatDrop,
        Self::WeaponDrop,
        Self::OffhandDrop,
        Self::ShirtDrop,
        Self::PantsDrop,
        Self::AccessoryDrop,
        Self::CandyDrop,
        Self::VolleyballEffectiveness,
        Self::SombreroEffectiveness,
        Self::LeprechaunEffectiveness,
        Self::FairyEffectiveness,
        Self::MeatDropPenalty,
        Self::ExperienceFamiliar,
        Self::ExperienceMuscle,
        Self::ExperienceMysticality,
        Self::ExperienceMoxie,
        Self::EffectDuration,
        Self::MuscleExperiencePercent,
        Self::MysticalityExperiencePercent,
        Self::MoxieExperiencePercent,
        Self::SlimeResistance,
        Self::SlimeHatesIt,
        Self::PvpFights,
        Self::SprinkleDrop,
        Self::PoolSkill,
        Self::Surgeonosity,
        Self::FamiliarDamage,
        Self::GearDrop,
        Self::MaximumHooch,
        Self::WaterLevel,
        Self::CrimbotOutfitPower,
        Self::FamiliarTuningMuscle,
        Self::FamiliarTuningMysticality,
        Self::FamiliarTuningMoxie,
        Self::Clowniness,
        Self::Raveosity,
        Self::DrippyDamage,
        Self::LightningDamage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FamiliarWeight => "Familiar Weight",
            Self::MonsterLevel => "Monster Level",
            Self::CombatRate => "Combat Rate",
            Self::Initiative => "Initiative",
            Self::Experience => "Experience",
            Self::ItemDrop => "Item Drop",
            Self::MeatDrop => "Meat Drop",
            Self::DamageAbsorption => "Damage Absorption",
            Self::DamageReduction => "Damage Reduction",
            Self::ColdResistance => "Cold Resistance",
            Self::HotResistance => "Hot Resistance",
            Self::SleazeResistance => "Sleaze Resistance",
            Self::SpookyResistance => "Spooky Resistance",
            Self::StenchResistance => "Stench Resistance",
            Self::ManaCost => "Mana Cost",
            Self::Moxie => "Moxie",
            Self::MoxiePercent => "Moxie Percent",
            Self::Muscle => "Muscle",
            Self::MusclePercent => "Muscle Percent",
            Self::Mysticality => "Mysticality",
            Self::MysticalityPercent => "Mysticality Percent",
            Self::MaximumHp => "Maximum HP",
            Self::MaximumHpPercent => "Maximum HP Percent",
            Self::MaximumMp => "Maximum MP",
            Self::MaximumMpPercent => "Maximum MP Percent",
            Self::WeaponDamage => "Weapon Damage",
            Self::RangedDamage => "Ranged Damage",
            Self::SpellDamage => "Spell Damage",
            Self::SpellDamagePercent => "Spell Damage Percent",
            Self::ColdDamage => "Cold Damage",
            Self::HotDamage => "Hot Damage",
            Self::SleazeDamage => "Sleaze Damage",
            Self::SpookyDamage => "Spooky Damage",
            Self::StenchDamage => "Stench Damage",
            Self::ColdSpellDamage => "Cold Spell Damage",
            Self::HotSpellDamage => "Hot Spell Damage",
            Self::SleazeSpellDamage => "Sleaze Spell Damage",
            Self::SpookySpellDamage => "Spooky Spell Damage",
            Self::StenchSpellDamage => "Stench Spell Damage",
            Self::CriticalHitPercent => "Critical Hit Percent",
            Self::Fumble => "Fumble",
            Self::HpRegenMin => "HP Regen Min",
            Self::HpRegenMax => "HP Regen Max",
            Self::MpRegenMin => "MP Regen Min",
            Self::MpRegenMax => "MP Regen Max",
            Self::Adventures => "Adventures",
            Self::FamiliarWeightPercent => "Familiar Weight Percent",
            Self::WeaponDamagePercent => "Weapon Damage Percent",
            Self::RangedDamagePercent => "Ranged Damage Percent",
            Self::StackableManaCost => "Stackable Mana Cost",
            Self::HoboPower => "Hobo Power",
            Self::BaseRestingHp => "Base Resting HP",
            Self::RestingHpPercent => "Resting HP Percent",
            Self::BonusRestingHp => "Bonus Resting HP",
            Self::BaseRestingMp => "Base Resting MP",
            Self::RestingMpPercent => "Resting MP Percent",
            Self::BonusRestingMp => "Bonus Resting MP",
            Self::SpellCriticalPercent => "Spell Critical Percent",
            Self::FoodDrop => "Food Drop",
            Self::BoozeDrop => "Booze Drop",
            Self::HatDrop => "Hat Drop",
            Self::WeaponDrop => "Weapon Drop",
            Self::OffhandDrop => "Offhand Drop",
            Self::ShirtDrop => "Shirt Drop",
            Self::PantsDrop => "Pants Drop",
            Self::AccessoryDrop => "Accessory Drop",
            Self::CandyDrop => "Candy Drop",
            Self::VolleyballEffectiveness => "Volleyball Effectiveness",
            Self::SombreroEffectiveness => "Sombrero Effectiveness",
            Self::LeprechaunEffectiveness => "Leprechaun Effectiveness",
            Self::FairyEffectiveness => "Fairy Effectiveness",
            Self::MeatDropPenalty => "Meat Drop Penalty",
            Self::ExperienceFamiliar => "Experience (familiar)",
            Self::ExperienceMuscle => "Experience (Muscle)",
            Self::ExperienceMysticality => "Experience (Mysticality)",
            Self::ExperienceMoxie => "Experience (Moxie)",
            Self::EffectDuration => "Effect Duration",
            Self::MuscleExperiencePercent => "Muscle Experience Percent",
            Self::MysticalityExperiencePercent => "Mysticality Experience Percent",
            Self::MoxieExperiencePercent => "Moxie Experience Percent",
            Self::SlimeResistance => "Slime Resistance",
            Self::SlimeHatesIt => "Slime Hates It",
            Self::PvpFights => "PvP Fights",
            Self::SprinkleDrop => "Sprinkle Drop",
            Self::PoolSkill => "Pool Skill",
            Self::Surgeonosity => "Surgeonosity",
            Self::FamiliarDamage => "Familiar Damage",
            Self::GearDrop => "Gear Drop",
            Self::MaximumHooch => "Maximum Hooch",
            Self::WaterLevel => "Water Level",
            Self::CrimbotOutfitPower => "Crimbot Outfit Power",
            Self::FamiliarTuningMuscle => "Familiar Tuning Muscle",
            Self::FamiliarTuningMysticality => "Familiar Tuning Mysticality",
            Self::FamiliarTuningMoxie => "Familiar Tuning Moxie",
            Self::Clowniness => "Clowniness",
            Self::Raveosity => "Raveosity",
            Self::DrippyDamage => "Drippy Damage",
            Self::LightningDamage => "Lightning Damage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Familiar Weight" => Some(Self::FamiliarWeight),
            "Monster Level" => Some(Self::MonsterLevel),
            "Combat Rate" => Some(Self::CombatRate),
            "Initiative" => Some(Self::Initiative),
            "Experience" => Some(Self::Experience),
            "Item Drop" => Some(Self::ItemDrop),
            "Meat Drop" => Some(Self::MeatDrop),
            "Damage Absorption" => Some(Self::DamageAbsorption),
            "Damage Reduction" => Some(Self::DamageReduction),
            "Cold Resistance" => Some(Self::ColdResistance),
            "Hot Resistance" => Some(Self::HotResistance),
            "Sleaze Resistance" => Some(Self::SleazeResistance),
            "Spooky Resistance" => Some(Self::SpookyResistance),
            "Stench Resistance" => Some(Self::StenchResistance),
            "Mana Cost" => Some(Self::ManaCost),
            "Moxie" => Some(Self::Moxie),
            "Moxie Percent" => Some(Self::MoxiePercent),
            "Muscle" => Some(Self::Muscle),
            "Muscle Percent" => Some(Self::MusclePercent),
            "Mysticality" => Some(Self::Mysticality),
            "Mysticality Percent" => Some(Self::MysticalityPercent),
            "Maximum HP" => Some(Self::MaximumHp),
            "Maximum HP Percent" => Some(Self::MaximumHpPercent),
            "Maximum MP" => Some(Self::MaximumMp),
            "Maximum MP Percent" => Some(Self::MaximumMpPercent),
            "Weapon Damage" => Some(Self::WeaponDamage),
            "Ranged Damage" => Some(Self::RangedDamage),
            "Spell Damage" => Some(Self::SpellDamage),
            "Spell Damage Percent" => Some(Self::SpellDamagePercent),
            "Cold Damage" => Some(Self::ColdDamage),
            "Hot Damage" => Some(Self::HotDamage),
            "Sleaze Damage" => Some(Self::SleazeDamage),
            "Spooky Damage" => Some(Self::SpookyDamage),
            "Stench Damage" => Some(Self::StenchDamage),
            "Cold Spell Damage" => Some(Self::ColdSpellDamage),
            "Hot Spell Damage" => Some(Self::HotSpellDamage),
            "Sleaze Spell Damage" => Some(Self::SleazeSpellDamage),
            "Spooky Spell Damage" => Some(Self::SpookySpellDamage),
            "Stench Spell Damage" => Some(Self::StenchSpellDamage),
            "Critical Hit Percent" => Some(Self::CriticalHitPercent),
            "Fumble" => Some(Self::Fumble),
            "HP Regen Min" => Some(Self::HpRegenMin),
            "HP Regen Max" => Some(Self::HpRegenMax),
            "MP Regen Min" => Some(Self::MpRegenMin),
            "MP Regen Max" => Some(Self::MpRegenMax),
            "Adventures" => Some(Self::Adventures),
            "Familiar Weight Percent" => Some(Self::FamiliarWeightPercent),
            "Weapon Damage Percent" => Some(Self::WeaponDamagePercent),
            "Ranged Damage Percent" => Some(Self::RangedDamagePercent),
            "Stackable Mana Cost" => Some(Self::StackableManaCost),
            "Hobo Power" => Some(Self::HoboPower),
            "Base Resting HP" => Some(Self::BaseRestingHp),
            "Resting HP Percent" => Some(Self::RestingHpPercent),
            "Bonus Resting HP" => Some(Self::BonusRestingHp),
            "Base Resting MP" => Some(Self::BaseRestingMp),
            "Resting MP Percent" => Some(Self::RestingMpPercent),
            "Bonus Resting MP" => Some(Self::BonusRestingMp),
            "Spell Critical Percent" => Some(Self::SpellCriticalPercent),
            "Food Drop" => Some(Self::FoodDrop),
            "Booze Drop" => Some(Self::BoozeDrop),
            "Hat Drop" => Some(Self::HatDrop),
            "Weapon Drop" => Some(Self::WeaponDrop),
            "Offhand Drop" => Some(Self::OffhandDrop),
            "Shirt Drop" => Some(Self::ShirtDrop),
            "Pants Drop" => Some(Self::PantsDrop),
            "Accessory Drop" => Some(Self::AccessoryDrop),
            "Candy Drop" => Some(Self::CandyDrop),
            "Volleyball Effectiveness" => Some(Self::VolleyballEffectiveness),
            "Sombrero Effectiveness" => Some(Self::SombreroEffectiveness),
            "Leprechaun Effectiveness" => Some(Self::LeprechaunEffectiveness),
            "Fairy Effectiveness" => Some(Self::FairyEffectiveness),
            "Meat Drop Penalty" => Some(Self::MeatDropPenalty),
            "Experience (familiar)" => Some(Self::ExperienceFamiliar),
            "Experience (Muscle)" => Some(Self::ExperienceMuscle),
            "Experience (Mysticality)" => Some(Self::ExperienceMysticality),
            "Experience (Moxie)" => Some(Self::ExperienceMoxie),
            "Effect Duration" => Some(Self::EffectDuration),
            "Muscle Experience Percent" => Some(Self::MuscleExperiencePercent),
            "Mysticality Experience Percent" => Some(Self::MysticalityExperiencePercent),
            "Moxie Experience Percent" => Some(Self::MoxieExperiencePercent),
            "Slime Resistance" => Some(Self::SlimeResistance),
            "Slime Hates It" => Some(Self::SlimeHatesIt),
            "PvP Fights" => Some(Self::PvpFights),
            "Sprinkle Drop" => Some(Self::SprinkleDrop),
            "Pool Skill" => Some(Self::PoolSkill),
            "Surgeonosity" => Some(Self::Surgeonosity),
            "Familiar Damage" => Some(Self::FamiliarDamage),
            "Gear Drop" => Some(Self::GearDrop),
            "Maximum Hooch" => Some(Self::MaximumHooch),
            "Water Level" => Some(Self::WaterLevel),
            "Crimbot Outfit Power" => Some(Self::CrimbotOutfitPower),
            "Familiar Tuning Muscle" => Some(Self::FamiliarTuningMuscle),
            "Familiar Tuning Mysticality" => Some(Self::FamiliarTuningMysticality),
            "Familiar Tuning Moxie" => Some(Self::FamiliarTuningMoxie),
            "Clowniness" => Some(Self::Clowniness),
            "Raveosity" => Some(Self::Raveosity),
            "Drippy Damage" => Some(Self::DrippyDamage),
            "Lightning Damage" => Some(Self::LightningDamage),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumericModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const EFFECT_MODIFIERS: &[&str] = &[
    "Effect",
    "Rollover Effect",
];

/// Literal union over [`EFFECT_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectModifier {
    Effect,
    RolloverEffect,
}

impl EffectModifier {
    pub const ALL: &'static [Self] = &[
        Self::Effect,
        Self::RolloverEffect,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Effect => "Effect",
            Self::RolloverEffect => "Rollover Effect",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Effect" => Some(Self::Effect),
            "Rollover Effect" => Some(Self::RolloverEffect),
            _ => None,
        }
    }
}

impl std::fmt::Display for EffectModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MONSTER_MODIFIERS: &[&str] = &[
    "Avatar",
];

/// Literal union over [`MONSTER_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterModifier {
    Avatar,
}

impl MonsterModifier {
    pub const ALL: &'static [Self] = &[
        Self::Avatar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "Avatar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Avatar" => Some(Self::Avatar),
            _ => None,
        }
    }
}

impl std::fmt::Display for MonsterModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SKILL_MODIFIERS: &[&str] = &[
    "Skill",
];

/// Literal union over [`SKILL_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillModifier {
    Skill,
}

impl SkillModifier {
    pub const ALL: &'static [Self] = &[
        Self::Skill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "Skill",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Skill" => Some(Self::Skill),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const STAT_MODIFIERS: &[&str] = &[
    "Plumber Stat",
];

/// Literal union over [`STAT_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatModifier {
    PlumberStat,
}

impl StatModifier {
    pub const ALL: &'static [Self] = &[
        Self::PlumberStat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlumberStat => "Plumber Stat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Plumber Stat" => Some(Self::PlumberStat),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const STRING_MODIFIERS: &[&str] = &[
    "Intrinsic Effect",
    "Equalize",
    "Wiki Name",
    "Modifiers",
    "Outfit",
    "Stat Tuning",
    "Equips On",
    "Familiar Effect",
    "Jiggle",
    "Equalize Muscle",
    "Equalize Mysticality",
    "Equalize Moxie",
    "Floor Buffed Muscle",
    "Floor Buffed Mysticality",
    "Floor Buffed Moxie",
    "Evaluated Modifiers",
    "Last Available Date",
];

/// Literal union over [`STRING_MODIFIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringModifier {
    IntrinsicEffect,
    Equalize,
    WikiName,
    Modifiers,
    Outfit,
    StatTuning,
    EquipsOn,
    FamiliarEffect,
    Jiggle,
    EqualizeMuscle,
    EqualizeMysticality,
    EqualizeMoxie,
    FloorBuffedMuscle,
    FloorBuffedMysticality,
    FloorBuffedMoxie,
    EvaluatedModifiers,
    LastAvailableDate,
}

impl StringModifier {
    pub const ALL: &'static [Self] = &[
        Self::IntrinsicEffect,
        Self::Equalize,
        Self::WikiName,
        Self::Modifiers,
        Self::Outfit,
        Self::StatTuning,
        Self::EquipsOn,
        Self::FamiliarEffect,
        Self::Jiggle,
        Self::EqualizeMuscle,
        Self::EqualizeMysticality,
        Self::EqualizeMoxie,
        Self::FloorBuffedMuscle,
        Self::FloorBuffedMysticality,
        Self::FloorBuffedMoxie,
        Self::EvaluatedModifiers,
        Self::LastAvailableDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntrinsicEffect => "Intrinsic Effect",
            Self::Equalize => "Equalize",
            Self::WikiName => "Wiki Name",
            Self::Modifiers => "Modifiers",
            Self::Outfit => "Outfit",
            Self::StatTuning => "Stat Tuning",
            Self::EquipsOn => "Equips On",
            Self::FamiliarEffect => "Familiar Effect",
            Self::Jiggle => "Jiggle",
            Self::EqualizeMuscle => "Equalize Muscle",
            Self::EqualizeMysticality => "Equalize Mysticality",
            Self::EqualizeMoxie => "Equalize Moxie",
            Self::FloorBuffedMuscle => "Floor Buffed Muscle",
            Self::FloorBuffedMysticality => "Floor Buffed Mysticality",
            Self::FloorBuffedMoxie => "Floor Buffed Moxie",
            Self::EvaluatedModifiers => "Evaluated Modifiers",
            Self::LastAvailableDate => "Last Available Date",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Intrinsic Effect" => Some(Self::IntrinsicEffect),
            "Equalize" => Some(Self::Equalize),
            "Wiki Name" => Some(Self::WikiName),
            "Modifiers" => Some(Self::Modifiers),
            "Outfit" => Some(Self::Outfit),
            "Stat Tuning" => Some(Self::StatTuning),
            "Equips On" => Some(Self::EquipsOn),
            "Familiar Effect" => Some(Self::FamiliarEffect),
            "Jiggle" => Some(Self::Jiggle),
            "Equalize Muscle" => Some(Self::EqualizeMuscle),
            "Equalize Mysticality" => Some(Self::EqualizeMysticality),
            "Equalize Moxie" => Some(Self::EqualizeMoxie),
            "Floor Buffed Muscle" => Some(Self::FloorBuffedMuscle),
            "Floor Buffed Mysticality" => Some(Self::FloorBuffedMysticality),
            "Floor Buffed Moxie" => Some(Self::FloorBuffedMoxie),
            "Evaluated Modifiers" => Some(Self::EvaluatedModifiers),
            "Last Available Date" => Some(Self::LastAvailableDate),
            _ => None,
        }
    }
}

impl std::fmt::Display for StringModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty categories, keyed by emitted name.
pub const MODIFIER_TABLE: &[(&str, &[&str])] = &[
    ("boolean", BOOLEAN_MODIFIERS),
    ("class", CLASS_MODIFIERS),
    ("numeric", NUMERIC_MODIFIERS),
    ("effect", EFFECT_MODIFIERS),
    ("monster", MONSTER_MODIFIERS),
    ("skill", SKILL_MODIFIERS),
    ("stat", STAT_MODIFIERS),
    ("string", STRING_MODIFIERS),
];
