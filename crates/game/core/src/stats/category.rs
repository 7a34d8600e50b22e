/// Gameplay effect categories an item can be ranked by.
///
/// The set is closed: each category owns exactly one entry in the rule table
/// (see [`crate::stats::rules`]). Names parse case-insensitively in
/// snake_case, e.g. `"attack_speed"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeCategory {
    /// Wildcard: every item passing the source filter.
    AllItems,
    Health,
    HealthRegen,
    Mana,
    ManaRegen,
    Armor,
    ArmorReduction,
    Evasion,
    StatusResistance,
    MagicResistance,
    /// Expected crit effect (multiplier × chance).
    CriticalStrike,
    /// Crit multiplier, reported together with its chance.
    CriticalMultiplier,
    AttackSpeed,
    AttackSlow,
    /// Attack slow against a mix of melee and ranged targets.
    AttackSlowMixed,
    AttackLifesteal,
    SpellLifesteal,
    SpellAmplification,
    /// Left-click damage.
    Damage,
    /// Proc damage, reported together with its chance.
    BonusDamage,
    DamageAura,
    AttackRange,
    MovementSpeed,
    HealReduction,
    Strength,
    Agility,
    Intelligence,
    Invisibility,
    TrueSight,
    BreakPassives,
}

impl AttributeCategory {
    /// Position of this category in the rule table.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Human-readable label for listings.
    pub const fn label(self) -> &'static str {
        use AttributeCategory::*;
        match self {
            AllItems => "All items",
            Health => "Health",
            HealthRegen => "Health regeneration",
            Mana => "Mana",
            ManaRegen => "Mana regeneration",
            Armor => "Armor",
            ArmorReduction => "Armor reduction",
            Evasion => "Evasion",
            StatusResistance => "Status resistance",
            MagicResistance => "Magic resistance",
            CriticalStrike => "Critical strike",
            CriticalMultiplier => "Critical multiplier",
            AttackSpeed => "Attack speed",
            AttackSlow => "Attack slow",
            AttackSlowMixed => "Attack slow (mixed targets)",
            AttackLifesteal => "Lifesteal",
            SpellLifesteal => "Spell lifesteal",
            SpellAmplification => "Spell amplification",
            Damage => "Damage",
            BonusDamage => "Bonus damage",
            DamageAura => "Damage aura",
            AttackRange => "Attack range",
            MovementSpeed => "Movement speed",
            HealReduction => "Heal reduction",
            Strength => "Strength",
            Agility => "Agility",
            Intelligence => "Intelligence",
            Invisibility => "Invisibility",
            TrueSight => "True sight",
            BreakPassives => "Break",
        }
    }
}
