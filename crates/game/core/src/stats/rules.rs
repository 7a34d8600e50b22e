//! Rule table: one entry per [`AttributeCategory`].
//!
//! Each entry pairs the category's value function with its visibility rule,
//! its percent rule and, for probabilistic categories, the raw chance field.
//! Adding a category means adding a variant and a table row; dispatch code
//! does not change.

use strum::EnumCount;

use super::category::AttributeCategory;
use super::derived;
use super::effect::Effect;
use crate::config::ScalingConfig;
use crate::item::ItemStats;

/// Derivation formula of a category.
pub type ValueFn = fn(&ItemStats, &ScalingConfig) -> Effect;

/// Source check for categories where "has a value" is not the right test.
pub type SourceFn = fn(&ItemStats, &ScalingConfig) -> bool;

/// How a category decides whether an item is one of its sources.
#[derive(Clone, Copy, Debug)]
pub enum VisibilityRule {
    /// Every item is a source (the wildcard).
    Always,
    /// The item is a source iff the value function yields a value.
    Derived,
    /// A dedicated check.
    Custom(SourceFn),
}

/// Whether a category's value is already a percentage.
#[derive(Clone, Copy, Debug)]
pub enum PercentRule {
    Never,
    Always,
    /// Depends on which raw fields produced the value.
    Fields(fn(&ItemStats) -> bool),
}

impl PercentRule {
    pub fn applies(self, stats: &ItemStats) -> bool {
        match self {
            PercentRule::Never => false,
            PercentRule::Always => true,
            PercentRule::Fields(check) => check(stats),
        }
    }
}

/// Table row for one category.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRule {
    pub category: AttributeCategory,
    /// `None` for categories that never produce a number.
    pub value: Option<ValueFn>,
    pub visibility: VisibilityRule,
    pub percent: PercentRule,
    /// Raw chance field for probabilistic categories.
    pub chance: Option<fn(&ItemStats) -> Option<f64>>,
    /// Figure efficiency is computed from when it differs from the displayed
    /// value, so mixed units still rank on one scale.
    pub efficiency_basis: Option<ValueFn>,
}

impl CategoryRule {
    const fn numeric(category: AttributeCategory, value: ValueFn, percent: PercentRule) -> Self {
        Self {
            category,
            value: Some(value),
            visibility: VisibilityRule::Derived,
            percent,
            chance: None,
            efficiency_basis: None,
        }
    }

    const fn flag(category: AttributeCategory, check: SourceFn) -> Self {
        Self {
            category,
            value: None,
            visibility: VisibilityRule::Custom(check),
            percent: PercentRule::Never,
            chance: None,
            efficiency_basis: None,
        }
    }

    const fn with_visibility(mut self, check: SourceFn) -> Self {
        self.visibility = VisibilityRule::Custom(check);
        self
    }

    const fn with_chance(mut self, chance: fn(&ItemStats) -> Option<f64>) -> Self {
        self.chance = Some(chance);
        self
    }

    const fn with_efficiency_basis(mut self, basis: ValueFn) -> Self {
        self.efficiency_basis = Some(basis);
        self
    }

    /// Derives the category's value; flag categories always yield `None`.
    pub fn derive(&self, stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
        match self.value {
            Some(value) => value(stats, scaling),
            None => Effect::None,
        }
    }

    /// Amount of effect efficiency is measured against. Falls back to `value`.
    pub fn basis_value(&self, stats: &ItemStats, scaling: &ScalingConfig, value: f64) -> f64 {
        self.efficiency_basis
            .and_then(|basis| basis(stats, scaling).value())
            .unwrap_or(value)
    }

    /// Applies the visibility rule, ignoring source filters and recipes.
    pub fn is_source(&self, stats: &ItemStats, scaling: &ScalingConfig) -> bool {
        match self.visibility {
            VisibilityRule::Always => true,
            VisibilityRule::Derived => self.derive(stats, scaling).is_present(),
            VisibilityRule::Custom(check) => check(stats, scaling),
        }
    }
}

fn crit_chance(stats: &ItemStats) -> Option<f64> {
    stats.crit_chance
}

fn bonus_damage_chance(stats: &ItemStats) -> Option<f64> {
    stats.bonus_damage_chance
}

use AttributeCategory as C;
use PercentRule::{Always, Fields, Never};

/// Rows in declaration order of [`AttributeCategory`].
static RULES: [CategoryRule; AttributeCategory::COUNT] = [
    CategoryRule {
        category: C::AllItems,
        value: None,
        visibility: VisibilityRule::Always,
        percent: Never,
        chance: None,
        efficiency_basis: None,
    },
    CategoryRule::numeric(C::Health, derived::health, Never),
    CategoryRule::numeric(C::HealthRegen, derived::health_regen, Never),
    CategoryRule::numeric(C::Mana, derived::mana, Never),
    CategoryRule::numeric(C::ManaRegen, derived::mana_regen, Never),
    CategoryRule::numeric(C::Armor, derived::armor, Never).with_visibility(derived::has_armor),
    CategoryRule::numeric(C::ArmorReduction, derived::armor_reduction, Never),
    CategoryRule::numeric(C::Evasion, derived::evasion, Always),
    CategoryRule::numeric(C::StatusResistance, derived::status_resistance, Always),
    CategoryRule::numeric(C::MagicResistance, derived::magic_resistance, Always),
    CategoryRule::numeric(C::CriticalStrike, derived::critical_strike, Always)
        .with_visibility(derived::has_critical_strike),
    CategoryRule::numeric(C::CriticalMultiplier, derived::critical_multiplier, Always)
        .with_chance(crit_chance),
    CategoryRule::numeric(C::AttackSpeed, derived::attack_speed, Never)
        .with_visibility(derived::has_attack_speed),
    CategoryRule::numeric(C::AttackSlow, derived::attack_slow, Never),
    CategoryRule::numeric(C::AttackSlowMixed, derived::attack_slow_mixed, Never),
    CategoryRule::numeric(
        C::AttackLifesteal,
        derived::attack_lifesteal,
        Fields(derived::attack_lifesteal_is_percent),
    ),
    CategoryRule::numeric(C::SpellLifesteal, derived::spell_lifesteal, Always),
    CategoryRule::numeric(C::SpellAmplification, derived::spell_amplification, Always),
    CategoryRule::numeric(C::Damage, derived::damage, Fields(derived::damage_is_percent)),
    CategoryRule::numeric(C::BonusDamage, derived::bonus_damage, Never)
        .with_chance(bonus_damage_chance),
    CategoryRule::numeric(
        C::DamageAura,
        derived::damage_aura,
        Fields(derived::damage_aura_is_percent),
    ),
    CategoryRule::numeric(C::AttackRange, derived::attack_range, Never),
    CategoryRule::numeric(
        C::MovementSpeed,
        derived::movement_speed,
        Fields(derived::movement_speed_is_percent),
    )
    .with_efficiency_basis(derived::movement_speed_estimate),
    CategoryRule::numeric(C::HealReduction, derived::heal_reduction, Always),
    CategoryRule::numeric(C::Strength, derived::strength, Never),
    CategoryRule::numeric(C::Agility, derived::agility, Never),
    CategoryRule::numeric(
        C::Intelligence,
        derived::intelligence,
        Fields(derived::intelligence_is_percent),
    ),
    CategoryRule::flag(C::Invisibility, derived::grants_invisibility),
    CategoryRule::flag(C::TrueSight, derived::grants_true_sight),
    CategoryRule::flag(C::BreakPassives, derived::breaks_passives),
];

impl AttributeCategory {
    /// Rule table entry for this category.
    #[inline]
    pub fn rule(self) -> &'static CategoryRule {
        &RULES[self.as_index()]
    }

    /// Returns true for categories that can produce a numeric value.
    pub fn is_numeric(self) -> bool {
        self.rule().value.is_some()
    }
}
