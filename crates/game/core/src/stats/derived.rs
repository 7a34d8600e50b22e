//! Per-category derivation formulas.
//!
//! Every function here is a pure function of the raw [`ItemStats`] and the
//! active [`ScalingConfig`]. Absent fields contribute nothing; a category
//! whose total is exactly zero is reported as [`Effect::None`].
//!
//! Formulas (before the zero check):
//! - Health: health + STR × strength_health
//! - Health regen: regen + regen% × health_regen_percent + aura + STR × strength_health_regen
//! - Armor: armor + aura + AGI × agility_armor
//! - Attack speed: flat + aura + active + target + AGI × agility_attack_speed
//! - Mixed attack slow: slow + 0.5 × melee + 0.5 × ranged
//! - Critical strike: (multiplier + target multiplier) × chance / 100
//! - Left-click damage: flat + melee/ranged + bonus × chance / 100 + active + base%
//! - Movement speed estimate: flat + active + aura + (ms% + active ms%) × movement_speed_percent

use super::effect::{Effect, EffectSum};
use crate::config::ScalingConfig;
use crate::item::ItemStats;

/// Weight of the melee-only and ranged-only slows in the mixed-target slow.
const MIXED_SLOW_SPLIT_WEIGHT: f64 = 0.5;

// ===== attribute grants =====

/// Strength granted for attribute conversions (flat + all + selected).
pub fn granted_strength(stats: &ItemStats) -> Option<f64> {
    granted(stats, stats.strength)
}

/// Agility granted for attribute conversions (flat + all + selected).
pub fn granted_agility(stats: &ItemStats) -> Option<f64> {
    granted(stats, stats.agility)
}

/// Intelligence granted for attribute conversions (flat + all + selected).
pub fn granted_intelligence(stats: &ItemStats) -> Option<f64> {
    granted(stats, stats.intelligence)
}

fn granted(stats: &ItemStats, attribute: Option<f64>) -> Option<f64> {
    EffectSum::new()
        .add(attribute)
        .add(stats.all_attributes)
        .add(stats.selected_attribute)
        .total()
}

// ===== health & mana =====

pub fn health(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.health)
        .add_scaled(granted_strength(stats), scaling.strength_health)
        .finish()
}

pub fn health_regen(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.health_regen)
        .add_scaled(stats.health_regen_percent, scaling.health_regen_percent)
        .add(stats.health_regen_aura)
        .add_scaled(granted_strength(stats), scaling.strength_health_regen)
        .finish()
}

pub fn mana(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.mana)
        .add_scaled(granted_intelligence(stats), scaling.intelligence_mana)
        .finish()
}

pub fn mana_regen(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.mana_regen)
        .add(stats.mana_regen_aura)
        .add_scaled(granted_intelligence(stats), scaling.intelligence_mana_regen)
        .finish()
}

// ===== defence =====

pub fn armor(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.armor)
        .add(stats.armor_aura)
        .add_scaled(granted_agility(stats), scaling.agility_armor)
        .finish()
}

pub fn armor_reduction(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new().add(stats.armor_reduction).finish()
}

pub fn evasion(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new().add(stats.evasion).finish()
}

pub fn status_resistance(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.status_resistance)
        .add(stats.status_resistance_reduction_aura)
        .finish()
}

pub fn magic_resistance(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.magic_resistance)
        .add(stats.magic_resistance_aura)
        .add(stats.magic_resistance_reduction_aura)
        .finish()
}

// ===== critical strike =====

/// Expected crit effect: `(multiplier + target multiplier) × chance / 100`.
pub fn critical_strike(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    let multiplier = critical_multiplier(stats, scaling).value().unwrap_or(0.0);
    let chance = stats.crit_chance.unwrap_or(0.0);
    EffectSum::new()
        .add_scaled(Some(multiplier), chance / 100.0)
        .finish()
}

pub fn critical_multiplier(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.crit_multiplier)
        .add(stats.crit_target_multiplier)
        .finish()
}

// ===== attack speed & slows =====

pub fn attack_speed(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.attack_speed)
        .add(stats.attack_speed_aura)
        .add(stats.attack_speed_active)
        .add(stats.attack_speed_target)
        .add_scaled(granted_agility(stats), scaling.agility_attack_speed)
        .finish()
}

pub fn attack_slow(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.attack_slow)
        .add(stats.attack_slow_melee)
        .add(stats.attack_slow_ranged)
        .add(stats.attack_slow_aura)
        .finish()
}

/// Attack slow against a mix of melee and ranged targets.
///
/// The melee-only and ranged-only slows are counted once inside
/// [`attack_slow`] and once more at half weight.
pub fn attack_slow_mixed(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add_effect(attack_slow(stats, scaling))
        .add_scaled(stats.attack_slow_melee, MIXED_SLOW_SPLIT_WEIGHT)
        .add_scaled(stats.attack_slow_ranged, MIXED_SLOW_SPLIT_WEIGHT)
        .finish()
}

// ===== lifesteal & spell power =====

pub fn attack_lifesteal(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.attack_lifesteal)
        .add(stats.attack_lifesteal_active)
        .add(stats.attack_lifesteal_absolute)
        .finish()
}

pub fn spell_lifesteal(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.spell_lifesteal)
        .add(stats.spell_lifesteal_multiplier)
        .add(stats.spell_lifesteal_amplifier)
        .finish()
}

pub fn spell_amplification(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new().add(stats.spell_amplification).finish()
}

// ===== physical damage & range =====

/// Melee-only and ranged-only bonuses never apply to the same attacker, so
/// when both exist their average stands in for either.
fn melee_or_ranged(melee: Option<f64>, ranged: Option<f64>) -> Option<f64> {
    match (melee, ranged) {
        (Some(melee), Some(ranged)) => Some((melee + ranged) / 2.0),
        (melee, ranged) => melee.or(ranged),
    }
}

/// Damage added to a regular attack.
pub fn damage(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    let bonus_chance = stats.bonus_damage_chance.unwrap_or(0.0);
    EffectSum::new()
        .add(stats.damage)
        .add(melee_or_ranged(stats.damage_melee, stats.damage_ranged))
        .add_scaled(stats.bonus_damage, bonus_chance / 100.0)
        .add(stats.damage_active)
        .add_scaled(stats.base_damage_percent, scaling.base_damage_baseline / 100.0)
        .finish()
}

pub fn bonus_damage(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new().add(stats.bonus_damage).finish()
}

pub fn damage_aura(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.damage_aura)
        .add(stats.damage_aura_percent)
        .finish()
}

pub fn attack_range(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(melee_or_ranged(
            stats.attack_range_melee,
            stats.attack_range_ranged,
        ))
        .finish()
}

// ===== movement =====

pub fn movement_speed_flat(stats: &ItemStats) -> EffectSum {
    EffectSum::new()
        .add(stats.movement_speed)
        .add(stats.movement_speed_active)
        .add(stats.movement_speed_aura)
}

pub fn movement_speed_percent(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.movement_speed_percent)
        .add(stats.movement_speed_percent_active)
        .finish()
}

/// Flat and percentage movement speed on one absolute scale (300 base speed).
///
/// Only meant for sorting; it is not an exact in-game value.
pub fn movement_speed_estimate(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    movement_speed_flat(stats)
        .add_scaled(stats.movement_speed_percent, scaling.movement_speed_percent)
        .add_scaled(
            stats.movement_speed_percent_active,
            scaling.movement_speed_percent,
        )
        .finish()
}

/// Percentage bonus for percent-only items, otherwise the estimated total.
pub fn movement_speed(stats: &ItemStats, scaling: &ScalingConfig) -> Effect {
    if movement_speed_flat(stats).is_present() {
        movement_speed_estimate(stats, scaling)
    } else {
        movement_speed_percent(stats, scaling)
    }
}

pub fn heal_reduction(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(stats.heal_reduction)
        .add(stats.heal_reduction_aura)
        .finish()
}

// ===== primary attributes =====

pub fn strength(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(granted_strength(stats))
        .add(stats.strength_active)
        .finish()
}

pub fn agility(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(granted_agility(stats))
        .add(stats.agility_active)
        .finish()
}

pub fn intelligence(stats: &ItemStats, _scaling: &ScalingConfig) -> Effect {
    EffectSum::new()
        .add(granted_intelligence(stats))
        .add(stats.intelligence_active)
        .add(stats.intelligence_percent)
        .finish()
}

// ===== source checks beyond "value present" =====

/// Agility always converts into some armor, so agility alone counts.
pub fn has_armor(stats: &ItemStats, scaling: &ScalingConfig) -> bool {
    armor(stats, scaling).is_present()
        || stats.armor_active.is_some()
        || granted_agility(stats).is_some()
}

pub fn has_attack_speed(stats: &ItemStats, _scaling: &ScalingConfig) -> bool {
    stats.attack_speed.is_some()
        || stats.attack_speed_aura.is_some()
        || stats.attack_speed_active.is_some()
        || stats.attack_speed_target.is_some()
        || granted_agility(stats).is_some()
}

pub fn has_critical_strike(stats: &ItemStats, _scaling: &ScalingConfig) -> bool {
    stats.crit_multiplier.is_some()
        || stats.crit_target_multiplier.is_some()
        || stats.crit_chance.is_some()
}

pub fn grants_invisibility(stats: &ItemStats, _scaling: &ScalingConfig) -> bool {
    stats.grants_invisibility
}

pub fn grants_true_sight(stats: &ItemStats, _scaling: &ScalingConfig) -> bool {
    stats.grants_true_sight
}

pub fn breaks_passives(stats: &ItemStats, _scaling: &ScalingConfig) -> bool {
    stats.breaks_passives
}

// ===== percent detection =====

pub fn intelligence_is_percent(stats: &ItemStats) -> bool {
    stats.intelligence_percent.is_some()
}

/// Damage is a percentage only when base-damage percent is its sole source.
pub fn damage_is_percent(stats: &ItemStats) -> bool {
    stats.base_damage_percent.is_some()
        && stats.damage.is_none()
        && stats.damage_melee.is_none()
        && stats.damage_ranged.is_none()
        && stats.damage_active.is_none()
        && stats.bonus_damage.is_none()
}

pub fn damage_aura_is_percent(stats: &ItemStats) -> bool {
    stats.damage_aura_percent.is_some() && stats.damage_aura.is_none()
}

pub fn attack_lifesteal_is_percent(stats: &ItemStats) -> bool {
    stats.attack_lifesteal_absolute.is_none()
}

pub fn movement_speed_is_percent(stats: &ItemStats) -> bool {
    !movement_speed_flat(stats).is_present()
}
