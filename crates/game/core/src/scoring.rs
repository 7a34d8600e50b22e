//! Cost-efficiency scoring.
//!
//! Efficiency is gold spent per unit of expected effect:
//!
//! ```text
//! efficiency = cost / (|value| × chance / 100)      (chance defaults to 100)
//! ```
//!
//! Lower is better. Movement speed is measured on its 300-base estimate so
//! percentage and flat bonuses compare on one scale. Items without a comparable cost (unpriced, free or
//! neutral) and zero values have no efficiency.

use crate::config::ScalingConfig;
use crate::item::ItemRecord;
use crate::stats::AttributeCategory;

/// Displayable result for one item and category.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemValue {
    pub value: f64,
    /// Percent chance, for probabilistic categories only.
    pub chance: Option<f64>,
    /// Gold per unit of expected effect.
    pub efficiency: Option<f64>,
    /// True if `value` is already a percentage.
    pub is_percent: bool,
}

impl ItemValue {
    /// `value` weighted by `chance`.
    pub fn expected(&self) -> f64 {
        self.value * self.chance.unwrap_or(100.0) / 100.0
    }
}

/// Gold per unit of expected effect, or `None` when no fair basis exists.
pub fn efficiency(record: &ItemRecord, value: f64, chance: Option<f64>) -> Option<f64> {
    let cost = record.comparable_cost()?;
    let effect = value.abs() * chance.unwrap_or(100.0) / 100.0;
    if effect == 0.0 {
        return None;
    }
    Some(f64::from(cost) / effect)
}

/// Derives, qualifies and scores `category` for `record`.
///
/// Returns `None` when the item has no value for the category, including the
/// flag categories that never produce one.
pub fn item_value(
    record: &ItemRecord,
    category: AttributeCategory,
    scaling: &ScalingConfig,
) -> Option<ItemValue> {
    let rule = category.rule();
    let value = rule.derive(&record.stats, scaling).value()?;
    let chance = rule.chance.and_then(|chance| chance(&record.stats));

    let basis = rule.basis_value(&record.stats, scaling, value);

    Some(ItemValue {
        value,
        chance,
        efficiency: efficiency(record, basis, chance),
        is_percent: rule.percent.applies(&record.stats),
    })
}
