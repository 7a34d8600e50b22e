use super::sources::{ItemSources, NeutralDrop};

/// Raw item data as it appears in the content catalog.
///
/// # Design: Identity + Stats Pattern
///
/// - The record holds identity, economy and source data
/// - `stats` holds every raw effect field the item may contribute
///
/// Records are immutable snapshots loaded once at start-up. Every stat field
/// is optional: `None` means the item contributes nothing from that source,
/// which is distinct from an explicit zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRecord {
    /// Unique catalog key (e.g. `"black_king_bar"`).
    pub key: String,
    pub id: u32,
    /// Gold cost. `None` or zero for items that cannot be bought.
    pub cost: Option<u32>,
    pub mana_cost: Option<f64>,
    pub cooldown: Option<f64>,
    pub is_recipe: bool,

    pub purchasable: bool,
    pub is_neutral: bool,
    pub roshan_drop: bool,
    /// Tier and drop-rate metadata, required when `is_neutral` is set.
    pub neutral_drop: Option<NeutralDrop>,

    /// Catalog override: treat the item as purchasable regardless of
    /// `purchasable`. Used for consumables sold outside the recipe flow.
    pub always_purchasable: bool,

    pub stats: ItemStats,
}

impl ItemRecord {
    /// Returns a builder for constructing records fluently.
    pub fn builder(key: impl Into<String>) -> ItemRecordBuilder {
        ItemRecordBuilder {
            record: ItemRecord {
                key: key.into(),
                ..Default::default()
            },
        }
    }

    /// Sources this item is offered from, with catalog overrides applied.
    pub fn sources(&self) -> ItemSources {
        let mut sources = ItemSources::empty();
        sources.set(
            ItemSources::PURCHASABLE,
            self.purchasable || self.always_purchasable,
        );
        sources.set(ItemSources::NEUTRAL, self.is_neutral);
        sources.set(ItemSources::ROSHAN, self.roshan_drop);
        sources
    }

    /// Cost usable for efficiency comparisons.
    ///
    /// Neutral items are drop-acquired, so their listed cost is ignored.
    pub fn comparable_cost(&self) -> Option<u32> {
        if self.is_neutral {
            return None;
        }
        self.cost.filter(|cost| *cost > 0)
    }

    pub fn neutral_tier(&self) -> Option<u8> {
        self.neutral_drop.as_ref().map(|drop| drop.tier)
    }
}

/// Builder for [`ItemRecord`], mostly used by tests and tooling.
#[derive(Clone, Debug)]
pub struct ItemRecordBuilder {
    record: ItemRecord,
}

impl ItemRecordBuilder {
    pub fn id(mut self, id: u32) -> Self {
        self.record.id = id;
        self
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.record.cost = Some(cost);
        self
    }

    pub fn mana_cost(mut self, mana_cost: f64) -> Self {
        self.record.mana_cost = Some(mana_cost);
        self
    }

    pub fn cooldown(mut self, cooldown: f64) -> Self {
        self.record.cooldown = Some(cooldown);
        self
    }

    pub fn recipe(mut self) -> Self {
        self.record.is_recipe = true;
        self
    }

    pub fn purchasable(mut self) -> Self {
        self.record.purchasable = true;
        self
    }

    /// Marks the item as a neutral drop of the given tier.
    pub fn neutral(mut self, tier: u8) -> Self {
        self.record.is_neutral = true;
        self.record.neutral_drop = Some(NeutralDrop::new(tier));
        self
    }

    pub fn roshan_drop(mut self) -> Self {
        self.record.roshan_drop = true;
        self
    }

    pub fn always_purchasable(mut self) -> Self {
        self.record.always_purchasable = true;
        self
    }

    pub fn stats(mut self, stats: ItemStats) -> Self {
        self.record.stats = stats;
        self
    }

    pub fn build(self) -> ItemRecord {
        self.record
    }
}

/// Raw effect fields of an item, grouped by gameplay effect.
///
/// Percent-valued fields are stored as percentage points (`25.0` = 25%).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemStats {
    // ----- health & mana -----
    pub health: Option<f64>,
    pub health_regen: Option<f64>,
    pub health_regen_percent: Option<f64>,
    pub health_regen_aura: Option<f64>,
    pub mana: Option<f64>,
    pub mana_regen: Option<f64>,
    pub mana_regen_aura: Option<f64>,

    // ----- movement -----
    pub movement_speed: Option<f64>,
    pub movement_speed_active: Option<f64>,
    pub movement_speed_aura: Option<f64>,
    pub movement_speed_percent: Option<f64>,
    pub movement_speed_percent_active: Option<f64>,

    // ----- defence -----
    pub armor: Option<f64>,
    pub armor_aura: Option<f64>,
    pub armor_active: Option<f64>,
    pub armor_reduction: Option<f64>,
    pub status_resistance: Option<f64>,
    pub status_resistance_reduction_aura: Option<f64>,
    pub evasion: Option<f64>,
    pub magic_resistance: Option<f64>,
    pub magic_resistance_aura: Option<f64>,
    pub magic_resistance_reduction_aura: Option<f64>,

    // ----- critical strike -----
    pub crit_multiplier: Option<f64>,
    pub crit_target_multiplier: Option<f64>,
    pub crit_chance: Option<f64>,

    // ----- attack speed & slows -----
    pub attack_speed: Option<f64>,
    pub attack_speed_aura: Option<f64>,
    pub attack_speed_active: Option<f64>,
    pub attack_speed_target: Option<f64>,
    pub attack_slow: Option<f64>,
    pub attack_slow_melee: Option<f64>,
    pub attack_slow_ranged: Option<f64>,
    pub attack_slow_aura: Option<f64>,

    // ----- lifesteal & spell power -----
    pub attack_lifesteal: Option<f64>,
    pub attack_lifesteal_active: Option<f64>,
    /// Flat health per hit rather than a percentage of damage.
    pub attack_lifesteal_absolute: Option<f64>,
    pub spell_lifesteal: Option<f64>,
    pub spell_lifesteal_multiplier: Option<f64>,
    pub spell_lifesteal_amplifier: Option<f64>,
    pub spell_amplification: Option<f64>,

    // ----- physical damage -----
    pub damage: Option<f64>,
    pub damage_melee: Option<f64>,
    pub damage_ranged: Option<f64>,
    pub damage_active: Option<f64>,
    pub base_damage_percent: Option<f64>,
    pub bonus_damage: Option<f64>,
    pub bonus_damage_chance: Option<f64>,
    pub damage_aura: Option<f64>,
    pub damage_aura_percent: Option<f64>,

    pub attack_range_melee: Option<f64>,
    pub attack_range_ranged: Option<f64>,

    pub heal_reduction: Option<f64>,
    pub heal_reduction_aura: Option<f64>,

    // ----- primary attributes -----
    pub strength: Option<f64>,
    pub strength_active: Option<f64>,
    pub agility: Option<f64>,
    pub agility_active: Option<f64>,
    pub intelligence: Option<f64>,
    pub intelligence_active: Option<f64>,
    pub intelligence_percent: Option<f64>,
    pub all_attributes: Option<f64>,
    /// Bonus to whichever attribute the holder selects.
    pub selected_attribute: Option<f64>,

    // ----- utility grants -----
    pub grants_invisibility: bool,
    pub grants_true_sight: bool,
    pub breaks_passives: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_makes_item_purchasable() {
        let shard = ItemRecord::builder("aghanims_shard")
            .cost(1400)
            .always_purchasable()
            .build();

        assert!(!shard.purchasable);
        assert_eq!(shard.sources(), ItemSources::PURCHASABLE);
    }

    #[test]
    fn neutral_items_have_no_comparable_cost() {
        let neutral = ItemRecord::builder("trusty_shovel")
            .cost(1000)
            .neutral(1)
            .build();
        let free = ItemRecord::builder("tpscroll").cost(0).purchasable().build();
        let bought = ItemRecord::builder("blink").cost(2250).purchasable().build();

        assert_eq!(neutral.comparable_cost(), None);
        assert_eq!(neutral.neutral_tier(), Some(1));
        assert_eq!(free.comparable_cost(), None);
        assert_eq!(bought.comparable_cost(), Some(2250));
    }
}
