//! In-memory item catalog.

use std::cmp::Ordering;
use std::collections::HashMap;

use item_core::{
    AttributeCategory, CatalogError, ItemOracle, ItemRecord, ItemSources, ItemValue,
    ScalingConfig, is_visible, item_value,
};

/// Per-item corrections layered on top of the raw catalog.
///
/// Keeps item-specific exceptions in content rather than in engine code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOverride {
    pub key: String,
    /// Treat the item as purchasable regardless of its own flag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub always_purchasable: Option<bool>,
}

impl ItemOverride {
    fn apply(&self, record: &mut ItemRecord) {
        if let Some(always_purchasable) = self.always_purchasable {
            record.always_purchasable = always_purchasable;
        }
    }
}

/// One row of a category ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedItem<'a> {
    pub record: &'a ItemRecord,
    pub value: ItemValue,
}

/// Immutable item catalog keyed by item key.
///
/// Built once from content and shared read-only.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    records: HashMap<String, ItemRecord>,
    scaling: ScalingConfig,
}

impl ItemCatalog {
    /// Builds a catalog, rejecting duplicate keys, neutral items without a
    /// tier and invalid scaling factors.
    pub fn from_records(
        records: impl IntoIterator<Item = ItemRecord>,
        scaling: ScalingConfig,
    ) -> Result<Self, CatalogError> {
        scaling.validate()?;

        let mut map = HashMap::new();
        for record in records {
            if record.is_neutral && record.neutral_drop.is_none() {
                return Err(CatalogError::MissingNeutralTier(record.key));
            }
            if record.purchasable && !record.is_recipe && record.comparable_cost().is_none() {
                tracing::warn!(item = %record.key, "purchasable item has no cost");
            }
            if map.contains_key(&record.key) {
                return Err(CatalogError::DuplicateKey(record.key));
            }
            map.insert(record.key.clone(), record);
        }

        Ok(Self {
            records: map,
            scaling,
        })
    }

    /// Applies overrides in order. Every override must target a known item.
    pub fn apply_overrides<'o>(
        &mut self,
        overrides: impl IntoIterator<Item = &'o ItemOverride>,
    ) -> Result<(), CatalogError> {
        for item_override in overrides {
            let record = self
                .records
                .get_mut(&item_override.key)
                .ok_or_else(|| CatalogError::UnknownOverride(item_override.key.clone()))?;
            item_override.apply(record);
            tracing::debug!(item = %item_override.key, "applied catalog override");
        }
        Ok(())
    }

    /// Looks up a record, reporting unknown keys as errors.
    pub fn get(&self, key: &str) -> Result<&ItemRecord, CatalogError> {
        self.records
            .get(key)
            .ok_or_else(|| CatalogError::UnknownItem(key.to_string()))
    }

    /// Items listed under `category` for `include`, best value for gold first.
    ///
    /// Items with an efficiency come first, cheapest per unit first. The rest
    /// (neutral, unpriced) follow by descending magnitude. Ties break on key.
    /// Flag categories and the wildcard produce no values and rank nothing;
    /// use [`ItemCatalog::visible`] for those.
    pub fn rank(&self, category: AttributeCategory, include: ItemSources) -> Vec<RankedItem<'_>> {
        let mut ranked: Vec<_> = self
            .visible(category, include)
            .into_iter()
            .filter_map(|record| {
                item_value(record, category, &self.scaling)
                    .map(|value| RankedItem { record, value })
            })
            .collect();

        ranked.sort_by(compare_ranked);
        ranked
    }

    /// Records listed under `category` for `include`, sorted by key.
    pub fn visible(&self, category: AttributeCategory, include: ItemSources) -> Vec<&ItemRecord> {
        let mut records: Vec<_> = self
            .records
            .values()
            .filter(|record| is_visible(record, category, include, &self.scaling))
            .collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        records
    }

    /// Roshan drops in display order.
    pub fn roshan_drops(&self) -> Vec<&ItemRecord> {
        let mut drops: Vec<_> = self
            .records
            .values()
            .filter(|record| record.roshan_drop)
            .collect();
        drops.sort_by(|a, b| {
            self.roshan_drop_rank(&b.key)
                .cmp(&self.roshan_drop_rank(&a.key))
                .then_with(|| a.key.cmp(&b.key))
        });
        drops
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn compare_ranked(a: &RankedItem<'_>, b: &RankedItem<'_>) -> Ordering {
    let by_efficiency = match (a.value.efficiency, b.value.efficiency) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.value.expected().abs().total_cmp(&a.value.expected().abs()),
    };
    by_efficiency.then_with(|| a.record.key.cmp(&b.record.key))
}

impl ItemOracle for ItemCatalog {
    fn record(&self, key: &str) -> Option<&ItemRecord> {
        self.records.get(key)
    }

    fn records(&self) -> Vec<&ItemRecord> {
        self.records.values().collect()
    }

    fn scaling(&self) -> &ScalingConfig {
        &self.scaling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::ItemStats;

    fn health(value: f64) -> ItemStats {
        ItemStats {
            health: Some(value),
            ..Default::default()
        }
    }

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_records(
            [
                ItemRecord::builder("vitality_booster")
                    .cost(1000)
                    .purchasable()
                    .stats(health(250.0))
                    .build(),
                ItemRecord::builder("point_booster")
                    .cost(1200)
                    .purchasable()
                    .stats(health(175.0))
                    .build(),
                ItemRecord::builder("ogre_axe")
                    .cost(1000)
                    .purchasable()
                    .stats(ItemStats {
                        strength: Some(10.0),
                        ..Default::default()
                    })
                    .build(),
                ItemRecord::builder("vambrace")
                    .neutral(3)
                    .stats(health(100.0))
                    .build(),
                ItemRecord::builder("troll_heart")
                    .neutral(5)
                    .stats(health(300.0))
                    .build(),
                ItemRecord::builder("aegis").roshan_drop().build(),
                ItemRecord::builder("refresher_shard").roshan_drop().build(),
                ItemRecord::builder("cheese").roshan_drop().build(),
            ],
            ScalingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = ItemCatalog::from_records(
            [
                ItemRecord::builder("blink").build(),
                ItemRecord::builder("blink").build(),
            ],
            ScalingConfig::default(),
        );

        assert_eq!(result.unwrap_err(), CatalogError::DuplicateKey("blink".into()));
    }

    #[test]
    fn neutral_without_tier_is_rejected() {
        let mut record = ItemRecord::builder("mysterious_hat").build();
        record.is_neutral = true;

        let result = ItemCatalog::from_records([record], ScalingConfig::default());

        assert_eq!(
            result.unwrap_err(),
            CatalogError::MissingNeutralTier("mysterious_hat".into())
        );
    }

    #[test]
    fn overrides_must_target_known_items() {
        let mut catalog = catalog();
        let unknown = ItemOverride {
            key: "aghanims_shard".into(),
            always_purchasable: Some(true),
        };

        assert_eq!(
            catalog.apply_overrides([&unknown]),
            Err(CatalogError::UnknownOverride("aghanims_shard".into()))
        );
    }

    #[test]
    fn override_changes_visibility() {
        let mut catalog = catalog();
        assert!(!catalog.is_visible("cheese", AttributeCategory::AllItems, ItemSources::PURCHASABLE));

        let cheese = ItemOverride {
            key: "cheese".into(),
            always_purchasable: Some(true),
        };
        catalog.apply_overrides([&cheese]).unwrap();

        assert!(catalog.is_visible("cheese", AttributeCategory::AllItems, ItemSources::PURCHASABLE));
    }

    #[test]
    fn rank_orders_by_efficiency_then_magnitude() {
        let catalog = catalog();
        let ranked = catalog.rank(AttributeCategory::Health, ItemSources::all());
        let keys: Vec<_> = ranked.iter().map(|row| row.record.key.as_str()).collect();

        // vitality_booster: 1000 / 250, ogre_axe: 1000 / 220, point_booster: 1200 / 175,
        // then neutrals by health.
        assert_eq!(
            keys,
            vec![
                "vitality_booster",
                "ogre_axe",
                "point_booster",
                "troll_heart",
                "vambrace"
            ]
        );
    }

    #[test]
    fn movement_speed_ranks_percent_and_flat_on_one_scale() {
        let catalog = ItemCatalog::from_records(
            [
                ItemRecord::builder("flat_boots")
                    .cost(500)
                    .purchasable()
                    .stats(ItemStats {
                        movement_speed: Some(30.0),
                        ..Default::default()
                    })
                    .build(),
                ItemRecord::builder("swift_charm")
                    .cost(400)
                    .purchasable()
                    .stats(ItemStats {
                        movement_speed_percent: Some(10.0),
                        ..Default::default()
                    })
                    .build(),
            ],
            ScalingConfig::default(),
        )
        .unwrap();

        let ranked = catalog.rank(AttributeCategory::MovementSpeed, ItemSources::all());
        let keys: Vec<_> = ranked.iter().map(|row| row.record.key.as_str()).collect();

        // swift_charm: 400 / (3 × 10), flat_boots: 500 / 30
        assert_eq!(keys, vec!["swift_charm", "flat_boots"]);
        assert_eq!(ranked[0].value.value, 10.0);
        assert!(ranked[0].value.is_percent);
    }

    #[test]
    fn rank_respects_source_filter() {
        let catalog = catalog();
        let ranked = catalog.rank(AttributeCategory::Health, ItemSources::NEUTRAL);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|row| row.value.efficiency.is_none()));
    }

    #[test]
    fn oracle_queries_handle_unknown_keys() {
        let catalog = catalog();

        assert!(!catalog.is_visible("missing", AttributeCategory::AllItems, ItemSources::all()));
        assert_eq!(catalog.value("missing", AttributeCategory::Health), None);
        assert_eq!(
            catalog.get("missing").unwrap_err(),
            CatalogError::UnknownItem("missing".into())
        );
    }

    #[test]
    fn roshan_drops_follow_priority() {
        let catalog = catalog();
        let keys: Vec<_> = catalog
            .roshan_drops()
            .into_iter()
            .map(|record| record.key.as_str())
            .collect();

        assert_eq!(keys, vec!["aegis", "refresher_shard", "cheese"]);
    }

    #[test]
    fn stealth_consumable_sorts_below_upgrades() {
        let catalog = ItemCatalog::from_records(
            [
                ItemRecord::builder("cheese").roshan_drop().build(),
                ItemRecord::builder("smoke_of_deceit").roshan_drop().build(),
                ItemRecord::builder("aghanims_shard_roshan").roshan_drop().build(),
            ],
            ScalingConfig::default(),
        )
        .unwrap();
        let keys: Vec<_> = catalog
            .roshan_drops()
            .into_iter()
            .map(|record| record.key.as_str())
            .collect();

        assert_eq!(keys, vec!["aghanims_shard_roshan", "smoke_of_deceit", "cheese"]);
    }
}
