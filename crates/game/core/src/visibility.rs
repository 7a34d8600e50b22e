//! Decides whether an item is surfaced for a category.

use crate::config::ScalingConfig;
use crate::item::{ItemRecord, ItemSources};
use crate::stats::AttributeCategory;

/// Returns true if `record` should be listed under `category`.
///
/// Checks, in order:
/// 1. Recipes are never listed.
/// 2. The record must be offered from at least one `include`d source
///    (catalog overrides such as `always_purchasable` count).
/// 3. The wildcard category lists everything that passed step 2.
/// 4. Otherwise the category's visibility rule decides.
pub fn is_visible(
    record: &ItemRecord,
    category: AttributeCategory,
    include: ItemSources,
    scaling: &ScalingConfig,
) -> bool {
    if record.is_recipe {
        return false;
    }

    if !record.sources().matches(include) {
        return false;
    }

    category.rule().is_source(&record.stats, scaling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemStats;
    use strum::IntoEnumIterator;

    fn all_filters() -> impl Iterator<Item = ItemSources> {
        (0u8..8).map(ItemSources::from_bits_truncate)
    }

    fn armor_stats() -> ItemStats {
        ItemStats {
            armor: Some(5.0),
            ..Default::default()
        }
    }

    #[test]
    fn recipes_are_never_visible() {
        let recipe = ItemRecord::builder("recipe_black_king_bar")
            .cost(1450)
            .purchasable()
            .recipe()
            .stats(armor_stats())
            .build();
        let scaling = ScalingConfig::default();

        for category in AttributeCategory::iter() {
            for include in all_filters() {
                assert!(!is_visible(&recipe, category, include, &scaling));
            }
        }
    }

    #[test]
    fn empty_filter_hides_everything() {
        let scaling = ScalingConfig::default();
        let records = [
            ItemRecord::builder("chainmail").purchasable().stats(armor_stats()).build(),
            ItemRecord::builder("aegis").roshan_drop().build(),
            ItemRecord::builder("aghanims_shard").always_purchasable().build(),
        ];

        for record in &records {
            for category in AttributeCategory::iter() {
                assert!(!is_visible(record, category, ItemSources::empty(), &scaling));
            }
        }
    }

    #[test]
    fn source_filter_must_match() {
        let neutral = ItemRecord::builder("chipped_vest")
            .neutral(1)
            .stats(armor_stats())
            .build();
        let scaling = ScalingConfig::default();

        assert!(is_visible(
            &neutral,
            AttributeCategory::Armor,
            ItemSources::NEUTRAL,
            &scaling
        ));
        assert!(!is_visible(
            &neutral,
            AttributeCategory::Armor,
            ItemSources::PURCHASABLE | ItemSources::ROSHAN,
            &scaling
        ));
    }

    #[test]
    fn override_counts_as_purchasable() {
        let shard = ItemRecord::builder("aghanims_shard")
            .cost(1400)
            .always_purchasable()
            .build();
        let scaling = ScalingConfig::default();

        assert!(is_visible(
            &shard,
            AttributeCategory::AllItems,
            ItemSources::PURCHASABLE,
            &scaling
        ));
        assert!(!is_visible(
            &shard,
            AttributeCategory::AllItems,
            ItemSources::NEUTRAL | ItemSources::ROSHAN,
            &scaling
        ));
    }

    #[test]
    fn empty_record_is_only_visible_as_wildcard_with_override() {
        let plain = ItemRecord::builder("nothing").build();
        let overridden = ItemRecord::builder("nothing").always_purchasable().build();
        let scaling = ScalingConfig::default();

        for include in all_filters() {
            for category in AttributeCategory::iter() {
                assert!(!is_visible(&plain, category, include, &scaling));

                let expected = category == AttributeCategory::AllItems
                    && include.contains(ItemSources::PURCHASABLE);
                assert_eq!(is_visible(&overridden, category, include, &scaling), expected);
            }
        }
    }

    #[test]
    fn category_requires_a_source() {
        let boots = ItemRecord::builder("boots")
            .cost(500)
            .purchasable()
            .stats(ItemStats {
                movement_speed: Some(45.0),
                ..Default::default()
            })
            .build();
        let scaling = ScalingConfig::default();

        assert!(is_visible(
            &boots,
            AttributeCategory::MovementSpeed,
            ItemSources::PURCHASABLE,
            &scaling
        ));
        assert!(!is_visible(
            &boots,
            AttributeCategory::Armor,
            ItemSources::PURCHASABLE,
            &scaling
        ));
    }
}
