use crate::config::ScalingConfig;
use crate::item::{ItemRecord, ItemSources};
use crate::roshan::roshan_drop_rank;
use crate::scoring::{ItemValue, item_value};
use crate::stats::AttributeCategory;
use crate::visibility::is_visible;

/// Read-only access to the item catalog.
///
/// Implementations are built once from content and shared across threads
/// without locking.
pub trait ItemOracle: Send + Sync {
    /// Looks up a record by catalog key.
    fn record(&self, key: &str) -> Option<&ItemRecord>;

    /// Returns every record in the catalog.
    fn records(&self) -> Vec<&ItemRecord>;

    /// Scaling factors the catalog is evaluated with.
    fn scaling(&self) -> &ScalingConfig;

    /// See [`is_visible`]. Unknown keys are never visible.
    fn is_visible(&self, key: &str, category: AttributeCategory, include: ItemSources) -> bool {
        self.record(key)
            .is_some_and(|record| is_visible(record, category, include, self.scaling()))
    }

    /// See [`item_value`]. Unknown keys have no value.
    fn value(&self, key: &str, category: AttributeCategory) -> Option<ItemValue> {
        self.record(key)
            .and_then(|record| item_value(record, category, self.scaling()))
    }

    /// See [`roshan_drop_rank`].
    fn roshan_drop_rank(&self, key: &str) -> u8 {
        roshan_drop_rank(key)
    }
}
