//! Item catalog loader.

use std::path::Path;

use item_core::ItemRecord;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_ITEMS: &str = include_str!("../../data/items.ron");

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemRecord>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item records from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`ItemCatalogFile`]
    pub fn load(path: &Path) -> LoadResult<Vec<ItemRecord>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Load the item records shipped with this crate.
    pub fn load_embedded() -> LoadResult<Vec<ItemRecord>> {
        Self::parse(EMBEDDED_ITEMS)
    }

    /// Parse item records from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemRecord>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent() {
        let records = ItemLoader::parse(
            r#"#![enable(implicit_some)]
            (
                items: [
                    (key: "chainmail", id: 4, cost: 550, purchasable: true, stats: (armor: 4.0)),
                    (key: "aegis", roshan_drop: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stats.armor, Some(4.0));
        assert_eq!(records[0].stats.armor_aura, None);
        assert_eq!(records[0].cost, Some(550));
        assert_eq!(records[1].cost, None);
        assert!(records[1].roshan_drop);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = ItemLoader::parse("(items: [(key: 5)])").unwrap_err();
        assert!(err.to_string().contains("item catalog"));
    }

    #[test]
    fn embedded_catalog_parses() {
        let records = ItemLoader::load_embedded().unwrap();
        assert!(records.iter().any(|record| record.key == "aegis"));
    }
}
