//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use item_core::{ItemError, ItemRecord, ScalingConfig};

use crate::catalog::{ItemCatalog, ItemOverride};
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, OverrideLoader};

/// Content factory that loads all item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults apply when missing)
/// ├── items.ron
/// └── overrides.ron    (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load scaling configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<ScalingConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ScalingConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item records from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemRecord>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load overrides from `overrides.ron`, or none if absent.
    pub fn load_overrides(&self) -> LoadResult<Vec<ItemOverride>> {
        let path = self.data_dir.join("overrides.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        OverrideLoader::load(&path)
    }

    /// Load and validate the full catalog from the data directory.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        let catalog = build_catalog(
            self.load_items()?,
            &self.load_overrides()?,
            self.load_config()?,
        )?;
        tracing::info!(
            items = catalog.len(),
            data_dir = %self.data_dir.display(),
            "item catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the catalog shipped with this crate.
    pub fn load_embedded_catalog() -> LoadResult<ItemCatalog> {
        let catalog = build_catalog(
            ItemLoader::load_embedded()?,
            &OverrideLoader::load_embedded()?,
            ConfigLoader::load_embedded()?,
        )?;
        tracing::info!(items = catalog.len(), "embedded item catalog loaded");
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn build_catalog(
    records: Vec<ItemRecord>,
    overrides: &[ItemOverride],
    scaling: ScalingConfig,
) -> LoadResult<ItemCatalog> {
    let mut catalog = ItemCatalog::from_records(records, scaling).inspect_err(|e| {
        tracing::error!(code = e.error_code(), severity = e.severity().as_str(), "{e}");
    })?;
    catalog.apply_overrides(overrides).inspect_err(|e| {
        tracing::error!(code = e.error_code(), severity = e.severity().as_str(), "{e}");
    })?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn optional_files_fall_back() {
        let factory = ContentFactory::new("/nonexistent/itemdex");

        assert_eq!(factory.load_config().unwrap(), ScalingConfig::default());
        assert!(factory.load_overrides().unwrap().is_empty());
        assert!(factory.load_items().is_err());
    }
}
