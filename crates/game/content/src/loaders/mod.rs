//! Content loaders for reading item data from files.
//!
//! Item catalogs and overrides are RON, scaling configuration is TOML. Each
//! loader also has an embedded variant backed by the files under `data/`.

pub mod config;
pub mod factory;
pub mod item;
pub mod overrides;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalogFile, ItemLoader};
pub use overrides::{OverrideFile, OverrideLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
