//! Catalog override loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ItemOverride;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED_OVERRIDES: &str = include_str!("../../data/overrides.ron");

/// Override file structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideFile {
    #[serde(default)]
    pub overrides: Vec<ItemOverride>,
}

/// Loader for per-item catalog overrides.
pub struct OverrideLoader;

impl OverrideLoader {
    /// Load overrides from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemOverride>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Load the overrides shipped with this crate.
    pub fn load_embedded() -> LoadResult<Vec<ItemOverride>> {
        Self::parse(EMBEDDED_OVERRIDES)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemOverride>> {
        let file: OverrideFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse overrides RON: {}", e))?;

        Ok(file.overrides)
    }
}
