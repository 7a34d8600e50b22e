//! Scaling configuration loader.

use std::path::Path;

use item_core::ScalingConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for scaling configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`ScalingConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<ScalingConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Load the configuration shipped with this crate.
    pub fn load_embedded() -> LoadResult<ScalingConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<ScalingConfig> {
        let config: ScalingConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
