//! Environment configuration for the item browser.
use std::env;
use std::path::PathBuf;

/// Default number of rows printed by `rank`.
pub const DEFAULT_LIMIT: usize = 20;

/// Settings read from the environment. Command-line flags take precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Data directory to load instead of the embedded catalog.
    pub data_dir: Option<PathBuf>,
    /// Rows printed by `rank` when `--limit` is not given.
    pub limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITEMDEX_DATA_DIR` - Catalog directory (default: embedded catalog)
    /// - `ITEMDEX_LIMIT` - Rows printed by `rank` (default: 20)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("ITEMDEX_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(limit) = read_env::<usize>("ITEMDEX_LIMIT") {
            config.limit = limit.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
