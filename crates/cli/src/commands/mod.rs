//! Subcommands and the helpers they share.

mod categories;
mod rank;
mod roshan;
mod show;

pub use categories::Categories;
pub use rank::Rank;
pub use roshan::Roshan;
pub use show::Show;

use std::str::FromStr;

use anyhow::Result;
use item_content::{ContentFactory, ItemCatalog};
use item_core::{AttributeCategory, ItemValue};

use crate::config::CliConfig;

/// Loads the catalog from the configured directory, or the embedded one.
fn load_catalog(config: &CliConfig) -> Result<ItemCatalog> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load_catalog(),
        None => ContentFactory::load_embedded_catalog(),
    }
}

/// Parses a category name; dashes are accepted in place of underscores.
pub(crate) fn parse_category(name: &str) -> Result<AttributeCategory, String> {
    AttributeCategory::from_str(&name.replace('-', "_"))
        .map_err(|_| format!("unknown category '{name}' (see `itemdex categories`)"))
}

fn format_value(value: &ItemValue) -> String {
    let unit = if value.is_percent { "%" } else { "" };
    match value.chance {
        Some(chance) => format!("{}{unit} @ {}%", trim(value.value), trim(chance)),
        None => format!("{}{unit}", trim(value.value)),
    }
}

fn format_efficiency(efficiency: Option<f64>) -> String {
    efficiency.map_or_else(|| "-".to_string(), |gold| format!("{gold:.1}"))
}

/// Two decimals at most, without trailing zeros.
fn trim(number: f64) -> String {
    let text = format!("{number:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_accept_dashes_and_case() {
        assert_eq!(
            parse_category("attack-speed"),
            Ok(AttributeCategory::AttackSpeed)
        );
        assert_eq!(parse_category("Health"), Ok(AttributeCategory::Health));
        assert!(parse_category("mana_burn").is_err());
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(trim(45.0), "45");
        assert_eq!(trim(0.1 + 0.2), "0.3");
        assert_eq!(trim(1.0 / 6.0), "0.17");
    }

    #[test]
    fn values_show_unit_and_chance() {
        let value = ItemValue {
            value: 180.0,
            chance: Some(25.0),
            efficiency: Some(44.4),
            is_percent: true,
        };
        assert_eq!(format_value(&value), "180% @ 25%");
        assert_eq!(format_efficiency(value.efficiency), "44.4");
        assert_eq!(format_efficiency(None), "-");
    }
}
