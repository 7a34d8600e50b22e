//! Show everything an item contributes.

use anyhow::Result;
use clap::Parser;
use console::style;
use item_core::{AttributeCategory, ItemOracle, ItemSources};
use strum::IntoEnumIterator;

use super::{format_efficiency, format_value, load_catalog};
use crate::config::CliConfig;

/// Show every category an item contributes to
#[derive(Parser, Debug)]
pub struct Show {
    /// Catalog key (e.g. `black_king_bar`)
    pub item: String,
}

impl Show {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config)?;
        let record = catalog.get(&self.item)?;

        println!("{}", style(&record.key).yellow().bold());
        if let Some(cost) = record.cost {
            println!("  cost       {cost}");
        }
        if let Some(mana_cost) = record.mana_cost {
            println!("  mana cost  {mana_cost}");
        }
        if let Some(cooldown) = record.cooldown {
            println!("  cooldown   {cooldown}s");
        }
        println!("  sources    {}", describe_sources(record.sources()));
        if let Some(drop) = &record.neutral_drop {
            println!("  tier       {}", drop.tier);
            for rate in &drop.drop_rates {
                println!(
                    "    {}% from minute {}",
                    rate.chance, rate.after_minutes
                );
            }
        }
        if record.is_recipe {
            println!("  {}", style("recipe").dim());
        }
        println!();

        let scaling = catalog.scaling();
        for category in AttributeCategory::iter() {
            if category == AttributeCategory::AllItems
                || !item_core::is_visible(record, category, ItemSources::all(), scaling)
            {
                continue;
            }
            match item_core::item_value(record, category, scaling) {
                Some(value) => println!(
                    "  {:<22} {:>16} {:>10}",
                    category.label(),
                    format_value(&value),
                    style(format_efficiency(value.efficiency)).green()
                ),
                None => println!("  {:<22} {:>16}", category.label(), style("yes").cyan()),
            }
        }

        Ok(())
    }
}

fn describe_sources(sources: ItemSources) -> String {
    if sources.is_empty() {
        return "none".to_string();
    }
    sources
        .iter_names()
        .map(|(name, _)| name.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
