//! Rank items of one category by gold efficiency.

use anyhow::Result;
use clap::Parser;
use console::style;
use item_core::{AttributeCategory, ItemSources};

use super::{format_efficiency, format_value, load_catalog, parse_category};
use crate::config::CliConfig;

/// Rank items of a category by gold per unit of effect
#[derive(Parser, Debug)]
pub struct Rank {
    /// Effect category (e.g. `health`, `attack_speed`, `true_sight`)
    #[arg(value_parser = parse_category)]
    pub category: AttributeCategory,

    /// Include shop items
    #[arg(long)]
    pub purchasable: bool,

    /// Include neutral drops
    #[arg(long)]
    pub neutral: bool,

    /// Include Roshan drops
    #[arg(long)]
    pub roshan: bool,

    /// Maximum rows to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl Rank {
    /// Source filter; every source when no switch is given.
    fn sources(&self) -> ItemSources {
        if !(self.purchasable || self.neutral || self.roshan) {
            return ItemSources::all();
        }
        ItemSources::from_switches(self.purchasable, self.neutral, self.roshan)
    }

    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config)?;
        let include = self.sources();
        let limit = self.limit.unwrap_or(config.limit);

        println!(
            "{}",
            style(self.category.label()).yellow().bold()
        );

        if !self.category.is_numeric() {
            let records = catalog.visible(self.category, include);
            if records.is_empty() {
                println!("{}", style("No items").dim());
            }
            for record in records.into_iter().take(limit) {
                println!("  {} {}", style("→").cyan(), style(&record.key).bold());
            }
            return Ok(());
        }

        let ranked = catalog.rank(self.category, include);
        if ranked.is_empty() {
            println!("{}", style("No items").dim());
            return Ok(());
        }

        println!(
            "{:>4}  {:<28} {:>16} {:>8} {:>10}",
            style("#").dim(),
            style("item").dim(),
            style("value").dim(),
            style("cost").dim(),
            style("gold/unit").dim()
        );
        for (index, row) in ranked.iter().take(limit).enumerate() {
            let cost = row
                .record
                .comparable_cost()
                .map_or_else(|| "-".to_string(), |cost| cost.to_string());
            println!(
                "{:>4}  {:<28} {:>16} {:>8} {:>10}",
                index + 1,
                style(&row.record.key).bold(),
                format_value(&row.value),
                cost,
                style(format_efficiency(row.value.efficiency)).green()
            );
        }

        if ranked.len() > limit {
            println!(
                "{}",
                style(format!("… {} more", ranked.len() - limit)).dim()
            );
        }

        tracing::debug!(category = %self.category, rows = ranked.len(), "ranked");
        Ok(())
    }
}
