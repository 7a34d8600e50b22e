//! List Roshan drops.

use anyhow::Result;
use clap::Parser;
use console::style;
use item_core::ItemOracle;

use super::load_catalog;
use crate::config::CliConfig;

/// List Roshan drops in display order
#[derive(Parser, Debug)]
pub struct Roshan {}

impl Roshan {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = load_catalog(config)?;

        println!("{}", style("Roshan drops").yellow().bold());
        for record in catalog.roshan_drops() {
            let rank = catalog.roshan_drop_rank(&record.key);
            println!("  {:>2}  {}", style(rank).dim(), style(&record.key).bold());
        }

        Ok(())
    }
}
