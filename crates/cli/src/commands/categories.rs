//! List effect categories.

use anyhow::Result;
use clap::Parser;
use console::style;
use item_core::AttributeCategory;
use strum::IntoEnumIterator;

/// List the effect categories
#[derive(Parser, Debug)]
pub struct Categories {}

impl Categories {
    pub fn execute(self) -> Result<()> {
        for category in AttributeCategory::iter() {
            let kind = if category.is_numeric() { "" } else { " (flag)" };
            println!(
                "  {:<22} {}{}",
                style(category.as_ref()).bold(),
                category.label(),
                style(kind).dim()
            );
        }
        Ok(())
    }
}
