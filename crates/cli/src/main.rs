//! Item browser for the terminal.
//!
//! Ranks items by gold efficiency within an effect category, shows every
//! category an item contributes to and lists Roshan drops.
//!
//! ```bash
//! itemdex rank health --purchasable
//! itemdex rank critical_strike --neutral --limit 5
//! itemdex show monkey_king_bar
//! itemdex roshan
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Categories, Rank, Roshan, Show};
use config::CliConfig;

/// Item attribute browser
#[derive(Parser)]
#[command(name = "itemdex")]
#[command(about = "Rank items by cost efficiency per effect category", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding items.ron, overrides.ron and config.toml
    /// (defaults to the embedded catalog)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Rank items of a category by gold per unit of effect
    Rank(Rank),

    /// Show every category an item contributes to
    Show(Show),

    /// List Roshan drops in display order
    Roshan(Roshan),

    /// List the effect categories
    Categories(Categories),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir;
    }

    match cli.command {
        Command::Rank(cmd) => cmd.execute(&config),
        Command::Show(cmd) => cmd.execute(&config),
        Command::Roshan(cmd) => cmd.execute(&config),
        Command::Categories(cmd) => cmd.execute(),
    }
}
