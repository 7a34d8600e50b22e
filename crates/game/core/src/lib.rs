//! Item attribute derivation and cost-efficiency scoring.
//!
//! `item-core` turns sparse raw item data into gameplay effect categories,
//! decides which items are sources of a category under a source filter, and
//! scores them by gold per unit of effect. Everything here is a pure function
//! of an [`ItemRecord`] and a [`ScalingConfig`]; catalogs are provided through
//! the [`ItemOracle`] trait by content crates.
pub mod config;
pub mod env;
pub mod error;
pub mod item;
pub mod roshan;
pub mod scoring;
pub mod stats;
pub mod visibility;

pub use config::ScalingConfig;
pub use env::ItemOracle;
pub use error::{CatalogError, ErrorSeverity, ItemError};
pub use item::{ItemRecord, ItemRecordBuilder, ItemSources, ItemStats, NeutralDrop, NeutralDropRate};
pub use roshan::{ROSHAN_DROP_PRIORITY, roshan_drop_rank, sort_roshan_drops};
pub use scoring::{ItemValue, efficiency, item_value};
pub use stats::{AttributeCategory, CategoryRule, Effect, EffectSum};
pub use visibility::is_visible;
