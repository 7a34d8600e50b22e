//! Data-driven item content and the in-memory catalog.
//!
//! This crate houses the static item catalog and provides loaders for RON/TOML
//! data files:
//! - Item records (data-driven via RON)
//! - Per-item overrides such as "always purchasable" (RON)
//! - Attribute scaling configuration (TOML)
//!
//! [`ItemCatalog`] implements [`item_core::ItemOracle`], so every query of the
//! engine is available on a loaded catalog.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCatalog, ItemOverride, RankedItem};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader, LoadResult, OverrideFile,
    OverrideLoader,
};
