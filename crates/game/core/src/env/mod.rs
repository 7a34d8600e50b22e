//! Traits describing read-only item data.
//!
//! Oracles expose the static item catalog and the scaling configuration it was
//! loaded with. Query helpers are provided methods, so any catalog
//! implementation gets the full output surface for free.
mod items;

pub use items::ItemOracle;
