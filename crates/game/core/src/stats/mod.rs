//! Attribute derivation.
//!
//! ```text
//! [ ItemStats (raw optional fields) ]
//!      ↓  derived::*      (per-category formula, zero → no effect)
//! [ Effect ]
//!      ↓  rules::RULES    (visibility, percent and chance per category)
//! [ visibility / scoring ]
//! ```
//!
//! All functions are pure; nothing here allocates or keeps state between calls.

pub mod category;
pub mod derived;
pub mod effect;
pub mod rules;

pub use category::AttributeCategory;
pub use effect::{Effect, EffectSum};
pub use rules::{CategoryRule, PercentRule, VisibilityRule};
