//! Acquisition sources for items.

bitflags::bitflags! {
    /// Where an item can be obtained.
    ///
    /// The same type doubles as an inclusion filter: a record passes a filter
    /// when the two sets intersect.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemSources: u8 {
        /// Sold in the shop.
        const PURCHASABLE = 1 << 0;
        /// Timed drop from neutral creeps.
        const NEUTRAL = 1 << 1;
        /// Dropped by Roshan.
        const ROSHAN = 1 << 2;
    }
}

impl ItemSources {
    /// Builds a filter from the three inclusion switches.
    pub fn from_switches(purchasable: bool, neutral: bool, roshan: bool) -> Self {
        let mut sources = Self::empty();
        sources.set(Self::PURCHASABLE, purchasable);
        sources.set(Self::NEUTRAL, neutral);
        sources.set(Self::ROSHAN, roshan);
        sources
    }

    /// Returns true if any requested source is offered.
    #[inline]
    pub fn matches(self, requested: ItemSources) -> bool {
        self.intersects(requested)
    }
}

/// Drop metadata carried by neutral items.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeutralDrop {
    /// Neutral tier (1..=5).
    pub tier: u8,

    /// Drop chances per game-time window, ordered by `after_minutes`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drop_rates: Vec<NeutralDropRate>,
}

/// Drop chance that applies from a given game minute onwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeutralDropRate {
    pub after_minutes: u32,
    /// Chance in percent.
    pub chance: f64,
}

impl NeutralDrop {
    pub fn new(tier: u8) -> Self {
        Self {
            tier,
            drop_rates: Vec::new(),
        }
    }

    /// Drop chance in effect at `minute`, if any window has opened.
    pub fn chance_at(&self, minute: u32) -> Option<f64> {
        self.drop_rates
            .iter()
            .filter(|rate| rate.after_minutes <= minute)
            .max_by_key(|rate| rate.after_minutes)
            .map(|rate| rate.chance)
    }
}
