//! Tagged derivation results and the aggregation helper that produces them.

/// Outcome of deriving one category for one item.
///
/// `None` means the item is not a source of the category. A derived value is
/// never `Value(0.0)`: a zero total collapses to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    Value(f64),
}

impl Effect {
    #[inline]
    pub fn is_present(self) -> bool {
        matches!(self, Effect::Value(_))
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Effect::Value(value) => Some(value),
            Effect::None => None,
        }
    }
}

impl From<Effect> for Option<f64> {
    fn from(effect: Effect) -> Self {
        effect.value()
    }
}

/// Sums optional raw fields while tracking whether any of them was present.
///
/// # Example
/// ```
/// # use item_core::stats::{Effect, EffectSum};
/// let effect = EffectSum::new()
///     .add(Some(10.0))
///     .add(None)
///     .add_scaled(Some(20.0), 0.5)
///     .finish();
/// assert_eq!(effect, Effect::Value(20.0));
///
/// assert_eq!(EffectSum::new().add(None).finish(), Effect::None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectSum {
    total: f64,
    present: bool,
}

impl EffectSum {
    pub const fn new() -> Self {
        Self {
            total: 0.0,
            present: false,
        }
    }

    /// Adds a raw field as-is.
    #[must_use]
    pub fn add(self, field: Option<f64>) -> Self {
        self.add_scaled(field, 1.0)
    }

    /// Adds a raw field multiplied by `factor`.
    #[must_use]
    pub fn add_scaled(mut self, field: Option<f64>, factor: f64) -> Self {
        if let Some(value) = field {
            self.total += value * factor;
            self.present = true;
        }
        self
    }

    /// Adds another category's result.
    #[must_use]
    pub fn add_effect(self, effect: Effect) -> Self {
        self.add(effect.value())
    }

    /// Returns true if at least one contributing field was present.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Running total, or `None` when nothing contributed.
    ///
    /// Unlike [`EffectSum::finish`], a present zero stays `Some(0.0)`.
    pub fn total(&self) -> Option<f64> {
        self.present.then_some(self.total)
    }

    /// Closes the sum. No contributor or a zero total yields [`Effect::None`].
    pub fn finish(self) -> Effect {
        if self.present && self.total != 0.0 {
            Effect::Value(self.total)
        } else {
            Effect::None
        }
    }
}
