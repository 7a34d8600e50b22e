use crate::error::CatalogError;

/// Attribute scaling factors and heuristic constants used by derivations.
///
/// Values missing from a config file fall back to the defaults below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScalingConfig {
    /// Health granted per point of strength.
    pub strength_health: f64,
    /// Health regeneration granted per point of strength.
    pub strength_health_regen: f64,
    /// Armor granted per point of agility.
    pub agility_armor: f64,
    /// Attack speed granted per point of agility.
    pub agility_attack_speed: f64,
    /// Mana granted per point of intelligence.
    pub intelligence_mana: f64,
    /// Mana regeneration granted per point of intelligence.
    pub intelligence_mana_regen: f64,
    /// Absolute regeneration per percentage point of percent-based regen.
    pub health_regen_percent: f64,
    /// Absolute movement speed per percentage point (300 base speed / 100).
    pub movement_speed_percent: f64,
    /// Base damage that `base_damage_percent` is measured against.
    pub base_damage_baseline: f64,
}

impl ScalingConfig {
    pub const DEFAULT_STRENGTH_HEALTH: f64 = 22.0;
    pub const DEFAULT_STRENGTH_HEALTH_REGEN: f64 = 0.1;
    pub const DEFAULT_AGILITY_ARMOR: f64 = 1.0 / 6.0;
    pub const DEFAULT_AGILITY_ATTACK_SPEED: f64 = 1.0;
    pub const DEFAULT_INTELLIGENCE_MANA: f64 = 12.0;
    pub const DEFAULT_INTELLIGENCE_MANA_REGEN: f64 = 0.05;
    pub const DEFAULT_HEALTH_REGEN_PERCENT: f64 = 0.5;
    pub const DEFAULT_MOVEMENT_SPEED_PERCENT: f64 = 3.0;
    pub const DEFAULT_BASE_DAMAGE_BASELINE: f64 = 100.0;

    pub const fn new() -> Self {
        Self {
            strength_health: Self::DEFAULT_STRENGTH_HEALTH,
            strength_health_regen: Self::DEFAULT_STRENGTH_HEALTH_REGEN,
            agility_armor: Self::DEFAULT_AGILITY_ARMOR,
            agility_attack_speed: Self::DEFAULT_AGILITY_ATTACK_SPEED,
            intelligence_mana: Self::DEFAULT_INTELLIGENCE_MANA,
            intelligence_mana_regen: Self::DEFAULT_INTELLIGENCE_MANA_REGEN,
            health_regen_percent: Self::DEFAULT_HEALTH_REGEN_PERCENT,
            movement_speed_percent: Self::DEFAULT_MOVEMENT_SPEED_PERCENT,
            base_damage_baseline: Self::DEFAULT_BASE_DAMAGE_BASELINE,
        }
    }

    /// Overrides the agility to attack-speed factor (builder pattern).
    #[must_use]
    pub const fn with_agility_attack_speed(mut self, factor: f64) -> Self {
        self.agility_attack_speed = factor;
        self
    }

    /// Overrides the agility to armor factor (builder pattern).
    #[must_use]
    pub const fn with_agility_armor(mut self, factor: f64) -> Self {
        self.agility_armor = factor;
        self
    }

    /// Rejects factors that are negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fields = [
            ("strength_health", self.strength_health),
            ("strength_health_regen", self.strength_health_regen),
            ("agility_armor", self.agility_armor),
            ("agility_attack_speed", self.agility_attack_speed),
            ("intelligence_mana", self.intelligence_mana),
            ("intelligence_mana_regen", self.intelligence_mana_regen),
            ("health_regen_percent", self.health_regen_percent),
            ("movement_speed_percent", self.movement_speed_percent),
            ("base_damage_baseline", self.base_damage_baseline),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidScaling { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self::new()
    }
}
