//! Draw engine configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gf_core::Rarity;

/// Tolerance when checking that rarity weights sum to 1.0
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Configuration-integrity error
///
/// These indicate a deployment defect, not a user action; they are
/// checked once at engine construction, which refuses to start rather
/// than surfacing them per draw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rarity weights sum to {sum}, expected 1.0")]
    WeightsNotNormalized { sum: f64 },

    #[error("weight for {rarity} must be strictly positive")]
    NonPositiveWeight { rarity: Rarity },

    #[error("draw cost must be positive")]
    ZeroDrawCost,

    #[error("no character definitions for {rarity}")]
    EmptyTierCatalog { rarity: Rarity },

    #[error("duplicate character id: {id}")]
    DuplicateCharacterId { id: String },

    #[error("character {id} must have positive power")]
    ZeroPower { id: String },

    #[error("character {id} has an empty name")]
    EmptyName { id: String },

    #[error("catalog JSON error: {0}")]
    Json(String),

    #[error("catalog validation error: {0}")]
    Validation(String),
}

/// Rarity weight table
///
/// Immutable process-wide configuration mapping each tier to its draw
/// probability. Weights must be strictly positive and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityWeights {
    /// Standard table: 50% / 25% / 15% / 10%
    pub fn standard() -> Self {
        Self {
            common: 0.50,
            rare: 0.25,
            epic: 0.15,
            legendary: 0.10,
        }
    }

    /// Weight for a tier
    pub fn weight(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    /// Display percentage for a tier
    pub fn percent(&self, rarity: Rarity) -> f64 {
        self.weight(rarity) * 100.0
    }

    /// Cumulative upper boundaries in percent, in tier order
    ///
    /// For the standard table: `[50, 75, 90, 100]`.
    pub fn cumulative_percent(&self) -> [f64; Rarity::COUNT] {
        let mut bounds = [0.0; Rarity::COUNT];
        let mut acc = 0.0;
        for rarity in Rarity::ALL {
            acc += self.percent(rarity);
            bounds[rarity.index()] = acc;
        }
        bounds
    }

    /// Resolve a tier from a uniform roll in `[0, 100)`
    ///
    /// Standard cumulative-distribution inversion. Boundaries are
    /// half-open upward: a roll equal to a boundary value resolves to
    /// the tier that starts there (`50.0` yields Rare, not Common).
    pub fn rarity_for_roll(&self, roll: f64) -> Rarity {
        let bounds = self.cumulative_percent();
        if roll < bounds[0] {
            Rarity::Common
        } else if roll < bounds[1] {
            Rarity::Rare
        } else if roll < bounds[2] {
            Rarity::Epic
        } else {
            Rarity::Legendary
        }
    }

    /// Check weight-table integrity
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rarity in Rarity::ALL {
            if self.weight(rarity) <= 0.0 {
                return Err(ConfigError::NonPositiveWeight { rarity });
            }
        }
        let sum: f64 = Rarity::ALL.iter().map(|r| self.weight(*r)).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::WeightsNotNormalized { sum });
        }
        Ok(())
    }
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// A purchasable coin bundle
///
/// Price labels are decorative display strings; no payment processing
/// happens anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinBundle {
    /// Coins credited on purchase
    pub amount: u64,
    /// Display price label (e.g. "$2.99")
    pub price_label: String,
    /// Highlighted in the shop
    #[serde(default)]
    pub popular: bool,
}

impl CoinBundle {
    /// Create a bundle
    pub fn new(amount: u64, price_label: impl Into<String>, popular: bool) -> Self {
        Self {
            amount,
            price_label: price_label.into(),
            popular,
        }
    }

    /// Standard shop lineup
    pub fn standard_bundles() -> Vec<CoinBundle> {
        vec![
            CoinBundle::new(500, "$2.99", false),
            CoinBundle::new(1500, "$7.99", true),
            CoinBundle::new(5000, "$19.99", false),
        ]
    }
}

/// Complete draw configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Game name
    pub name: String,
    /// Rarity weight table
    pub weights: RarityWeights,
    /// Fixed cost of one draw
    pub draw_cost: u64,
    /// Opening wallet balance for a new session
    pub starting_balance: u64,
    /// Shop bundles
    pub bundles: Vec<CoinBundle>,
}

impl DrawConfig {
    /// Standard configuration: 100-coin draws, 1000-coin opening balance
    pub fn standard() -> Self {
        Self {
            name: "Standard Gacha".into(),
            weights: RarityWeights::standard(),
            draw_cost: 100,
            starting_balance: 1000,
            bundles: CoinBundle::standard_bundles(),
        }
    }

    /// Check configuration integrity
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if self.draw_cost == 0 {
            return Err(ConfigError::ZeroDrawCost);
        }
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_boundaries() {
        let weights = RarityWeights::standard();
        let bounds = weights.cumulative_percent();
        assert_abs_diff_eq!(bounds[0], 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds[1], 75.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds[2], 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds[3], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rarity_for_roll_boundary_exactness() {
        let weights = RarityWeights::standard();
        // Boundary rolls resolve into the tier that STARTS at the
        // boundary, never the one that ends there.
        assert_eq!(weights.rarity_for_roll(0.0), Rarity::Common);
        assert_eq!(weights.rarity_for_roll(49.999), Rarity::Common);
        assert_eq!(weights.rarity_for_roll(50.0), Rarity::Rare);
        assert_eq!(weights.rarity_for_roll(74.999), Rarity::Rare);
        assert_eq!(weights.rarity_for_roll(75.0), Rarity::Epic);
        assert_eq!(weights.rarity_for_roll(89.999), Rarity::Epic);
        assert_eq!(weights.rarity_for_roll(90.0), Rarity::Legendary);
        assert_eq!(weights.rarity_for_roll(99.999), Rarity::Legendary);
    }

    #[test]
    fn test_validate_standard_table() {
        assert!(RarityWeights::standard().validate().is_ok());
        assert!(DrawConfig::standard().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let weights = RarityWeights {
            common: 0.50,
            rare: 0.25,
            epic: 0.15,
            legendary: 0.05,
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::WeightsNotNormalized { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_weight() {
        let weights = RarityWeights {
            common: 0.60,
            rare: 0.25,
            epic: 0.15,
            legendary: 0.0,
        };
        assert_eq!(
            weights.validate(),
            Err(ConfigError::NonPositiveWeight {
                rarity: Rarity::Legendary
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_cost() {
        let mut config = DrawConfig::standard();
        config.draw_cost = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDrawCost));
    }

    #[test]
    fn test_standard_bundles() {
        let bundles = CoinBundle::standard_bundles();
        assert_eq!(bundles.len(), 3);
        assert_eq!(bundles[1].amount, 1500);
        assert!(bundles[1].popular);
        assert!(!bundles[0].popular);
    }
}
