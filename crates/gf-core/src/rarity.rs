//! Rarity tiers — the classification every character and draw resolves to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character rarity tier
///
/// Ordered by ascending power budget and descending draw probability.
/// The set is fixed; tiers are never created or destroyed at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rarity {
    /// Most frequent, lowest power budget
    Common = 0,
    Rare = 1,
    Epic = 2,
    /// Rarest, highest power budget
    Legendary = 3,
}

impl Rarity {
    /// All tiers in draw-table order (most to least probable)
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Number of tiers
    pub const COUNT: usize = 4;

    /// Dense index for per-tier accumulators
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Uppercase display label
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
        }
    }

    /// Presentation accent color for this tier
    pub fn color_hex(&self) -> &'static str {
        match self {
            Rarity::Common => "#9CA3AF",    // Gray
            Rarity::Rare => "#22D3EE",      // Cyan
            Rarity::Epic => "#D946EF",      // Fuchsia
            Rarity::Legendary => "#FACC15", // Yellow
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
