//! Stage — the core enum defining all canonical draw phases
//!
//! A Stage is NOT an animation, NOT an engine event.
//! A Stage is the SEMANTIC MEANING of a moment in the draw flow.

use serde::{Deserialize, Serialize};

use gf_core::Rarity;

/// Canonical draw stage — the universal language of the draw lifecycle
///
/// Every renderer, regardless of toolkit, maps to these stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    /// Draw accepted and paid; the attempt is now committed
    DrawStart,

    /// Rarity tier decided (pre-reveal tension cue)
    RarityResolved {
        /// Resolved tier
        rarity: Rarity,
    },

    /// Reveal overlay begins showing the drawn character
    RevealStart {
        /// Resolved tier
        rarity: Rarity,
        /// Definition id of the drawn character
        character_id: String,
        /// Display name of the drawn character
        #[serde(default)]
        character_name: String,
    },

    /// Celebration hold while the reveal stays on screen
    RevealHold {
        /// Resolved tier (drives celebration intensity)
        rarity: Rarity,
    },

    /// Reveal window over; the instance may join the collection
    RevealComplete,

    /// Lifecycle back to idle, next draw allowed
    DrawEnd,
}

impl Stage {
    /// Stable stage name for routing and logging
    pub fn type_name(&self) -> &'static str {
        match self {
            Stage::DrawStart => "DRAW_START",
            Stage::RarityResolved { .. } => "RARITY_RESOLVED",
            Stage::RevealStart { .. } => "REVEAL_START",
            Stage::RevealHold { .. } => "REVEAL_HOLD",
            Stage::RevealComplete => "REVEAL_COMPLETE",
            Stage::DrawEnd => "DRAW_END",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_stable() {
        assert_eq!(Stage::DrawStart.type_name(), "DRAW_START");
        assert_eq!(
            Stage::RarityResolved {
                rarity: Rarity::Epic
            }
            .type_name(),
            "RARITY_RESOLVED"
        );
        assert_eq!(Stage::RevealComplete.type_name(), "REVEAL_COMPLETE");
        assert_eq!(Stage::DrawEnd.type_name(), "DRAW_END");
    }
}
