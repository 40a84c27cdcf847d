//! Draw outcome and stage event generation

use serde::{Deserialize, Serialize};

use gf_core::Rarity;
use gf_stage::{Stage, StageEvent, StagePayload};

use crate::catalog::CharacterDef;
use crate::timing::TimestampGenerator;

/// Result of one successful draw attempt
///
/// Carries everything the caller needs: the resolved tier, the drawn
/// definition, and the cost to debit. Applying the debit and creating
/// the owned instance are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Draw id, unique per engine session
    pub draw_id: String,
    /// Resolved rarity tier
    pub rarity: Rarity,
    /// Drawn character definition
    pub character: CharacterDef,
    /// Coins to debit for this draw
    pub cost: u64,
    /// Was the tier forced rather than rolled?
    #[serde(default)]
    pub forced: bool,
}

impl DrawOutcome {
    /// Generate all stage events for this draw
    ///
    /// Emits the full lifecycle from acceptance to idle, with
    /// profile-driven timestamps, sorted by timestamp.
    pub fn generate_stages(&self, timing: &mut TimestampGenerator) -> Vec<StageEvent> {
        let mut events = Vec::new();

        // 1. Draw accepted and paid
        events.push(StageEvent::with_payload(
            Stage::DrawStart,
            timing.current(),
            StagePayload::new().cost(self.cost),
        ));

        // 2. Tier decided (tension cue before the overlay shows)
        events.push(StageEvent::new(
            Stage::RarityResolved {
                rarity: self.rarity,
            },
            timing.rarity_resolved(),
        ));

        // 3. Reveal overlay
        events.push(StageEvent::with_payload(
            Stage::RevealStart {
                rarity: self.rarity,
                character_id: self.character.id.clone(),
                character_name: self.character.name.clone(),
            },
            timing.reveal_start(),
            StagePayload::new()
                .power(self.character.power)
                .glyph(self.character.glyph.clone()),
        ));

        // 4. Celebration hold, scaled by tier
        events.push(StageEvent::new(
            Stage::RevealHold {
                rarity: self.rarity,
            },
            timing.current(),
        ));

        // 5. Reveal window over; the instance may join the collection
        events.push(StageEvent::new(
            Stage::RevealComplete,
            timing.reveal_hold(self.rarity),
        ));

        // 6. Lifecycle back to idle
        events.push(StageEvent::new(Stage::DrawEnd, timing.draw_end()));

        // Presentation consumes events in playback order.
        events.sort_by(|a, b| {
            a.timestamp_ms
                .partial_cmp(&b.timestamp_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        events
    }
}
