//! Timing profiles for draw stage generation

use serde::{Deserialize, Serialize};

use gf_core::Rarity;

/// Timing profile for the reveal window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast/Turbo mode
    Turbo,
    /// Instant (zero-delay, for tests)
    Instant,
    /// Custom timing multiplier
    Custom,
}

impl Default for RevealProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Detailed reveal timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Profile type
    pub profile: RevealProfile,

    /// Delay from draw start to rarity resolution cue (ms)
    pub rarity_resolve_delay_ms: f64,

    /// Delay from rarity cue to reveal overlay (ms)
    pub reveal_start_delay_ms: f64,

    /// Base duration the reveal stays on screen (ms)
    pub reveal_hold_base_ms: f64,

    /// Delay from reveal completion to lifecycle end (ms)
    pub draw_end_delay_ms: f64,

    /// Minimum time between stage events (ms)
    pub min_event_interval_ms: f64,
}

impl RevealTiming {
    /// Normal gameplay timing — a 3000 ms reveal window end to end
    pub fn normal() -> Self {
        Self {
            profile: RevealProfile::Normal,
            rarity_resolve_delay_ms: 150.0,
            reveal_start_delay_ms: 250.0,
            reveal_hold_base_ms: 2600.0,
            draw_end_delay_ms: 100.0,
            min_event_interval_ms: 25.0,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: RevealProfile::Turbo,
            rarity_resolve_delay_ms: 50.0,
            reveal_start_delay_ms: 100.0,
            reveal_hold_base_ms: 800.0,
            draw_end_delay_ms: 50.0,
            min_event_interval_ms: 10.0,
        }
    }

    /// Instant mode for tests (all delays zero)
    pub fn instant() -> Self {
        Self {
            profile: RevealProfile::Instant,
            rarity_resolve_delay_ms: 0.0,
            reveal_start_delay_ms: 0.0,
            reveal_hold_base_ms: 0.0,
            draw_end_delay_ms: 0.0,
            min_event_interval_ms: 0.0,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: RevealProfile) -> Self {
        match profile {
            RevealProfile::Normal => Self::normal(),
            RevealProfile::Turbo => Self::turbo(),
            RevealProfile::Instant => Self::instant(),
            RevealProfile::Custom => Self::normal(),
        }
    }

    /// Scale timing by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: RevealProfile::Custom,
            rarity_resolve_delay_ms: self.rarity_resolve_delay_ms * factor,
            reveal_start_delay_ms: self.reveal_start_delay_ms * factor,
            reveal_hold_base_ms: self.reveal_hold_base_ms * factor,
            draw_end_delay_ms: self.draw_end_delay_ms * factor,
            min_event_interval_ms: self.min_event_interval_ms * factor,
        }
    }

    /// Reveal hold duration for a tier
    ///
    /// Rarer draws stay on screen longer.
    pub fn reveal_hold_duration(&self, rarity: Rarity) -> f64 {
        let tier_multiplier = match rarity {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.1,
            Rarity::Epic => 1.25,
            Rarity::Legendary => 1.5,
        };
        self.reveal_hold_base_ms * tier_multiplier
    }

    /// Total reveal window from draw start to reveal completion
    pub fn reveal_window_ms(&self, rarity: Rarity) -> f64 {
        self.rarity_resolve_delay_ms
            + self.reveal_start_delay_ms
            + self.reveal_hold_duration(rarity)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::normal()
    }
}

/// Timestamp generator for sequential stage events
#[derive(Debug, Clone)]
pub struct TimestampGenerator {
    current_ms: f64,
    config: RevealTiming,
}

impl TimestampGenerator {
    /// Create new generator
    pub fn new(config: RevealTiming) -> Self {
        Self {
            current_ms: 0.0,
            config,
        }
    }

    /// Reset to zero
    pub fn reset(&mut self) {
        self.current_ms = 0.0;
    }

    /// Get current timestamp
    pub fn current(&self) -> f64 {
        self.current_ms
    }

    /// Advance by duration and return new timestamp
    pub fn advance(&mut self, duration_ms: f64) -> f64 {
        self.current_ms += duration_ms.max(self.config.min_event_interval_ms);
        self.current_ms
    }

    /// Advance to the rarity resolution cue
    pub fn rarity_resolved(&mut self) -> f64 {
        self.advance(self.config.rarity_resolve_delay_ms)
    }

    /// Advance to the reveal overlay start
    pub fn reveal_start(&mut self) -> f64 {
        self.advance(self.config.reveal_start_delay_ms)
    }

    /// Advance through the reveal hold for a tier
    pub fn reveal_hold(&mut self, rarity: Rarity) -> f64 {
        self.advance(self.config.reveal_hold_duration(rarity))
    }

    /// Advance to the lifecycle end
    pub fn draw_end(&mut self) -> f64 {
        self.advance(self.config.draw_end_delay_ms)
    }

    /// Get timing config reference
    pub fn config(&self) -> &RevealTiming {
        &self.config
    }
}
