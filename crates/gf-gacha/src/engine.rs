//! Gacha draw engine — core draw resolution logic

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gf_core::Rarity;
use gf_stage::StageEvent;

use crate::catalog::{CharacterCatalog, CharacterDef};
use crate::config::{ConfigError, DrawConfig};
use crate::draw::DrawOutcome;
use crate::timing::{RevealProfile, RevealTiming, TimestampGenerator};

/// Draw refusal error
///
/// `InsufficientFunds` and `DrawInProgress` are expected, recoverable
/// refusals: the caller simply does not proceed, and nothing is logged
/// as a failure. `Catalog` carries a configuration-integrity error out
/// of tier resolution; engine construction validates catalog coverage
/// up front, so it cannot fire in a started process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("insufficient funds: balance {balance} is below draw cost {cost}")]
    InsufficientFunds { balance: u64, cost: u64 },

    #[error("a draw reveal is still in progress")]
    DrawInProgress,

    #[error(transparent)]
    Catalog(#[from] ConfigError),
}

impl DrawError {
    /// Is this a user-recoverable refusal (as opposed to a config defect)?
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            DrawError::InsufficientFunds { .. } | DrawError::DrawInProgress
        )
    }
}

/// Session draw statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawStats {
    pub total_draws: u64,
    pub coins_spent: u64,
    pub tier_counts: [u64; Rarity::COUNT],
    pub highest_power: u32,
}

impl DrawStats {
    /// Record one resolved draw
    pub fn record(&mut self, outcome: &DrawOutcome) {
        self.total_draws += 1;
        self.coins_spent += outcome.cost;
        self.tier_counts[outcome.rarity.index()] += 1;
        self.highest_power = self.highest_power.max(outcome.character.power);
    }

    /// Draws resolved to a tier
    pub fn count(&self, rarity: Rarity) -> u64 {
        self.tier_counts[rarity.index()]
    }

    /// Observed frequency for a tier, in percent
    pub fn rate(&self, rarity: Rarity) -> f64 {
        if self.total_draws > 0 {
            (self.count(rarity) as f64 / self.total_draws as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Gacha Draw Engine
///
/// Pure decision logic for one draw attempt, decoupled from wallet
/// storage and from reveal timing ownership. The engine holds only its
/// RNG, counters, and statistics; wallet and collection mutations
/// belong to the caller.
pub struct GachaEngine {
    /// Configuration
    config: DrawConfig,
    /// Character catalog
    catalog: CharacterCatalog,
    /// Random number generator
    rng: StdRng,
    /// Timing configuration
    timing_config: RevealTiming,
    /// Timestamp generator
    timestamp_gen: TimestampGenerator,
    /// Draws resolved by this engine
    draw_count: u64,
    /// Session statistics
    stats: DrawStats,
}

impl GachaEngine {
    /// Create a new engine with the standard preset
    pub fn new() -> Self {
        // Standard presets satisfy every integrity check (pinned by tests).
        Self::build(DrawConfig::standard(), CharacterCatalog::standard())
    }

    /// Create with specific config and catalog
    ///
    /// Runs all configuration-integrity validation; a malformed weight
    /// table or an unreachable tier refuses to construct rather than
    /// surfacing mid-game.
    pub fn with_config(
        config: DrawConfig,
        catalog: CharacterCatalog,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        catalog.validate(&config.weights)?;
        Ok(Self::build(config, catalog))
    }

    fn build(config: DrawConfig, catalog: CharacterCatalog) -> Self {
        let timing_config = RevealTiming::normal();
        Self {
            rng: StdRng::from_os_rng(),
            timestamp_gen: TimestampGenerator::new(timing_config.clone()),
            config,
            catalog,
            timing_config,
            draw_count: 0,
            stats: DrawStats::default(),
        }
    }

    /// Set timing profile
    pub fn set_timing(&mut self, profile: RevealProfile) {
        self.timing_config = RevealTiming::from_profile(profile);
        self.timestamp_gen = TimestampGenerator::new(self.timing_config.clone());
    }

    /// Get current config
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Get the catalog
    pub fn catalog(&self) -> &CharacterCatalog {
        &self.catalog
    }

    /// Get current timing config
    pub fn timing_config(&self) -> &RevealTiming {
        &self.timing_config
    }

    /// Get session stats
    pub fn stats(&self) -> &DrawStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = DrawStats::default();
        self.draw_count = 0;
    }

    /// Seed RNG for reproducible draws
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Attempt one paid draw
    ///
    /// Inputs are the caller-owned wallet balance and reveal flag. On
    /// success the returned outcome carries the cost to debit; the
    /// engine itself mutates no shared state.
    pub fn attempt_draw(
        &mut self,
        balance: u64,
        in_progress: bool,
    ) -> Result<DrawOutcome, DrawError> {
        if in_progress {
            return Err(DrawError::DrawInProgress);
        }
        let cost = self.config.draw_cost;
        if balance < cost {
            return Err(DrawError::InsufficientFunds { balance, cost });
        }

        let roll = self.rng.random_range(0.0..100.0);
        let rarity = self.config.weights.rarity_for_roll(roll);
        let character = self.resolve_character(rarity)?;

        Ok(self.finish_draw(rarity, character, false))
    }

    /// Resolve a draw with a forced tier (presentation rehearsal, tests)
    pub fn draw_forced(&mut self, rarity: Rarity) -> Result<DrawOutcome, ConfigError> {
        let character = self.resolve_character(rarity)?;
        Ok(self.finish_draw(rarity, character, true))
    }

    /// Pick a character uniformly within a tier
    ///
    /// Uses a second roll, independent of tier resolution. An empty
    /// tier is a configuration-integrity error that startup validation
    /// rules out for any engine built through `with_config`.
    pub fn resolve_character(&mut self, rarity: Rarity) -> Result<CharacterDef, ConfigError> {
        let pool = self.catalog.of_rarity(rarity);
        if pool.is_empty() {
            return Err(ConfigError::EmptyTierCatalog { rarity });
        }
        let idx = self.rng.random_range(0..pool.len());
        Ok(pool[idx].clone())
    }

    /// Generate the stage event sequence for an outcome
    pub fn generate_stages(&mut self, outcome: &DrawOutcome) -> Vec<StageEvent> {
        self.timestamp_gen.reset();
        outcome.generate_stages(&mut self.timestamp_gen)
    }

    fn finish_draw(&mut self, rarity: Rarity, character: CharacterDef, forced: bool) -> DrawOutcome {
        self.draw_count += 1;
        let outcome = DrawOutcome {
            draw_id: format!("draw-{:06}", self.draw_count),
            rarity,
            character,
            cost: self.config.draw_cost,
            forced,
        };
        self.stats.record(&outcome);
        log::debug!(
            "{} resolved to {} ({})",
            outcome.draw_id,
            outcome.character.name,
            outcome.rarity
        );
        outcome
    }
}

impl Default for GachaEngine {
    fn default() -> Self {
        Self::new()
    }
}
