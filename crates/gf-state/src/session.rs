//! Game session — the single place every shared mutation happens

use serde::{Deserialize, Serialize};

use gf_core::Wallet;
use gf_gacha::{CoinBundle, DrawConfig, DrawError, DrawOutcome, GachaEngine};

use crate::collection::{Collection, OwnedCharacter};
use crate::levels::LevelProgress;

/// Navigation views of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameView {
    Home,
    Characters,
    Levels,
    Shop,
}

impl Default for GameView {
    fn default() -> Self {
        Self::Home
    }
}

/// Draw lifecycle phase
///
/// While `Revealing`, further draw attempts are refused; this is the
/// double-spend guard over the reveal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPhase {
    Idle,
    Revealing,
}

impl Default for DrawPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// A reveal awaiting completion
///
/// Explicit reveal task: the presentation layer schedules the deadline
/// and reports back through `complete_reveal` (or `cancel_reveal`),
/// instead of mutating state from an anonymous timer callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingReveal {
    /// The outcome awaiting collection entry
    pub outcome: DrawOutcome,
    /// Reveal deadline, in ms from draw start
    pub completes_at_ms: f64,
}

/// Complete session state
///
/// Wallet, collection, navigation, levels, and the draw lifecycle in
/// one explicit struct. The engine is passed in per call and never
/// stored, so the session serializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    wallet: Wallet,
    collection: Collection,
    view: GameView,
    levels: LevelProgress,
    phase: DrawPhase,
    pending: Option<PendingReveal>,
}

impl GameSession {
    /// Start a session from a draw configuration
    pub fn new(config: &DrawConfig) -> Self {
        Self {
            wallet: Wallet::new(config.starting_balance),
            collection: Collection::new(),
            view: GameView::default(),
            levels: LevelProgress::standard(),
            phase: DrawPhase::Idle,
            pending: None,
        }
    }

    /// Current balance
    pub fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    /// Owned collection
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Current view
    pub fn view(&self) -> GameView {
        self.view
    }

    /// Navigate
    pub fn set_view(&mut self, view: GameView) {
        self.view = view;
    }

    /// Level progression
    pub fn levels(&self) -> &LevelProgress {
        &self.levels
    }

    /// Level progression, mutable
    pub fn levels_mut(&mut self) -> &mut LevelProgress {
        &mut self.levels
    }

    /// Current draw phase
    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Is a reveal currently blocking draws?
    pub fn is_draw_in_progress(&self) -> bool {
        self.phase == DrawPhase::Revealing
    }

    /// The reveal awaiting completion, if any
    pub fn pending_reveal(&self) -> Option<&PendingReveal> {
        self.pending.as_ref()
    }

    /// Attempt a draw and, on success, commit it
    ///
    /// The debit and the `Idle → Revealing` transition land together
    /// inside this one call; no caller can observe one without the
    /// other, so a concurrent attempt is either cleanly refused or
    /// sees the previous draw fully settled.
    pub fn begin_draw(&mut self, engine: &mut GachaEngine) -> Result<&PendingReveal, DrawError> {
        let outcome =
            engine.attempt_draw(self.wallet.balance(), self.is_draw_in_progress())?;

        if self.wallet.debit(outcome.cost).is_err() {
            // attempt_draw already checked affordability; reaching this
            // arm means the caller mutated the wallet mid-call.
            return Err(DrawError::InsufficientFunds {
                balance: self.wallet.balance(),
                cost: outcome.cost,
            });
        }

        let completes_at_ms = engine.timing_config().reveal_window_ms(outcome.rarity);
        self.phase = DrawPhase::Revealing;
        Ok(self.pending.insert(PendingReveal {
            outcome,
            completes_at_ms,
        }))
    }

    /// Finish the reveal window: materialize the instance, back to idle
    ///
    /// Returns `None` when no reveal was pending.
    pub fn complete_reveal(&mut self) -> Option<&OwnedCharacter> {
        let pending = self.pending.take()?;
        self.phase = DrawPhase::Idle;
        let owned = self
            .collection
            .add(pending.outcome.character, &pending.outcome.draw_id);
        log::debug!("{} joined the collection", owned.instance_id);
        Some(owned)
    }

    /// Cancel a pending reveal
    ///
    /// The debit happened when the draw began, so a cancelled reveal
    /// still grants the drawn instance.
    pub fn cancel_reveal(&mut self) -> Option<&OwnedCharacter> {
        self.complete_reveal()
    }

    /// Credit a purchased coin bundle
    ///
    /// Direct, unconditional credit with no engine involvement.
    /// Purchases are permitted while a reveal is pending.
    pub fn buy_bundle(&mut self, bundle: &CoinBundle) {
        self.wallet.credit(bundle.amount);
        log::debug!("credited {} coins", bundle.amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::Rarity;
    use gf_gacha::RevealProfile;

    fn engine() -> GachaEngine {
        let mut engine = GachaEngine::new();
        engine.seed(42);
        engine.set_timing(RevealProfile::Instant);
        engine
    }

    #[test]
    fn test_draw_debits_and_reveals() {
        let config = DrawConfig::standard();
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        assert_eq!(session.balance(), 1000);
        session.begin_draw(&mut engine).unwrap();

        assert_eq!(session.balance(), 900);
        assert_eq!(session.phase(), DrawPhase::Revealing);
        assert!(session.collection().is_empty());

        let owned = session.complete_reveal().unwrap();
        assert_eq!(owned.acquired_at_draw, "draw-000001");
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert_eq!(session.collection().len(), 1);
    }

    #[test]
    fn test_second_draw_refused_while_revealing() {
        let config = DrawConfig::standard();
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        session.begin_draw(&mut engine).unwrap();
        assert_eq!(
            session.begin_draw(&mut engine).unwrap_err(),
            DrawError::DrawInProgress
        );
        // The refusal left no second debit behind.
        assert_eq!(session.balance(), 900);

        session.complete_reveal().unwrap();
        assert!(session.begin_draw(&mut engine).is_ok());
    }

    #[test]
    fn test_insufficient_funds_leaves_state_untouched() {
        let mut config = DrawConfig::standard();
        config.starting_balance = 50;
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        let result = session.begin_draw(&mut engine);
        assert!(matches!(
            result,
            Err(DrawError::InsufficientFunds {
                balance: 50,
                cost: 100
            })
        ));
        assert_eq!(session.balance(), 50);
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert!(session.collection().is_empty());
        assert!(session.pending_reveal().is_none());
    }

    #[test]
    fn test_debit_credit_conservation() {
        let config = DrawConfig::standard();
        let bundle = &config.bundles[0];

        // Draw first, then buy.
        let mut engine_a = engine();
        let mut a = GameSession::new(&config);
        a.begin_draw(&mut engine_a).unwrap();
        a.complete_reveal().unwrap();
        a.buy_bundle(bundle);

        // Buy first, then draw.
        let mut engine_b = engine();
        let mut b = GameSession::new(&config);
        b.buy_bundle(bundle);
        b.begin_draw(&mut engine_b).unwrap();
        b.complete_reveal().unwrap();

        assert_eq!(a.balance(), 1400);
        assert_eq!(b.balance(), 1400);
    }

    #[test]
    fn test_purchase_allowed_while_revealing() {
        let config = DrawConfig::standard();
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        session.begin_draw(&mut engine).unwrap();
        assert!(session.is_draw_in_progress());
        session.buy_bundle(&config.bundles[2]);
        assert_eq!(session.balance(), 900 + 5000);
        assert!(session.is_draw_in_progress());
    }

    #[test]
    fn test_cancel_still_grants_instance() {
        let config = DrawConfig::standard();
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        session.begin_draw(&mut engine).unwrap();
        let owned = session.cancel_reveal().unwrap();
        assert_eq!(owned.instance_id, "own-000001");
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert_eq!(session.collection().len(), 1);
        // The debit stands.
        assert_eq!(session.balance(), 900);
    }

    #[test]
    fn test_repeated_draws_yield_distinct_instances() {
        let config = DrawConfig::standard();
        let mut engine = engine();
        let mut session = GameSession::new(&config);

        let mut ids = Vec::new();
        for _ in 0..5 {
            session.begin_draw(&mut engine).unwrap();
            ids.push(session.complete_reveal().unwrap().instance_id.clone());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(session.balance(), 500);
    }

    #[test]
    fn test_complete_without_pending_is_noop() {
        let config = DrawConfig::standard();
        let mut session = GameSession::new(&config);
        assert!(session.complete_reveal().is_none());
        assert_eq!(session.phase(), DrawPhase::Idle);
    }

    #[test]
    fn test_pending_reveal_deadline_tracks_rarity() {
        let config = DrawConfig::standard();
        let mut engine = GachaEngine::new();
        engine.seed(42);
        let mut session = GameSession::new(&config);

        let pending = session.begin_draw(&mut engine).unwrap();
        let expected = engine
            .timing_config()
            .reveal_window_ms(pending.outcome.rarity);
        assert_eq!(pending.completes_at_ms, expected);
    }

    #[test]
    fn test_collection_rarity_counts_after_forced_draws() {
        let mut engine = engine();
        let mut collection = Collection::new();
        for _ in 0..3 {
            let outcome = engine.draw_forced(Rarity::Legendary).unwrap();
            collection.add(outcome.character, &outcome.draw_id);
        }
        assert_eq!(collection.count_by_rarity(Rarity::Legendary), 3);
        assert_eq!(collection.total_power(), 3000);
    }
}
