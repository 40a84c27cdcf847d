//! # gf-stage — GachaForge draw stage system
//!
//! Defines the canonical stages a draw passes through, independent of
//! any particular engine or renderer. A presentation layer responds to
//! STAGES, never to raw engine internals.
//!
//! ## Philosophy
//!
//! Every gacha draw, regardless of how it is rendered, passes through
//! the same semantic phases:
//! - Draw accepted → rarity resolved → reveal shown → collection updated
//!
//! This crate defines those phases and the timestamped events that
//! carry them.

pub mod event;
pub mod stage;

pub use event::*;
pub use stage::*;
