//! # gf-core — GachaForge shared domain types
//!
//! Primitives used by every other crate in the workspace: the rarity
//! vocabulary, the coin wallet, and the workspace-wide error type.

pub mod error;
pub mod rarity;
pub mod wallet;

pub use error::*;
pub use rarity::*;
pub use wallet::*;
