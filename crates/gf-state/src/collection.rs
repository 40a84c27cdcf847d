//! Owned-character collection

use serde::{Deserialize, Serialize};

use gf_core::Rarity;
use gf_gacha::CharacterDef;

/// An owned copy of a character definition
///
/// Created exactly once per successful draw and never mutated. The
/// instance id is distinct from the definition id, so the same
/// character can be owned multiple times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCharacter {
    /// Unique instance id
    pub instance_id: String,
    /// The definition this instance copies
    pub character: CharacterDef,
    /// Draw that produced this instance
    pub acquired_at_draw: String,
}

/// Append-only collection of owned characters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    owned: Vec<OwnedCharacter>,
    next_instance: u64,
}

impl Collection {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a drawn definition as a new owned instance
    pub fn add(&mut self, character: CharacterDef, draw_id: &str) -> &OwnedCharacter {
        self.next_instance += 1;
        let instance = OwnedCharacter {
            instance_id: format!("own-{:06}", self.next_instance),
            character,
            acquired_at_draw: draw_id.to_string(),
        };
        self.owned.push(instance);
        // Just pushed, so the vec is non-empty.
        &self.owned[self.owned.len() - 1]
    }

    /// Number of owned instances
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// Iterate owned instances in acquisition order
    pub fn iter(&self) -> impl Iterator<Item = &OwnedCharacter> {
        self.owned.iter()
    }

    /// Owned instances of a tier
    pub fn count_by_rarity(&self, rarity: Rarity) -> usize {
        self.owned
            .iter()
            .filter(|o| o.character.rarity == rarity)
            .count()
    }

    /// Combined power of the collection
    pub fn total_power(&self) -> u64 {
        self.owned.iter().map(|o| o.character.power as u64).sum()
    }

    /// Drop every owned instance
    pub fn reset(&mut self) {
        self.owned.clear();
    }
}
