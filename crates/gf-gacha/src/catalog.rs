//! Character definitions and the drawable catalog

use serde::{Deserialize, Serialize};

use gf_core::Rarity;

use crate::config::{ConfigError, RarityWeights};

/// A character definition
///
/// Immutable catalog entry. Owned copies of a definition are a
/// `gf-state` concern; the catalog itself never changes after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    /// Unique definition id
    pub id: String,
    /// Display name
    pub name: String,
    /// Rarity tier
    pub rarity: Rarity,
    /// Display glyph
    pub glyph: String,
    /// Power value
    pub power: u32,
}

impl CharacterDef {
    /// Create a definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        glyph: impl Into<String>,
        power: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
            glyph: glyph.into(),
            power,
        }
    }
}

/// The static set of all drawable character definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterCatalog {
    pub characters: Vec<CharacterDef>,
}

impl CharacterCatalog {
    /// Create a catalog from definitions
    pub fn new(characters: Vec<CharacterDef>) -> Self {
        Self { characters }
    }

    /// Standard catalog
    pub fn standard() -> Self {
        Self::new(vec![
            CharacterDef::new("cookie-runner", "Cookie Runner", Rarity::Common, "🍪", 100),
            CharacterDef::new("cyber-cookie", "Cyber Cookie", Rarity::Rare, "🤖", 250),
            CharacterDef::new("neon-warrior", "Neon Warrior", Rarity::Epic, "⚡", 500),
            CharacterDef::new("quantum-king", "Quantum King", Rarity::Legendary, "👑", 1000),
            CharacterDef::new("digital-ninja", "Digital Ninja", Rarity::Rare, "🥷", 300),
            CharacterDef::new("pixel-mage", "Pixel Mage", Rarity::Epic, "🔮", 450),
        ])
    }

    /// Get definition by id
    pub fn get(&self, id: &str) -> Option<&CharacterDef> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// All definitions of a tier
    pub fn of_rarity(&self, rarity: Rarity) -> Vec<&CharacterDef> {
        self.characters
            .iter()
            .filter(|c| c.rarity == rarity)
            .collect()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate definitions
    pub fn iter(&self) -> impl Iterator<Item = &CharacterDef> {
        self.characters.iter()
    }

    /// Check catalog integrity against a weight table
    ///
    /// Every tier carrying a positive weight must be reachable: at
    /// least one definition per weighted tier. Ids must be unique,
    /// names non-empty, powers positive.
    pub fn validate(&self, weights: &RarityWeights) -> Result<(), ConfigError> {
        for (i, character) in self.characters.iter().enumerate() {
            if character.name.is_empty() {
                return Err(ConfigError::EmptyName {
                    id: character.id.clone(),
                });
            }
            if character.power == 0 {
                return Err(ConfigError::ZeroPower {
                    id: character.id.clone(),
                });
            }
            if self.characters[..i].iter().any(|c| c.id == character.id) {
                return Err(ConfigError::DuplicateCharacterId {
                    id: character.id.clone(),
                });
            }
        }
        for rarity in Rarity::ALL {
            if weights.weight(rarity) > 0.0 && self.of_rarity(rarity).is_empty() {
                return Err(ConfigError::EmptyTierCatalog { rarity });
            }
        }
        Ok(())
    }
}

impl Default for CharacterCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
