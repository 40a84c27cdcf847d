//! Catalog parser — load character catalogs from external JSON
//!
//! Catalogs are supplied as configuration rather than hard-wired into
//! callers; this module parses and validates a catalog document before
//! it reaches the engine.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let parser = CatalogParser::new();
//! let catalog = parser.parse_json(json_string)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{CharacterCatalog, CharacterDef};
use crate::config::ConfigError;

/// Catalog parser
pub struct CatalogParser {
    /// Validation limits
    pub limits: CatalogLimits,
}

/// Parsing limits for untrusted catalog documents
#[derive(Debug, Clone)]
pub struct CatalogLimits {
    pub max_characters: usize,
    pub max_id_length: usize,
    pub max_name_length: usize,
    pub max_glyph_length: usize,
    pub max_power: u32,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            max_characters: 256,
            max_id_length: 64,
            max_name_length: 64,
            max_glyph_length: 16,
            max_power: 1_000_000,
        }
    }
}

/// Top-level catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Optional catalog name
    #[serde(default)]
    pub name: Option<String>,
    /// Character definitions
    pub characters: Vec<CharacterDef>,
}

impl CatalogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            limits: CatalogLimits::default(),
        }
    }

    /// Create parser with custom limits
    pub fn with_limits(limits: CatalogLimits) -> Self {
        Self { limits }
    }

    /// Parse a JSON catalog document
    pub fn parse_json(&self, json: &str) -> Result<CharacterCatalog, ConfigError> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;

        self.validate(&doc)?;

        Ok(CharacterCatalog::new(doc.characters))
    }

    /// Validate a catalog document against the limits
    pub fn validate(&self, doc: &CatalogDocument) -> Result<(), ConfigError> {
        if doc.characters.len() > self.limits.max_characters {
            return Err(ConfigError::Validation(format!(
                "too many characters: {} > {}",
                doc.characters.len(),
                self.limits.max_characters
            )));
        }

        for character in &doc.characters {
            if character.id.len() > self.limits.max_id_length {
                return Err(ConfigError::Validation(format!(
                    "character id too long: {} > {}",
                    character.id.len(),
                    self.limits.max_id_length
                )));
            }
            if character.name.len() > self.limits.max_name_length {
                return Err(ConfigError::Validation(format!(
                    "character name too long: {} > {}",
                    character.name.len(),
                    self.limits.max_name_length
                )));
            }
            if character.glyph.len() > self.limits.max_glyph_length {
                return Err(ConfigError::Validation(format!(
                    "character glyph too long: {} > {}",
                    character.glyph.len(),
                    self.limits.max_glyph_length
                )));
            }
            if character.power > self.limits.max_power {
                return Err(ConfigError::Validation(format!(
                    "character power too large: {} > {}",
                    character.power, self.limits.max_power
                )));
            }
        }

        Ok(())
    }
}

impl Default for CatalogParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RarityWeights;
    use gf_core::Rarity;

    const SAMPLE: &str = r#"{
        "name": "Sample Catalog",
        "characters": [
            { "id": "cookie-runner", "name": "Cookie Runner", "rarity": "common", "glyph": "C", "power": 100 },
            { "id": "cyber-cookie", "name": "Cyber Cookie", "rarity": "rare", "glyph": "R", "power": 250 },
            { "id": "neon-warrior", "name": "Neon Warrior", "rarity": "epic", "glyph": "E", "power": 500 },
            { "id": "quantum-king", "name": "Quantum King", "rarity": "legendary", "glyph": "L", "power": 1000 }
        ]
    }"#;

    #[test]
    fn test_parse_valid_catalog() {
        let parser = CatalogParser::new();
        let catalog = parser.parse_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get("quantum-king").unwrap().rarity,
            Rarity::Legendary
        );
        assert!(catalog.validate(&RarityWeights::standard()).is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let parser = CatalogParser::new();
        assert!(matches!(
            parser.parse_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_rarity() {
        let parser = CatalogParser::new();
        let json = r#"{ "characters": [
            { "id": "x", "name": "X", "rarity": "mythic", "glyph": "?", "power": 1 }
        ] }"#;
        assert!(matches!(parser.parse_json(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_limits_reject_oversized_power() {
        let parser = CatalogParser::with_limits(CatalogLimits {
            max_power: 500,
            ..CatalogLimits::default()
        });
        let json = r#"{ "characters": [
            { "id": "x", "name": "X", "rarity": "common", "glyph": "?", "power": 501 }
        ] }"#;
        assert!(matches!(
            parser.parse_json(json),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_limits_reject_too_many_characters() {
        let parser = CatalogParser::with_limits(CatalogLimits {
            max_characters: 1,
            ..CatalogLimits::default()
        });
        assert!(matches!(
            parser.parse_json(SAMPLE),
            Err(ConfigError::Validation(_))
        ));
    }
}
