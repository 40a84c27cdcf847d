//! StageEvent — a stage occurrence with metadata
//!
//! Wraps a Stage with timing, payload, and routing information.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// A stage event with full metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The canonical stage
    pub stage: Stage,

    /// Timestamp in milliseconds from draw start
    pub timestamp_ms: f64,

    /// Additional payload data
    #[serde(default)]
    pub payload: StagePayload,

    /// Custom tags for filtering/routing
    #[serde(default)]
    pub tags: Vec<String>,
}

impl StageEvent {
    /// Create a new stage event
    pub fn new(stage: Stage, timestamp_ms: f64) -> Self {
        Self {
            stage,
            timestamp_ms,
            payload: StagePayload::default(),
            tags: Vec::new(),
        }
    }

    /// Create with payload
    pub fn with_payload(stage: Stage, timestamp_ms: f64, payload: StagePayload) -> Self {
        Self {
            stage,
            timestamp_ms,
            payload,
            tags: Vec::new(),
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Get stage type name
    pub fn type_name(&self) -> &'static str {
        self.stage.type_name()
    }
}

/// Additional payload data for a stage event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagePayload {
    /// Coins debited for this draw
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,

    /// Power value of the drawn character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,

    /// Display glyph of the drawn character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,

    /// Owned-collection size after this draw lands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_count: Option<usize>,
}

impl StagePayload {
    /// Empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw cost
    pub fn cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the character power
    pub fn power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    /// Set the character glyph
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }
}
