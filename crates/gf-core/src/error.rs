//! Error types for GachaForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum GfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias
pub type GfResult<T> = Result<T, GfError>;
