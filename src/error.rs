//! Error types for ZCTA lookups.

use thiserror::Error;

/// Main error type for dataset loading and strict lookups.
#[derive(Debug, Error)]
pub enum ZctaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),

    #[error("State not found: {0}")]
    UnknownState(String),
}

impl From<serde_json::Error> for ZctaError {
    fn from(e: serde_json::Error) -> Self {
        ZctaError::Deserialization(e.to_string())
    }
}

/// Result type for ZCTA operations.
pub type Result<T> = std::result::Result<T, ZctaError>;
