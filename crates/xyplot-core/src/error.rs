// File: crates/xyplot-core/src/error.rs
// Summary: Error type shared by the codec, storage and parsing layers.

use thiserror::Error;

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors raised below the high-level plot operations.
///
/// `PlotData::save_to`/`load_from` and the lenient decoders never return these
/// to their callers; they log and fall back instead.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to encode plot data: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode plot data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("storage error for key '{key}'")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid shape path: {0}")]
    InvalidPath(String),

    #[error("invalid number format: {0}")]
    InvalidFormat(String),
}

impl PlotError {
    pub fn storage(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage { key: key.into(), source }
    }
}
