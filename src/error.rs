//! TuxWave Error Types
//!
//! Centralized error handling for the gesture pipeline.

use thiserror::Error;

/// Central error type for TuxWave
#[derive(Error, Debug)]
pub enum WaveError {
    #[error("Invalid landmark frame: {0}")]
    Frame(String),

    #[error("Tracker error: {0}")]
    Tracker(String),

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Input device error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for TuxWave operations
pub type WaveResult<T> = Result<T, WaveError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for WaveError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        WaveError::Lock(err.to_string())
    }
}
