//! Structured error types for the sweep engine.

use thiserror::Error;

/// Unified error type for sweep configuration and report export.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Invalid configuration (non-positive std_dev, resolution, range, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failure
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SweepError>;
