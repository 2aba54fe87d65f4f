//! Error types for arith_drill_gen.
//!
//! A formula rejecting a sampled triple is not represented here: that outcome
//! is an `Option` inside the engine and is always resolved by resampling.

use thiserror::Error;

/// Result type alias for arith_drill_gen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Selector key is not in the course registry.
    #[error("unknown course: {0}")]
    CourseNotFound(u8),

    /// Raw range failed validation (zero bound or `min >= max`).
    #[error("invalid range: min={min} max={max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid quota: {0} (must be at least 1)")]
    InvalidQuota(usize),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The host viewer could not be launched.
    #[error("failed to open viewer: {0}")]
    Viewer(String),
}
