//! Configuration error type.
//!
//! Every variant describes an input that is rejected when a voyage is
//! configured.  Nothing in this crate fails once a `SimConfig` and a `Route`
//! have been constructed.

use thiserror::Error;

/// The top-level error type for `vt-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VtError {
    #[error("speed must be a positive, finite number of metres per second (got {0})")]
    InvalidSpeed(f64),

    #[error("refresh interval must be a positive, finite number of milliseconds (got {0})")]
    InvalidRefreshRate(f64),

    #[error("refresh rate must be a positive, finite number of frames per second (got {0})")]
    InvalidRefreshRateFps(f64),

    #[error("coordinate ({lat}, {lon}) is outside [-90, 90] x [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `vt-*` crates.
pub type VtResult<T> = Result<T, VtError>;
