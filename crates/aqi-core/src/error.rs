//! Error types for the fallible edges of the core: decoding external
//! documents and validating estimation options.
//!
//! Estimation itself never fails; "not enough data" is reported through
//! [`crate::models::Estimate::Unavailable`].

use thiserror::Error;

/// Errors decoding station or route documents.
#[derive(Debug, Error)]
pub enum InputError {
    /// Document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level document must be an array.
    #[error("Expected a JSON array of {0}")]
    NotAnArray(&'static str),

    /// Route vertex is not a finite `[latitude, longitude]` pair.
    #[error("Route vertex {index} is not a [latitude, longitude] pair")]
    InvalidVertex { index: usize },
}

/// Invalid estimation options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("power must be a finite, non-negative number (got {0})")]
    InvalidPower(f64),

    #[error("maxStations must be at least 1")]
    ZeroMaxStations,

    #[error("maxDistanceMeters must be a finite, positive number (got {0})")]
    InvalidMaxDistance(f64),

    #[error("minStations ({min}) cannot exceed maxStations ({max})")]
    MinExceedsMax { min: usize, max: usize },
}
