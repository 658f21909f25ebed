//! Error types for cadenza-core.

use thiserror::Error;

/// Error type for tempo context operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid tempo: {0}. Must be between 20.0 and 999.0 BPM")]
    InvalidTempo(f64),

    #[error("Invalid time signature: {numerator}/{denominator}")]
    InvalidTimeSignature { numerator: u32, denominator: u32 },

    #[error("Invalid sample rate: {0}. Must be between 8000 and 384000 Hz")]
    InvalidSampleRate(f64),

    #[error("Invalid PPQ: {0}. Must be at least 1")]
    InvalidPpq(u32),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
