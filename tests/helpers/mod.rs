//! Test helpers and fixtures for cadenza integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-12): Exact operations (reference pitch, identity)
//! - `PITCH_EPSILON` (1e-9): Hz/MIDI conversions through log2/powf
//! - `CENT` (0.01): Perceptual pitch equivalence (one cent)

#![allow(dead_code)]


use std::sync::Arc;

use cadenza::prelude::*;

/// Default test tempo (2 beats per second keeps expected values round)
pub const TEST_BPM: f64 = 120.0;

pub const TEST_SAMPLE_RATE: f64 = 48000.0;

pub const TEST_PPQ: u32 = 192;

/// Create a context with the standard test configuration.
pub fn test_context() -> Arc<TempoContext> {
    ContextBuilder::new()
        .bpm(TEST_BPM)
        .sample_rate(TEST_SAMPLE_RATE)
        .ppq(TEST_PPQ)
        .build()
        .expect("Failed to create test context")
}

/// Create a test context with a specific tempo.
pub fn test_context_with_bpm(bpm: f64) -> Arc<TempoContext> {
    ContextBuilder::new()
        .bpm(bpm)
        .sample_rate(TEST_SAMPLE_RATE)
        .ppq(TEST_PPQ)
        .build()
        .expect("Failed to create test context")
}

/// Assert two values are within `epsilon`, with a readable message.
pub fn assert_near(actual: f64, expected: f64, epsilon: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "{what}: expected {expected}, got {actual} (epsilon {epsilon})"
    );
}
