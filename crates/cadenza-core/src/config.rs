//! Tempo context configuration.

use serde::{Deserialize, Serialize};

use crate::time_signature::TimeSignature;
use crate::{Error, Result};

pub const MIN_BPM: f64 = 20.0;
pub const MAX_BPM: f64 = 999.0;
pub const MIN_SAMPLE_RATE: f64 = 8000.0;
pub const MAX_SAMPLE_RATE: f64 = 384000.0;

/// Initial state of a [`TempoContext`](crate::TempoContext).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub bpm: f64,
    pub time_signature: TimeSignature,
    pub sample_rate: f64,
    /// Ticks per quarter note.
    pub ppq: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            time_signature: TimeSignature::default(),
            sample_rate: 44100.0,
            ppq: 192,
        }
    }
}

impl ContextConfig {
    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn time_signature(mut self, numerator: u32, denominator: u32) -> Self {
        self.time_signature = TimeSignature::new(numerator, denominator);
        self
    }

    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn ppq(mut self, ppq: u32) -> Self {
        self.ppq = ppq;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_bpm(self.bpm)?;
        validate_sample_rate(self.sample_rate)?;
        validate_ppq(self.ppq)?;
        self.time_signature.validate()
    }
}

pub(crate) fn validate_bpm(bpm: f64) -> Result<()> {
    if !(MIN_BPM..=MAX_BPM).contains(&bpm) {
        return Err(Error::InvalidTempo(bpm));
    }
    Ok(())
}

pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<()> {
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    Ok(())
}

pub(crate) fn validate_ppq(ppq: u32) -> Result<()> {
    if ppq == 0 {
        return Err(Error::InvalidPpq(ppq));
    }
    Ok(())
}
