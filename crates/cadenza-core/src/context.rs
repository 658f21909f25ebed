//! Shared tempo context read by musical values.
//!
//! Writers publish a fresh [`TempoSnapshot`] through an [`ArcSwap`], so a reader
//! that loads once sees one consistent tempo state for the whole conversion.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::config::{validate_bpm, validate_ppq, validate_sample_rate, ContextConfig};
use crate::time_signature::TimeSignature;
use crate::Result;

/// Immutable view of the tempo context at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoSnapshot {
    bpm: f64,
    time_signature: TimeSignature,
    sample_rate: f64,
    ppq: u32,
}

impl TempoSnapshot {
    #[inline]
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    #[inline]
    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    #[inline]
    pub fn ppq(&self) -> u32 {
        self.ppq
    }

    #[inline]
    pub fn beats_per_bar(&self) -> f64 {
        self.time_signature.beats_per_bar()
    }

    #[inline]
    pub fn seconds_per_beat(&self) -> f64 {
        60.0 / self.bpm
    }

    #[inline]
    pub fn seconds_per_tick(&self) -> f64 {
        60.0 / (self.bpm * self.ppq as f64)
    }

    #[inline]
    pub fn beats_to_seconds(&self, beats: f64) -> f64 {
        beats * self.seconds_per_beat()
    }

    #[inline]
    pub fn seconds_to_beats(&self, seconds: f64) -> f64 {
        seconds / self.seconds_per_beat()
    }

    #[inline]
    pub fn ticks_to_seconds(&self, ticks: f64) -> f64 {
        ticks * self.seconds_per_tick()
    }

    #[inline]
    pub fn seconds_to_ticks(&self, seconds: f64) -> f64 {
        seconds / self.seconds_per_tick()
    }

    #[inline]
    pub fn samples_to_seconds(&self, samples: f64) -> f64 {
        samples / self.sample_rate
    }

    #[inline]
    pub fn seconds_to_samples(&self, seconds: f64) -> f64 {
        seconds * self.sample_rate
    }
}

impl From<ContextConfig> for TempoSnapshot {
    fn from(config: ContextConfig) -> Self {
        Self {
            bpm: config.bpm,
            time_signature: config.time_signature,
            sample_rate: config.sample_rate,
            ppq: config.ppq,
        }
    }
}

/// Mutable tempo, time signature, sample rate and PPQ.
///
/// Held behind an `Arc`; musical values keep a `Weak` reference and read the
/// current snapshot on every conversion.
#[derive(Debug)]
pub struct TempoContext {
    state: ArcSwap<TempoSnapshot>,
}

impl TempoContext {
    pub fn new(config: ContextConfig) -> Result<Arc<Self>> {
        config.validate()?;
        debug!(
            bpm = config.bpm,
            sample_rate = config.sample_rate,
            ppq = config.ppq,
            "Created tempo context"
        );
        Ok(Arc::new(Self {
            state: ArcSwap::from_pointee(TempoSnapshot::from(config)),
        }))
    }

    /// Context with the default configuration (120 BPM, 4/4, 44.1 kHz, 192 PPQ).
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<TempoSnapshot> {
        self.state.load_full()
    }

    pub fn bpm(&self) -> f64 {
        self.state.load().bpm
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.state.load().time_signature
    }

    pub fn sample_rate(&self) -> f64 {
        self.state.load().sample_rate
    }

    pub fn ppq(&self) -> u32 {
        self.state.load().ppq
    }

    pub fn set_bpm(&self, bpm: f64) -> Result<()> {
        validate_bpm(bpm)?;
        self.update(|snap| snap.bpm = bpm);
        debug!(bpm, "Tempo changed");
        Ok(())
    }

    pub fn set_time_signature(&self, numerator: u32, denominator: u32) -> Result<()> {
        let time_signature = TimeSignature::new(numerator, denominator);
        time_signature.validate()?;
        self.update(|snap| snap.time_signature = time_signature);
        debug!(numerator, denominator, "Time signature changed");
        Ok(())
    }

    pub fn set_sample_rate(&self, sample_rate: f64) -> Result<()> {
        validate_sample_rate(sample_rate)?;
        self.update(|snap| snap.sample_rate = sample_rate);
        debug!(sample_rate, "Sample rate changed");
        Ok(())
    }

    pub fn set_ppq(&self, ppq: u32) -> Result<()> {
        validate_ppq(ppq)?;
        self.update(|snap| snap.ppq = ppq);
        debug!(ppq, "PPQ changed");
        Ok(())
    }

    fn update(&self, mut apply: impl FnMut(&mut TempoSnapshot)) {
        self.state.rcu(|current| {
            let mut next = **current;
            apply(&mut next);
            next
        });
    }
}

impl Default for TempoContext {
    fn default() -> Self {
        Self {
            state: ArcSwap::from_pointee(TempoSnapshot::from(ContextConfig::default())),
        }
    }
}
