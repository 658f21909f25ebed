//! Hertz / MIDI conversion primitives (12-TET, A4 = 440 Hz = MIDI 69).

use crate::{Error, Result};

pub const A4_FREQUENCY: f64 = 440.0;
pub const A4_MIDI: f64 = 69.0;
pub const SEMITONES_PER_OCTAVE: f64 = 12.0;

/// Fails with [`Error::Domain`] for non-positive or NaN input.
#[inline]
pub fn frequency_to_midi(hz: f64) -> Result<f64> {
    if hz.is_nan() || hz <= 0.0 {
        return Err(Error::Domain {
            value: hz,
            expected: "a positive frequency in Hz",
        });
    }
    Ok(SEMITONES_PER_OCTAVE * (hz / A4_FREQUENCY).log2() + A4_MIDI)
}

/// Accepts fractional note numbers for microtonal pitches.
#[inline]
pub fn midi_to_frequency(midi: f64) -> f64 {
    A4_FREQUENCY * 2.0_f64.powf((midi - A4_MIDI) / SEMITONES_PER_OCTAVE)
}

#[inline]
pub fn interval_to_frequency_ratio(semitones: f64) -> f64 {
    2.0_f64.powf(semitones / SEMITONES_PER_OCTAVE)
}
