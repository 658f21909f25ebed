//! Integration test modules for cadenza
//!
//! - midi: MIDI values, note-name round trips, transposition
//! - tempo: tempo, time signature and sample rate changes
//! - frequency: Hertz values and time-unit accessors

pub mod midi;
pub mod tempo;
