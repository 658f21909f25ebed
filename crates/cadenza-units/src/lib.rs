//! Interconvertible musical quantities for cadenza.
//!
//! A value is constructed from a number or a text token plus an optional
//! unit tag and can be read back in any unit. Tempo-relative inputs (ticks,
//! beats, note values, measures, transport time, samples) are resolved against
//! the shared [`TempoContext`](cadenza_core::TempoContext) on every query.
//!
//! # Primary API
//!
//! - [`FrequencyValue`] with [`ValueKind::Frequency`] (canonical Hertz) or
//!   [`ValueKind::Midi`] (canonical MIDI note number)
//! - [`frequency_to_midi`] / [`midi_to_frequency`]: conversion primitives
//! - [`note_to_midi`] / [`midi_to_note`]: scientific pitch notation
//! - [`Unit`]: unit tag vocabulary
//!
//! # Example
//!
//! ```
//! use cadenza_core::TempoContext;
//! use cadenza_units::FrequencyValue;
//!
//! let ctx = TempoContext::shared();
//! let quarter = FrequencyValue::frequency(&ctx, "4n", None)?;
//! assert_eq!(quarter.to_frequency()?, 2.0); // 120 BPM
//!
//! ctx.set_bpm(60.0)?;
//! assert_eq!(quarter.to_frequency()?, 1.0);
//! # Ok::<(), cadenza_units::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod conversions;
pub use conversions::{frequency_to_midi, interval_to_frequency_ratio, midi_to_frequency};

pub mod notation;
pub use notation::{midi_to_note, note_to_midi};

mod unit;
pub use unit::Unit;

pub(crate) mod quantity;

mod value;
pub use value::{FrequencyValue, RawValue, ValueKind};
