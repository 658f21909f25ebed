//! # Cadenza - musical time and pitch values
//!
//! Values that express a point or duration in musical time in any unit
//! (Hertz, MIDI note, note name, seconds, samples, ticks, beats, note values,
//! measures, transport time) and convert between them against a shared,
//! mutable tempo context.
//!
//! ## Architecture
//!
//! Cadenza is an umbrella crate that coordinates:
//! - **cadenza-core** - Tempo context (BPM, time signature, sample rate, PPQ)
//! - **cadenza-units** - Conversion primitives, notation and `FrequencyValue`
//!
//! ## Quick Start
//!
//! ```
//! use cadenza::prelude::*;
//!
//! let ctx = ContextBuilder::new().bpm(120.0).build()?;
//!
//! let a4 = FrequencyValue::midi(&ctx, "A4", None)?;
//! assert_eq!(a4.to_frequency()?, 440.0);
//! assert_eq!(a4.transpose(3.0)?.to_note()?, "C5");
//!
//! let eighth = FrequencyValue::frequency(&ctx, "8n", None)?;
//! assert_eq!(eighth.to_frequency()?, 4.0);
//! # Ok::<(), cadenza::Error>(())
//! ```
//!
//! Hosts that want the `frequency(..)` / `midi(..)` shorthands install a
//! process-wide default context once at startup with
//! [`init_default_context`] or [`ContextBuilder::install_as_default`].

/// Re-export of cadenza-core for direct access
pub use cadenza_core as core;

/// Re-export of cadenza-units for direct access
pub use cadenza_units as units;

pub use cadenza_core::{ContextConfig, TempoContext, TempoSnapshot, TimeSignature};

pub use cadenza_units::{
    frequency_to_midi, interval_to_frequency_ratio, midi_to_frequency, midi_to_note, note_to_midi,
    FrequencyValue, RawValue, Unit, ValueKind,
};

mod error;
pub use error::{Error, Result};

mod builder;
pub use builder::ContextBuilder;

mod context;
pub use context::{
    default_context, frequency, init_default_context, install_default_context, midi,
};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{ContextBuilder, ContextConfig, Error, Result, TempoContext};
    pub use crate::{FrequencyValue, RawValue, Unit, ValueKind};
    pub use crate::{frequency_to_midi, midi_to_frequency};
}
