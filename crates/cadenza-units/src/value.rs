//! Frequency-unit values and their MIDI specialization.
//!
//! A [`FrequencyValue`] keeps the quantity it was constructed from and
//! resolves it on every query, so values built from ticks, beats or note
//! values follow tempo changes while Hertz, MIDI and note-name values do not.
//!
//! The two kinds differ only at the "external unit -> canonical" boundary:
//!
//! | input        | `Frequency` (Hz)       | `Midi` (note number)                 |
//! |--------------|------------------------|--------------------------------------|
//! | Hertz        | `hz`                   | `frequency_to_midi(hz)`              |
//! | seconds      | `1 / s`                | `frequency_to_midi(1 / s)`           |
//! | beats        | `1 / (b * 60 / bpm)`   | `frequency_to_midi(..)`              |
//! | ticks        | `1 / (t * 60 / (bpm * ppq))` | `frequency_to_midi(..)`        |
//! | MIDI / note  | `midi_to_frequency(n)` | `n`                                  |

use std::cmp::Ordering;
use std::sync::{Arc, Weak};

use cadenza_core::{TempoContext, TempoSnapshot};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::conversions::{frequency_to_midi, interval_to_frequency_ratio, midi_to_frequency};
use crate::notation::midi_to_note;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Canonical unit is Hertz.
    Frequency,
    /// Canonical unit is the (unclamped, possibly fractional) MIDI note number.
    Midi,
}

impl ValueKind {
    /// Unit assumed for numbers given without a unit tag.
    pub const fn default_unit(self) -> Unit {
        match self {
            ValueKind::Frequency => Unit::Hertz,
            ValueKind::Midi => Unit::Midi,
        }
    }
}

/// Construction input: a number, a text token, or nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    None,
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u8> for RawValue {
    fn from(value: u8) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::None, Into::into)
    }
}

/// A point or duration in musical time, readable in any unit.
///
/// The value holds a `Weak` reference to its tempo context: the context's
/// lifetime is owned by the host. Conversions that need tempo, PPQ or sample
/// rate fail with [`Error::MissingContext`] once the context is dropped.
///
/// ```
/// use cadenza_core::TempoContext;
/// use cadenza_units::FrequencyValue;
///
/// let ctx = TempoContext::shared();
/// let a4 = FrequencyValue::midi(&ctx, "A4", None)?;
/// let c5 = a4.transpose(3.0)?;
/// assert_eq!(c5.to_midi()?, 72.0);
/// assert_eq!(c5.to_note()?, "C5");
/// # Ok::<(), cadenza_units::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyValue {
    kind: ValueKind,
    quantity: Quantity,
    context: Weak<TempoContext>,
}

impl FrequencyValue {
    /// Interprets `value` in `units`, or in the kind's default unit when no
    /// tag is given. Text is parsed here; unknown tags and malformed text fail
    /// immediately.
    pub fn new(
        kind: ValueKind,
        context: &Arc<TempoContext>,
        value: impl Into<RawValue>,
        units: Option<&str>,
    ) -> Result<Self> {
        let unit = units.map(str::parse::<Unit>).transpose()?;
        let quantity = match value.into() {
            RawValue::None => Quantity::Default,
            RawValue::Number(number) => {
                Quantity::from_number(number, unit.unwrap_or(kind.default_unit()))?
            }
            RawValue::Text(text) => match unit {
                Some(unit) => Quantity::parse_as(&text, unit)?,
                None => Quantity::parse(&text, kind.default_unit())?,
            },
        };
        Ok(Self::from_parts(kind, quantity, Arc::downgrade(context)))
    }

    /// A value whose canonical unit is Hertz.
    pub fn frequency(
        context: &Arc<TempoContext>,
        value: impl Into<RawValue>,
        units: Option<&str>,
    ) -> Result<Self> {
        Self::new(ValueKind::Frequency, context, value, units)
    }

    /// A value whose canonical unit is the MIDI note number.
    pub fn midi(
        context: &Arc<TempoContext>,
        value: impl Into<RawValue>,
        units: Option<&str>,
    ) -> Result<Self> {
        Self::new(ValueKind::Midi, context, value, units)
    }

    /// Typed-unit constructor; only [`Unit::Note`] is rejected, since a note
    /// name is text.
    pub fn with_unit(
        kind: ValueKind,
        context: &Arc<TempoContext>,
        value: f64,
        unit: Unit,
    ) -> Result<Self> {
        let quantity = Quantity::from_number(value, unit)?;
        Ok(Self::from_parts(kind, quantity, Arc::downgrade(context)))
    }

    fn from_parts(kind: ValueKind, quantity: Quantity, context: Weak<TempoContext>) -> Self {
        Self {
            kind,
            quantity,
            context,
        }
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The bound context, if the host still holds it.
    pub fn context(&self) -> Option<Arc<TempoContext>> {
        self.context.upgrade()
    }

    /// True when this value's result depends on tempo, PPQ or sample rate.
    pub fn is_tempo_relative(&self) -> bool {
        self.quantity.needs_context()
    }

    /// Same input, read as the other kind.
    pub fn into_kind(self, kind: ValueKind) -> Self {
        Self { kind, ..self }
    }

    pub fn into_midi(self) -> Self {
        self.into_kind(ValueKind::Midi)
    }

    pub fn into_frequency(self) -> Self {
        self.into_kind(ValueKind::Frequency)
    }

    fn snapshot(&self) -> Result<Arc<TempoSnapshot>> {
        self.context
            .upgrade()
            .map(|context| context.snapshot())
            .ok_or(Error::MissingContext)
    }

    fn frequency_to_units(&self, hz: f64) -> Result<f64> {
        match self.kind {
            ValueKind::Frequency => Ok(hz),
            ValueKind::Midi => frequency_to_midi(hz),
        }
    }

    fn seconds_to_units(&self, seconds: f64) -> Result<f64> {
        match self.kind {
            ValueKind::Frequency => Ok(1.0 / seconds),
            ValueKind::Midi => frequency_to_midi(1.0 / seconds),
        }
    }

    fn beats_to_units(&self, beats: f64, snapshot: &TempoSnapshot) -> Result<f64> {
        let hz = 1.0 / snapshot.beats_to_seconds(beats);
        match self.kind {
            ValueKind::Frequency => Ok(hz),
            ValueKind::Midi => frequency_to_midi(hz),
        }
    }

    fn ticks_to_units(&self, ticks: f64, snapshot: &TempoSnapshot) -> Result<f64> {
        let hz = 1.0 / snapshot.ticks_to_seconds(ticks);
        match self.kind {
            ValueKind::Frequency => Ok(hz),
            ValueKind::Midi => frequency_to_midi(hz),
        }
    }

    fn midi_to_units(&self, midi: f64) -> f64 {
        match self.kind {
            ValueKind::Frequency => midi_to_frequency(midi),
            ValueKind::Midi => midi,
        }
    }

    /// The value in its kind's canonical unit (Hertz or MIDI note number).
    pub fn value_of(&self) -> Result<f64> {
        match self.quantity {
            Quantity::Default => Ok(0.0),
            Quantity::Hertz(hz) => self.frequency_to_units(hz),
            Quantity::Midi(midi) => Ok(self.midi_to_units(midi)),
            Quantity::Seconds(seconds) => self.seconds_to_units(seconds),
            Quantity::Samples(samples) => {
                let snapshot = self.resolving_snapshot()?;
                self.seconds_to_units(snapshot.samples_to_seconds(samples))
            }
            Quantity::Ticks(ticks) => {
                let snapshot = self.resolving_snapshot()?;
                self.ticks_to_units(ticks, &snapshot)
            }
            Quantity::Musical(time) => {
                let snapshot = self.resolving_snapshot()?;
                self.beats_to_units(time.beats(&snapshot), &snapshot)
            }
        }
    }

    fn resolving_snapshot(&self) -> Result<Arc<TempoSnapshot>> {
        let snapshot = self.snapshot()?;
        trace!(
            quantity = ?self.quantity,
            bpm = snapshot.bpm(),
            ppq = snapshot.ppq(),
            "Resolving tempo-relative value"
        );
        Ok(snapshot)
    }

    pub fn to_frequency(&self) -> Result<f64> {
        match self.kind {
            ValueKind::Frequency => self.value_of(),
            ValueKind::Midi => Ok(midi_to_frequency(self.to_midi()?)),
        }
    }

    /// Fails with [`Error::Domain`] when a `Frequency` value resolves to a
    /// non-positive frequency.
    pub fn to_midi(&self) -> Result<f64> {
        match self.kind {
            ValueKind::Frequency => frequency_to_midi(self.value_of()?),
            ValueKind::Midi => self.value_of(),
        }
    }

    /// Nearest sharp-spelled note name, e.g. `"C#5"`. Fails with
    /// [`Error::Domain`] when the MIDI number is not finite (a zero-length
    /// period, for instance).
    pub fn to_note(&self) -> Result<String> {
        midi_to_note(self.to_midi()?)
    }

    /// Period of the frequency in seconds.
    pub fn to_seconds(&self) -> Result<f64> {
        Ok(1.0 / self.to_frequency()?)
    }

    pub fn to_milliseconds(&self) -> Result<f64> {
        Ok(self.to_seconds()? * 1000.0)
    }

    /// Period in samples at the context's current sample rate.
    pub fn to_samples(&self) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.seconds_to_samples(self.to_seconds()?))
    }

    /// Period in quarter-note beats at the context's current tempo.
    pub fn to_beats(&self) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.seconds_to_beats(self.to_seconds()?))
    }

    /// Period in ticks at the context's current tempo and PPQ. Not rounded.
    pub fn to_ticks(&self) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.seconds_to_ticks(self.to_seconds()?))
    }

    /// New value shifted by `semitones` (negative and fractional allowed),
    /// bound to the same context. The receiver is unchanged.
    pub fn transpose(&self, semitones: f64) -> Result<Self> {
        if !semitones.is_finite() {
            return Err(Error::Domain {
                value: semitones,
                expected: "a finite interval in semitones",
            });
        }
        let quantity = match self.kind {
            ValueKind::Frequency => {
                Quantity::Hertz(self.to_frequency()? * interval_to_frequency_ratio(semitones))
            }
            ValueKind::Midi => Quantity::Midi(self.to_midi()? + semitones),
        };
        Ok(Self::from_parts(self.kind, quantity, self.context.clone()))
    }

    /// One transposed value per interval, in order.
    pub fn harmonize(&self, intervals: &[f64]) -> Result<Vec<Self>> {
        intervals
            .iter()
            .map(|&semitones| self.transpose(semitones))
            .collect()
    }
}

/// Values compare by resolved frequency; a value that cannot be resolved is
/// neither equal nor ordered.
impl PartialEq for FrequencyValue {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self.to_frequency(), other.to_frequency()),
            (Ok(a), Ok(b)) if a == b
        )
    }
}

impl PartialOrd for FrequencyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let a = self.to_frequency().ok()?;
        let b = other.to_frequency().ok()?;
        a.partial_cmp(&b)
    }
}
