//! Parsed construction input, resolved lazily against a tempo snapshot.

use cadenza_core::TempoSnapshot;

use crate::notation::{try_note_to_midi, NOTE_GRAMMAR};
use crate::unit::Unit;
use crate::{Error, Result};

/// Order in which untagged text is matched against the unit grammars.
const MATCH_ORDER: [Unit; 10] = [
    Unit::Midi,
    Unit::Hertz,
    Unit::Note,
    Unit::NoteValue,
    Unit::Triplet,
    Unit::Measures,
    Unit::Ticks,
    Unit::TransportTime,
    Unit::Seconds,
    Unit::Samples,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Quantity {
    /// No input; resolves to zero in the value's canonical unit.
    Default,
    Hertz(f64),
    Midi(f64),
    Seconds(f64),
    Samples(f64),
    Ticks(f64),
    Musical(MusicalTime),
}

/// Lengths measured against the bar, resolved to quarter-note beats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MusicalTime {
    Beats(f64),
    NoteValue { division: f64, dotted: bool },
    Triplet(f64),
    Measures(f64),
    TransportTime {
        bars: f64,
        quarters: f64,
        sixteenths: f64,
    },
}

impl Quantity {
    pub(crate) fn from_number(value: f64, unit: Unit) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::parse(value.to_string(), "a finite number"));
        }
        let quantity = match unit {
            Unit::Hertz => Quantity::Hertz(value),
            Unit::Midi => Quantity::Midi(value),
            Unit::Note => return Err(Error::parse(value.to_string(), NOTE_GRAMMAR)),
            Unit::Seconds => Quantity::Seconds(value),
            Unit::Samples => Quantity::Samples(value),
            Unit::Ticks => Quantity::Ticks(value),
            Unit::Beats => Quantity::Musical(MusicalTime::Beats(value)),
            Unit::NoteValue => Quantity::Musical(MusicalTime::NoteValue {
                division: value,
                dotted: false,
            }),
            Unit::Triplet => Quantity::Musical(MusicalTime::Triplet(value)),
            Unit::Measures => Quantity::Musical(MusicalTime::Measures(value)),
            Unit::TransportTime => Quantity::Musical(MusicalTime::TransportTime {
                bars: value,
                quarters: 0.0,
                sixteenths: 0.0,
            }),
        };
        Ok(quantity)
    }

    /// Text without an explicit unit: a bare number takes `default_unit`,
    /// anything else must match one of the suffixed grammars.
    pub(crate) fn parse(text: &str, default_unit: Unit) -> Result<Self> {
        let token = text.trim();
        if let Some(value) = bare_number(token) {
            return Self::from_number(value, default_unit);
        }
        MATCH_ORDER
            .iter()
            .find_map(|&unit| match_unit(token, unit))
            .ok_or_else(|| {
                Error::parse(
                    text,
                    "a number, note name or unit-suffixed value (440hz, 60midi, 4n, 8t, 1m, 192i, 1:0:0, 0.5s, 100samples)",
                )
            })
    }

    /// Text with an explicit unit: a bare number or that unit's own grammar.
    pub(crate) fn parse_as(text: &str, unit: Unit) -> Result<Self> {
        let token = text.trim();
        if let Some(value) = bare_number(token) {
            return Self::from_number(value, unit);
        }
        match_unit(token, unit).ok_or_else(|| Error::parse(text, grammar(unit)))
    }

    /// Quantities that cannot be resolved without tempo, PPQ or sample rate.
    pub(crate) fn needs_context(&self) -> bool {
        !matches!(
            self,
            Quantity::Default | Quantity::Hertz(_) | Quantity::Midi(_) | Quantity::Seconds(_)
        )
    }
}

impl MusicalTime {
    /// Length in quarter-note beats at the snapshot's time signature.
    pub(crate) fn beats(&self, snapshot: &TempoSnapshot) -> f64 {
        match *self {
            MusicalTime::Beats(beats) => beats,
            MusicalTime::NoteValue { division, dotted } => {
                let beats = if division == 1.0 {
                    snapshot.beats_per_bar()
                } else {
                    4.0 / division
                };
                if dotted {
                    beats * 1.5
                } else {
                    beats
                }
            }
            MusicalTime::Triplet(division) => (4.0 / division) * 2.0 / 3.0,
            MusicalTime::Measures(bars) => bars * snapshot.beats_per_bar(),
            MusicalTime::TransportTime {
                bars,
                quarters,
                sixteenths,
            } => bars * snapshot.beats_per_bar() + quarters + sixteenths / 4.0,
        }
    }
}

fn grammar(unit: Unit) -> &'static str {
    match unit {
        Unit::Hertz => "a frequency like 440 or 440hz",
        Unit::Midi => "a MIDI note number like 60 or 60midi",
        Unit::Note => NOTE_GRAMMAR,
        Unit::Seconds => "seconds like 0.5 or 0.5s",
        Unit::Samples => "a sample count like 44100 or 44100samples",
        Unit::Ticks => "a tick count like 192 or 192i",
        Unit::Beats => "a beat count like 1.5",
        Unit::NoteValue => "a note value like 4n or 8n.",
        Unit::Triplet => "a triplet value like 8t",
        Unit::Measures => "a measure count like 2m",
        Unit::TransportTime => "transport time like 1:2:0",
    }
}

fn match_unit(token: &str, unit: Unit) -> Option<Quantity> {
    match unit {
        Unit::Hertz => strip_suffix_ignore_case(token, "hz")
            .and_then(unsigned_number)
            .map(Quantity::Hertz),
        Unit::Midi => strip_suffix_ignore_case(token, "midi")
            .and_then(signed_number)
            .map(Quantity::Midi),
        Unit::Note => try_note_to_midi(token).map(|midi| Quantity::Midi(midi as f64)),
        Unit::Seconds => strip_suffix_ignore_case(token, "s")
            .and_then(unsigned_number)
            .map(Quantity::Seconds),
        Unit::Samples => strip_suffix_ignore_case(token, "samples")
            .and_then(integer)
            .map(Quantity::Samples),
        Unit::Ticks => strip_suffix_ignore_case(token, "i")
            .and_then(integer)
            .map(Quantity::Ticks),
        Unit::Beats => None,
        Unit::NoteValue => {
            let (body, dotted) = match token.strip_suffix('.') {
                Some(body) => (body, true),
                None => (token, false),
            };
            strip_suffix_ignore_case(body, "n")
                .and_then(integer)
                .map(|division| Quantity::Musical(MusicalTime::NoteValue { division, dotted }))
        }
        Unit::Triplet => strip_suffix_ignore_case(token, "t")
            .and_then(integer)
            .map(|division| Quantity::Musical(MusicalTime::Triplet(division))),
        Unit::Measures => strip_suffix_ignore_case(token, "m")
            .and_then(unsigned_number)
            .map(|bars| Quantity::Musical(MusicalTime::Measures(bars))),
        Unit::TransportTime => transport_time(token),
    }
}

/// `bars:quarters[:sixteenths]`
fn transport_time(token: &str) -> Option<Quantity> {
    let mut parts = token.split(':');
    let bars = unsigned_number(parts.next()?)?;
    let quarters = unsigned_number(parts.next()?)?;
    let sixteenths = match parts.next() {
        Some(part) => unsigned_number(part)?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Quantity::Musical(MusicalTime::TransportTime {
        bars,
        quarters,
        sixteenths,
    }))
}

fn strip_suffix_ignore_case<'a>(token: &'a str, suffix: &str) -> Option<&'a str> {
    let split = token.len().checked_sub(suffix.len())?;
    if !token.is_char_boundary(split) {
        return None;
    }
    let (body, tail) = token.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(body)
}

/// Finite, optionally signed decimal (`60`, `-1.5`, `1e3`).
fn bare_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Digits with an optional fractional part (`440`, `0.5`).
fn unsigned_number(token: &str) -> Option<f64> {
    let (whole, fraction) = match token.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (token, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !fraction.map_or(true, digits) {
        return None;
    }
    token.parse().ok()
}

/// [`unsigned_number`] with an optional leading minus (`-0.5`).
fn signed_number(token: &str) -> Option<f64> {
    match token.strip_prefix('-') {
        Some(magnitude) => unsigned_number(magnitude).map(|v| -v),
        None => unsigned_number(token),
    }
}

fn integer(token: &str) -> Option<f64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
