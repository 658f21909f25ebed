//! Unit tags accepted at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Hertz,
    Midi,
    /// Note name such as `"C#5"`; text input only.
    Note,
    Seconds,
    Samples,
    Ticks,
    /// Quarter-note beats.
    Beats,
    /// Note division, `4` is a quarter note.
    NoteValue,
    Triplet,
    Measures,
    /// `bars:quarters:sixteenths`.
    TransportTime,
}

impl Unit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Hertz => "hz",
            Unit::Midi => "midi",
            Unit::Note => "note",
            Unit::Seconds => "s",
            Unit::Samples => "samples",
            Unit::Ticks => "i",
            Unit::Beats => "beats",
            Unit::NoteValue => "n",
            Unit::Triplet => "t",
            Unit::Measures => "m",
            Unit::TransportTime => "tr",
        }
    }

    /// True when resolving this unit reads tempo, time signature, PPQ or sample rate.
    pub const fn needs_context(self) -> bool {
        matches!(
            self,
            Unit::Samples
                | Unit::Ticks
                | Unit::Beats
                | Unit::NoteValue
                | Unit::Triplet
                | Unit::Measures
                | Unit::TransportTime
        )
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "hz" => Unit::Hertz,
            "midi" => Unit::Midi,
            "note" => Unit::Note,
            "s" | "seconds" => Unit::Seconds,
            "samples" => Unit::Samples,
            "i" | "ticks" => Unit::Ticks,
            "beats" => Unit::Beats,
            "n" => Unit::NoteValue,
            "t" => Unit::Triplet,
            "m" => Unit::Measures,
            "tr" => Unit::TransportTime,
            _ => return Err(Error::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
