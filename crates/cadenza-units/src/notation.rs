//! Note names in scientific pitch notation (`C4` = 60, `A4` = 69).

use crate::{Error, Result};

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub(crate) const NOTE_GRAMMAR: &str = "a note name like A4, C#5 or Bb-1";

fn pitch_class(letter: char) -> Option<i32> {
    let class = match letter.to_ascii_lowercase() {
        'c' => 0,
        'd' => 2,
        'e' => 4,
        'f' => 5,
        'g' => 7,
        'a' => 9,
        'b' => 11,
        _ => return None,
    };
    Some(class)
}

/// Accidentals, longest first so `##` and `bb` win over `#` and `b`.
const ACCIDENTALS: [(&str, i32); 5] = [("##", 2), ("bb", -2), ("#", 1), ("x", 2), ("b", -1)];

/// Parses a note name into its MIDI note number.
///
/// Accepts a letter `A`-`G` (any case), an optional accidental (one of `#`,
/// `##`, `x`, `b`, `bb`), then a signed octave: `"A4"`, `"c#5"`, `"Bb-1"`,
/// `"Fx3"`. The result is not clamped to 0-127.
pub fn note_to_midi(name: &str) -> Result<i32> {
    try_note_to_midi(name.trim()).ok_or_else(|| Error::parse(name, NOTE_GRAMMAR))
}

pub(crate) fn try_note_to_midi(name: &str) -> Option<i32> {
    let letter = name.chars().next()?;
    let class = pitch_class(letter)?;
    let rest = &name[letter.len_utf8()..];

    let (accidental, octave) = ACCIDENTALS
        .iter()
        .find_map(|&(symbol, shift)| rest.strip_prefix(symbol).map(|octave| (shift, octave)))
        .unwrap_or((0, rest));

    if octave.starts_with('+') {
        return None;
    }
    let octave: i32 = octave.parse().ok()?;
    octave
        .checked_add(1)?
        .checked_mul(12)?
        .checked_add(class + accidental)
}

/// Formats a MIDI note number as a sharp-spelled note name.
///
/// Fractional numbers round to the nearest semitone. Fails with
/// [`Error::Domain`] for NaN, infinities and numbers too large to name.
pub fn midi_to_note(midi: f64) -> Result<String> {
    let note = midi.round();
    if !note.is_finite() || note.abs() > f64::from(i32::MAX) {
        return Err(Error::Domain {
            value: midi,
            expected: "a finite MIDI note number",
        });
    }
    let note = note as i64;
    let class = note.rem_euclid(12) as usize;
    let octave = note.div_euclid(12) - 1;
    Ok(format!("{}{}", SHARP_NAMES[class], octave))
}
