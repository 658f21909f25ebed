//! MIDI value integration tests
//!
//! Reference pitch, note names, transposition and the unclamped range.

use cadenza::prelude::*;
use cadenza::{midi_to_note, note_to_midi};

use crate::helpers::tolerances::*;
use crate::helpers::*;

/// Constructing from 60 reads back 60 and middle C.
#[test]
fn test_midi_middle_c() {
    let ctx = test_context();
    let c4 = FrequencyValue::midi(&ctx, 60, None).unwrap();

    assert_eq!(c4.to_midi().unwrap(), 60.0);
    assert_near(
        c4.to_frequency().unwrap(),
        261.6255653005986,
        PITCH_EPSILON,
        "middle C",
    );
    assert_eq!(c4.to_note().unwrap(), "C4");
}

/// A4 transposed up a minor third is C5 and the original is untouched.
#[test]
fn test_midi_transpose_a4_to_c5() {
    let ctx = test_context();
    let a4 = FrequencyValue::midi(&ctx, "A4", None).unwrap();
    let c5 = a4.transpose(3.0).unwrap();

    assert_eq!(c5.to_midi().unwrap(), 72.0);
    assert_eq!(c5.to_note().unwrap(), "C5");
    assert_eq!(
        c5,
        FrequencyValue::midi(&ctx, "C5", None).unwrap(),
        "transposed value should equal C5"
    );

    // Original unchanged
    assert_eq!(a4.to_midi().unwrap(), 69.0);
    assert_eq!(a4.to_frequency().unwrap(), 440.0);
}

/// Microtonal and out-of-range results pass through unclamped.
#[test]
fn test_midi_transpose_fractional_and_unclamped() {
    let ctx = test_context();
    let g9 = FrequencyValue::midi(&ctx, "G9", None).unwrap();
    let above = g9.transpose(5.25).unwrap();
    assert_eq!(above.to_midi().unwrap(), 132.25);

    let c_minus_1 = FrequencyValue::midi(&ctx, 0, None).unwrap();
    let below = c_minus_1.transpose(-24.0).unwrap();
    assert_eq!(below.to_midi().unwrap(), -24.0);
    assert!(below.to_frequency().unwrap() > 0.0);
}

/// Transposing by an octave doubles the frequency.
#[test]
fn test_midi_octave_doubles_frequency() {
    let ctx = test_context();
    let a3 = FrequencyValue::midi(&ctx, "A3", None).unwrap();
    let a4 = a3.transpose(12.0).unwrap();
    assert_near(
        a4.to_frequency().unwrap(),
        2.0 * a3.to_frequency().unwrap(),
        PITCH_EPSILON,
        "octave",
    );
}

/// Frequency input lands on the nearest note for detuned pitches.
#[test]
fn test_midi_from_detuned_frequency() {
    let ctx = test_context();
    let sharp_a = FrequencyValue::midi(&ctx, "442hz", None).unwrap();
    let midi = sharp_a.to_midi().unwrap();

    assert!(midi > 69.0 && midi < 69.0 + 10.0 * CENT);
    assert_eq!(sharp_a.to_note().unwrap(), "A4");
}

/// Every note name in the MIDI range survives a value round trip.
#[test]
fn test_note_name_round_trip_through_values() {
    let ctx = test_context();
    for number in 0..=127 {
        let name = midi_to_note(number as f64).unwrap();
        let value = FrequencyValue::midi(&ctx, name.as_str(), None).unwrap();
        assert_eq!(value.to_midi().unwrap(), number as f64, "{name}");
        assert_eq!(value.to_note().unwrap(), name);
    }
}

/// Flats and sharps spell the same pitch.
#[test]
fn test_enharmonic_names() {
    assert_eq!(note_to_midi("Db4").unwrap(), note_to_midi("C#4").unwrap());
    assert_eq!(note_to_midi("Gb2").unwrap(), note_to_midi("F#2").unwrap());
}

/// Unparsable note names fail at construction with the offending token.
#[test]
fn test_midi_parse_errors() {
    let ctx = test_context();
    let err = FrequencyValue::midi(&ctx, "Q7", None).unwrap_err();
    match err {
        cadenza::units::Error::Parse { token, .. } => assert_eq!(token, "Q7"),
        other => panic!("expected parse error, got {other:?}"),
    }

    let err = FrequencyValue::midi(&ctx, 60, Some("semitones")).unwrap_err();
    assert_eq!(
        err,
        cadenza::units::Error::UnknownUnit("semitones".to_string())
    );
}

/// Harmonizing a MIDI value yields MIDI values at each interval.
#[test]
fn test_midi_harmonize() {
    let ctx = test_context();
    let c4 = FrequencyValue::midi(&ctx, "C4", None).unwrap();
    let triad = c4.harmonize(&[0.0, 4.0, 7.0]).unwrap();

    let midi: Vec<f64> = triad.iter().map(|v| v.to_midi().unwrap()).collect();
    assert_eq!(midi, [60.0, 64.0, 67.0]);
    assert!(triad.iter().all(|v| v.kind() == ValueKind::Midi));
}
