//! Tempo integration tests
//!
//! Values built from tempo-relative units must follow context changes;
//! values built from Hertz or MIDI must not.

use cadenza::prelude::*;

use crate::helpers::tolerances::*;
use crate::helpers::*;

/// Tick and beat values re-read BPM on every query.
#[test]
fn test_tempo_change_updates_tick_and_beat_values() {
    let ctx = test_context();
    let ticks = FrequencyValue::frequency(&ctx, TEST_PPQ, Some("ticks")).unwrap();
    let beats = FrequencyValue::frequency(&ctx, 1, Some("beats")).unwrap();
    let quarter = FrequencyValue::frequency(&ctx, "4n", None).unwrap();

    for value in [&ticks, &beats, &quarter] {
        assert_near(value.to_frequency().unwrap(), 2.0, PITCH_EPSILON, "120 BPM");
    }

    ctx.set_bpm(90.0).unwrap();

    for value in [&ticks, &beats, &quarter] {
        assert_near(value.to_frequency().unwrap(), 1.5, PITCH_EPSILON, "90 BPM");
    }
}

/// Hertz, MIDI, note-name and seconds values ignore tempo.
#[test]
fn test_tempo_change_leaves_absolute_values() {
    let ctx = test_context();
    let hz = FrequencyValue::frequency(&ctx, 440.0, None).unwrap();
    let midi = FrequencyValue::midi(&ctx, 60, None).unwrap();
    let note = FrequencyValue::midi(&ctx, "E4", None).unwrap();
    let seconds = FrequencyValue::frequency(&ctx, "0.5s", None).unwrap();

    ctx.set_bpm(200.0).unwrap();
    ctx.set_time_signature(7, 8).unwrap();

    assert_eq!(hz.to_frequency().unwrap(), 440.0);
    assert_eq!(midi.to_midi().unwrap(), 60.0);
    assert_eq!(note.to_midi().unwrap(), 64.0);
    assert_eq!(seconds.to_frequency().unwrap(), 2.0);
    assert!(!hz.is_tempo_relative());
    assert!(!note.is_tempo_relative());
}

/// MIDI values built from ticks follow tempo through the Hz -> MIDI hook.
#[test]
fn test_midi_from_ticks_follows_tempo() {
    let ctx = test_context();
    let value = FrequencyValue::midi(&ctx, "192i", None).unwrap();
    let before = value.to_midi().unwrap();

    // Doubling the tempo doubles the frequency: one octave up
    ctx.set_bpm(240.0).unwrap();
    let after = value.to_midi().unwrap();
    assert_near(after - before, 12.0, PITCH_EPSILON, "octave after tempo doubling");
}

/// Measures and transport time use the current time signature.
#[test]
fn test_time_signature_change_updates_bar_values() {
    let ctx = test_context();
    let bar = FrequencyValue::frequency(&ctx, "1m", None).unwrap();
    let position = FrequencyValue::frequency(&ctx, "1:0:0", None).unwrap();
    assert_near(bar.to_beats().unwrap(), 4.0, PITCH_EPSILON, "4/4 bar");
    assert_near(position.to_beats().unwrap(), 4.0, PITCH_EPSILON, "4/4 position");

    ctx.set_time_signature(6, 8).unwrap();
    assert_near(bar.to_beats().unwrap(), 3.0, PITCH_EPSILON, "6/8 bar");
    assert_near(position.to_beats().unwrap(), 3.0, PITCH_EPSILON, "6/8 position");
}

/// Sample-based values follow the sample rate.
#[test]
fn test_sample_rate_change_updates_sample_values() {
    let ctx = test_context();
    let value = FrequencyValue::frequency(&ctx, 480, Some("samples")).unwrap();
    assert_near(value.to_frequency().unwrap(), 100.0, PITCH_EPSILON, "48 kHz");

    ctx.set_sample_rate(96000.0).unwrap();
    assert_near(value.to_frequency().unwrap(), 200.0, PITCH_EPSILON, "96 kHz");
}

/// PPQ changes rescale tick values.
#[test]
fn test_ppq_change_updates_tick_values() {
    let ctx = test_context_with_bpm(60.0);
    let value = FrequencyValue::frequency(&ctx, 96, Some("i")).unwrap();
    assert_near(value.to_seconds().unwrap(), 0.5, PITCH_EPSILON, "192 PPQ");

    ctx.set_ppq(96).unwrap();
    assert_near(value.to_seconds().unwrap(), 1.0, PITCH_EPSILON, "96 PPQ");
}

/// Values in one context are unaffected by another context's tempo.
#[test]
fn test_contexts_are_independent() {
    let fast = test_context_with_bpm(180.0);
    let slow = test_context_with_bpm(60.0);
    let a = FrequencyValue::frequency(&fast, "4n", None).unwrap();
    let b = FrequencyValue::frequency(&slow, "4n", None).unwrap();

    slow.set_bpm(30.0).unwrap();
    assert_near(a.to_frequency().unwrap(), 3.0, PITCH_EPSILON, "fast context");
    assert_near(b.to_frequency().unwrap(), 0.5, PITCH_EPSILON, "slow context");
}

/// Tempo-relative values fail loudly once the context is gone.
#[test]
fn test_dropped_context_reports_missing_context() {
    let ctx = test_context();
    let value = FrequencyValue::midi(&ctx, "8n", None).unwrap();
    drop(ctx);

    assert_eq!(
        value.to_midi(),
        Err(cadenza::units::Error::MissingContext)
    );
}
