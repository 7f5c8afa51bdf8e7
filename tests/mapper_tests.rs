// Host-side tests for the pure mapping core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod mapper {
    include!("../src/core/mapper.rs");
}

use constants::*;
use mapper::*;

const W: f32 = 800.0;
const H: f32 = 600.0;

// A delta comfortably above the speed gate.
const FAST: f32 = 10.0;

#[test]
fn midi_to_hz_concert_pitch() {
    // MIDI 69 is A4 = 440 Hz by definition; the exponent is exactly zero.
    assert_eq!(midi_to_hz(69.0), 440.0);
}

#[test]
fn midi_to_hz_middle_c() {
    let c4 = midi_to_hz(60.0);
    assert!((c4 - 261.63).abs() < 0.01, "expected ~261.63, got {}", c4);
}

#[test]
fn midi_to_hz_monotonic() {
    let mut prev = midi_to_hz(0.0);
    for midi in 1..=127 {
        let f = midi_to_hz(midi as f32);
        assert!(f > prev, "not monotonic at midi {}", midi);
        prev = f;
    }
}

#[test]
fn scale_index_endpoints() {
    assert_eq!(scale_index(0.0, W), 0);
    assert_eq!(MAJOR_SCALE[scale_index(0.0, W)], 60);

    // Just below the right edge selects the top of the scale.
    assert_eq!(scale_index(W - 0.001, W), 7);
    assert_eq!(MAJOR_SCALE[scale_index(W - 0.001, W)], 72);
}

#[test]
fn scale_index_bucket_boundaries_round_down() {
    // Exact multiples of W/8 land at the start of their bucket.
    for k in 0..8 {
        let x = (k as f32) * W / 8.0;
        assert_eq!(scale_index(x, W), k, "boundary at bucket {}", k);
    }
}

#[test]
fn scale_index_clamps_out_of_range() {
    assert_eq!(scale_index(-50.0, W), 0);
    assert_eq!(scale_index(W, W), 7);
    assert_eq!(scale_index(W + 500.0, W), 7);
}

#[test]
fn volume_linear_in_y() {
    assert!((volume_for_y(0.0, H) - 0.8).abs() < 1e-6);
    assert!((volume_for_y(H, H) - 0.2).abs() < 1e-6);
    assert!((volume_for_y(H / 2.0, H) - 0.5).abs() < 1e-6);

    // Out-of-range y clamps to the nearest edge value.
    assert!((volume_for_y(-10.0, H) - 0.8).abs() < 1e-6);
    assert!((volume_for_y(H + 10.0, H) - 0.2).abs() < 1e-6);
}

#[test]
fn move_gate_requires_speed() {
    let mut m = ToneMapper::new();
    assert!(m.enter());

    // 3-4-5 triangle: speed exactly 5.0, which does not exceed the gate.
    assert!(m.on_move(100.0, 100.0, 3.0, 4.0, W, H, 1.0).is_none());
    // Slightly above the threshold triggers.
    assert!(m.on_move(100.0, 100.0, 3.1, 4.0, W, H, 1.0).is_some());
}

#[test]
fn move_gate_debounces_note_spacing() {
    let mut m = ToneMapper::new();
    assert!(m.enter());

    assert!(m.on_move(100.0, 100.0, FAST, FAST, W, H, 1.0).is_some());
    // Within 0.1 s of the last note: suppressed even at high speed.
    assert!(m.on_move(200.0, 200.0, FAST, FAST, W, H, 1.05).is_none());
    assert!(m.on_move(200.0, 200.0, FAST, FAST, W, H, 1.09).is_none());
    // Strictly past the spacing window: triggers again.
    assert!(m.on_move(200.0, 200.0, FAST, FAST, W, H, 1.2).is_some());
}

#[test]
fn move_ignored_when_not_playing() {
    let mut m = ToneMapper::new();
    assert!(m.on_move(100.0, 100.0, FAST, FAST, W, H, 1.0).is_none());

    m.enter();
    m.leave();
    assert!(m.on_move(100.0, 100.0, FAST, FAST, W, H, 5.0).is_none());
}

#[test]
fn enter_and_leave_are_idempotent() {
    let mut m = ToneMapper::new();

    assert!(!m.is_playing());
    assert!(!m.leave());

    // First enter creates; a second one while playing must not.
    assert!(m.enter());
    assert!(m.is_playing());
    assert!(!m.enter());

    assert!(m.leave());
    assert!(!m.is_playing());
    assert!(!m.leave());
}

#[test]
fn enter_move_leave_scenario() {
    let mut m = ToneMapper::new();
    assert!(m.enter());

    // Fast move to the top-left corner: lowest note, loudest volume.
    let p = m
        .on_move(0.0, 0.0, FAST, FAST, W, H, 1.0)
        .expect("gated move should trigger");
    assert_eq!(p.frequency_hz, midi_to_hz(60.0));
    assert!((p.volume - 0.8).abs() < 1e-6);

    // The envelope decays to volume * 0.3 = 0.24.
    let decay_target = p.volume * NOTE_DECAY_RATIO;
    assert!((decay_target - 0.24).abs() < 1e-6);

    assert!(m.leave());
    assert!(!m.is_playing());
}

#[test]
fn top_right_corner_selects_highest_note() {
    let mut m = ToneMapper::new();
    m.enter();
    let p = m
        .on_move(W - 1.0, H, FAST, FAST, W, H, 1.0)
        .expect("gated move should trigger");
    assert_eq!(p.frequency_hz, midi_to_hz(72.0));
    assert!((p.volume - 0.2).abs() < 1e-6);
}
