// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use lissajous_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_leaves_room_for_the_widest_stroke() {
    assert!(WIDTH > 0.0 && HEIGHT > 0.0);
    assert!(MARGIN_RATIO > 0.0 && MARGIN_RATIO < 0.5);
    // half the thickest line must fit inside the margin
    assert!(WIDTH * MARGIN_RATIO >= MAX_LINE_WIDTH / 2.0);
    assert!(HEIGHT * MARGIN_RATIO >= MAX_LINE_WIDTH / 2.0);
    assert!(BACKGROUND_CORNER_RADIUS * 2.0 < WIDTH.min(HEIGHT));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_respect_configuration_floors() {
    assert!(DEFAULT_A >= MIN_FREQUENCY);
    assert!(DEFAULT_B >= MIN_FREQUENCY);
    assert!(DEFAULT_POINTS_COUNT >= MIN_POINTS_COUNT);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!((MIN_OPACITY..=MAX_OPACITY).contains(&DEFAULT_OPACITY));
    assert!(FREQUENCY_STEP > 0.0 && POINTS_STEP > 0.0 && DURATION_STEP_MS > 0.0);
    assert!(OPACITY_STEP > 0.0 && OPACITY_STEP < MAX_OPACITY);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        RATIO_READOUT_ID,
        PHASE_READOUT_ID,
        CONTROL_A_ID,
        CONTROL_B_ID,
        CONTROL_POINTS_ID,
        CONTROL_DURATION_ID,
        CONTROL_DIRECTION_ID,
        CONTROL_BACKGROUND_ID,
        CONTROL_FOREGROUND_ID,
        CONTROL_OPACITY_ID,
        REVERSE_COLORS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
