// Host-side tests for ripple/parallax geometry and frame coalescing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effects {
    include!("../src/core/effects.rs");
}

use effects::*;
use glam::DVec2;

#[test]
fn ripple_is_sized_by_larger_side_and_centered_on_click() {
    let r = Ripple::at_click(
        DVec2::new(100.0, 50.0),
        DVec2::new(40.0, 24.0),
        DVec2::new(110.0, 60.0),
    );
    assert_eq!(r.size, 40.0);
    // Click is at (10, 10) inside the element; circle radius is 20
    assert_eq!(r.origin, DVec2::new(-10.0, -10.0));
}

#[test]
fn ripple_on_tall_element_uses_height() {
    let r = Ripple::at_click(DVec2::ZERO, DVec2::new(30.0, 90.0), DVec2::new(15.0, 45.0));
    assert_eq!(r.size, 90.0);
    assert_eq!(r.origin, DVec2::new(-30.0, 0.0));
}

#[test]
fn parallax_moves_layers_at_different_rates() {
    assert_eq!(parallax_offsets(0.0), (0.0, 0.0));
    assert_eq!(parallax_offsets(200.0), (100.0, 60.0));
    let (hero, particles) = parallax_offsets(1000.0);
    assert!(hero > particles);
}

#[test]
fn translate_y_formats_pixels() {
    assert_eq!(translate_y(0.0), "translateY(0px)");
    assert_eq!(translate_y(12.5), "translateY(12.5px)");
}

#[test]
fn body_overflow_locks_only_when_open() {
    assert_eq!(body_overflow(true), "hidden");
    assert_eq!(body_overflow(false), "");
}

#[test]
fn frame_gate_coalesces_until_complete() {
    let mut gate = FrameGate::default();
    let mut requests = 0;
    assert!(!gate.is_pending());
    assert!(gate.schedule_with(|| {
        requests += 1;
        true
    }));
    // A burst of scroll events while the frame is queued
    for _ in 0..10 {
        assert!(!gate.schedule_with(|| {
            requests += 1;
            true
        }));
    }
    assert_eq!(requests, 1);
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.schedule_with(|| true));
}

#[test]
fn frame_gate_reopens_when_frame_cannot_be_scheduled() {
    let mut gate = FrameGate::default();
    assert!(!gate.schedule_with(|| false));
    assert!(!gate.is_pending());
    // Next scroll event gets another chance instead of stalling forever
    let mut asked = false;
    assert!(gate.schedule_with(|| {
        asked = true;
        true
    }));
    assert!(asked);
    assert!(gate.is_pending());
}
