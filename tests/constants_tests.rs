// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/core/constants.rs");
}

use constants::*;
use markup::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_well_formed() {
    assert!(PARTICLE_MIN_SIZE_PX > 0.0);
    assert!(PARTICLE_MAX_SIZE_PX > PARTICLE_MIN_SIZE_PX);
    assert!(PARTICLE_BASE_DURATION_SEC > 0.0);
    assert!(PARTICLE_MAX_EXTRA_DURATION_SEC > 0.0);
    assert!(PARTICLE_MAX_DELAY_SEC > 0.0);
    assert!(PARTICLE_REPLENISH_BATCH > 0);
    assert!(PARTICLE_REPLENISH_BATCH < PARTICLE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typewriter_deletes_faster_than_it_types() {
    assert!(TYPEWRITER_DELETE_STEP_MS < TYPEWRITER_TYPE_STEP_MS);
    assert!(TYPEWRITER_PAUSE_FULL_MS > TYPEWRITER_PAUSE_EMPTY_MS);
    assert!(!TYPEWRITER_PHRASES.is_empty());
    assert!(TYPEWRITER_PHRASES.iter().all(|p| !p.is_empty()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(COUNTER_THRESHOLD > 0.0 && COUNTER_THRESHOLD <= 1.0);
    assert!(COUNTER_STEPS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_hero_moves_faster_than_particles() {
    assert!(PARALLAX_HERO_FACTOR > PARALLAX_PARTICLES_FACTOR);
    assert!(PARALLAX_PARTICLES_FACTOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn nav_highlights_before_scroll_target_is_reached() {
    // Clicking a link lands the section inside its highlighted span
    assert!(ACTIVE_SECTION_LOOKAHEAD_PX >= NAV_SCROLL_OFFSET_PX);
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
fn root_margins_use_css_lengths() {
    for margin in [REVEAL_ROOT_MARGIN, LAZY_ROOT_MARGIN] {
        assert!(margin.split_whitespace().all(|part| part.ends_with("px")));
    }
}

#[test]
fn markup_hooks_are_distinct() {
    let [a, b] = NAV_ACTIVE_CLASSES;
    assert_ne!(a, b);
    assert_ne!(SKILL_CARD_HOVER_CLASS, SKILL_CARD_ACTIVE_CLASS);
    assert!(LAZY_IMAGE_SELECTOR.contains(DATA_SRC_ATTR));
}
