// Host-side tests for the typewriter state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod typewriter {
    include!("../src/core/typewriter.rs");
}

use constants::*;
use typewriter::*;

fn collect(tw: &mut Typewriter, n: usize) -> Vec<TypeStep> {
    (0..n).map(|_| tw.step()).collect()
}

fn step(text: &str, delay_ms: u32) -> TypeStep {
    TypeStep {
        text: text.to_string(),
        delay_ms,
    }
}

#[test]
fn types_pauses_deletes_and_advances() {
    let mut tw = Typewriter::new(&["ab", "xyz"]).unwrap();
    let steps = collect(&mut tw, 9);
    assert_eq!(
        steps,
        vec![
            step("a", TYPEWRITER_TYPE_STEP_MS),
            step("ab", TYPEWRITER_PAUSE_FULL_MS),
            step("a", TYPEWRITER_DELETE_STEP_MS),
            step("", TYPEWRITER_PAUSE_EMPTY_MS),
            step("x", TYPEWRITER_TYPE_STEP_MS),
            step("xy", TYPEWRITER_TYPE_STEP_MS),
            step("xyz", TYPEWRITER_PAUSE_FULL_MS),
            step("xy", TYPEWRITER_DELETE_STEP_MS),
            step("x", TYPEWRITER_DELETE_STEP_MS),
        ]
    );
    assert_eq!(tw.phrase_index(), 1);
    assert!(tw.is_deleting());
}

#[test]
fn wraps_to_first_phrase_after_last() {
    let mut tw = Typewriter::new(&["a", "b", "c"]).unwrap();
    // Single-char phrases take two steps each: type then delete
    let texts: Vec<String> = collect(&mut tw, 8).into_iter().map(|s| s.text).collect();
    assert_eq!(texts, vec!["a", "", "b", "", "c", "", "a", ""]);
    assert_eq!(tw.phrase_index(), 1);
}

#[test]
fn each_phrase_grows_by_prefix_then_shrinks_to_empty() {
    let phrases = ["Rust", "Wasm", "DOM"];
    let mut tw = Typewriter::new(&phrases).unwrap();
    for phrase in phrases.iter().cycle().take(6) {
        let chars: Vec<char> = phrase.chars().collect();
        for i in 1..=chars.len() {
            let s = tw.step();
            assert_eq!(s.text, chars[..i].iter().collect::<String>());
        }
        for i in (0..chars.len()).rev() {
            let s = tw.step();
            assert_eq!(s.text, chars[..i].iter().collect::<String>());
        }
    }
}

#[test]
fn accented_phrases_step_by_character() {
    let mut tw = Typewriter::new(&["Automatización"]).unwrap();
    let steps = collect(&mut tw, 14);
    assert_eq!(steps[11].text, "Automatizaci");
    assert_eq!(steps[12].text, "Automatizació");
    assert_eq!(steps[13].text, "Automatización");
    assert_eq!(steps[13].delay_ms, TYPEWRITER_PAUSE_FULL_MS);
}

#[test]
fn empty_phrases_are_skipped() {
    let mut tw = Typewriter::new(&["", "ok", ""]).unwrap();
    let texts: Vec<String> = collect(&mut tw, 8).into_iter().map(|s| s.text).collect();
    assert_eq!(texts, vec!["o", "ok", "o", "", "o", "ok", "o", ""]);
}

#[test]
fn no_typewriter_without_text() {
    assert!(Typewriter::new::<&str>(&[]).is_none());
    assert!(Typewriter::new(&["", ""]).is_none());
}

#[test]
fn configured_phrases_all_cycle() {
    let mut tw = Typewriter::new(TYPEWRITER_PHRASES).unwrap();
    let total: usize = TYPEWRITER_PHRASES
        .iter()
        .map(|p| 2 * p.chars().count())
        .sum();
    let steps = collect(&mut tw, total);
    assert_eq!(steps.last().unwrap().text, "");
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.char_index(), 0);
    assert!(!tw.is_deleting());
}

#[derive(Default)]
struct FakeDisplay {
    text: std::cell::RefCell<Option<String>>,
    claimed: std::cell::Cell<bool>,
    writes: std::cell::Cell<usize>,
}

impl Display for FakeDisplay {
    fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
        self.writes.set(self.writes.get() + 1);
    }

    fn is_claimed(&self) -> bool {
        self.claimed.get()
    }

    fn mark_claimed(&self) {
        self.claimed.set(true);
    }
}

#[test]
fn render_writes_only_when_text_changes() {
    let display = FakeDisplay::default();
    assert!(render(&display, "R"));
    assert!(!render(&display, "R"));
    assert!(render(&display, "Ru"));
    assert!(render(&display, ""));
    assert!(!render(&display, ""));
    assert_eq!(display.writes.get(), 3);
    assert_eq!(display.text().as_deref(), Some(""));
}

#[test]
fn render_skips_write_when_markup_already_matches() {
    let display = FakeDisplay::default();
    *display.text.borrow_mut() = Some("Rust".to_string());
    assert!(!render(&display, "Rust"));
    assert_eq!(display.writes.get(), 0);
}

#[test]
fn second_start_on_same_display_is_refused() {
    let display = FakeDisplay::default();
    assert!(claim(&display));
    assert!(!claim(&display));
    assert!(!claim(&display));
}

/// Drive every loop allowed to start on `display` against a shared clock and
/// record what the display shows after each write.
fn simulate(display: &FakeDisplay, starts_ms: &[u32], until_ms: u32) -> Vec<String> {
    let mut loops: Vec<(u32, Typewriter)> = starts_ms
        .iter()
        .filter(|_| claim(display))
        .map(|&t| (t, Typewriter::new(&["Rust", "Go"]).unwrap()))
        .collect();
    let mut shown = Vec::new();
    loop {
        let Some((due, tw)) = loops.iter_mut().min_by_key(|(due, _)| *due) else {
            break;
        };
        if *due > until_ms {
            break;
        }
        let step = tw.step();
        if render(display, &step.text) {
            shown.push(step.text.clone());
        }
        *due += step.delay_ms;
    }
    shown
}

#[test]
fn restarting_keeps_a_single_clean_cycle() {
    let display = FakeDisplay::default();
    // Second start 150ms after the first, as a page script re-invoking it would
    let shown = simulate(&display, &[0, 150], 20_000);
    let expected_cycle = ["R", "Ru", "Rus", "Rust", "Rus", "Ru", "R", "", "G", "Go", "G", ""];
    assert!(shown.len() > expected_cycle.len());
    for (i, text) in shown.iter().enumerate() {
        assert_eq!(text, expected_cycle[i % expected_cycle.len()], "write {i}");
    }
}
