use crate::constants::{
    TYPEWRITER_DELETE_STEP_MS, TYPEWRITER_PAUSE_EMPTY_MS, TYPEWRITER_PAUSE_FULL_MS,
    TYPEWRITER_TYPE_STEP_MS,
};

/// One tick of the typewriter: text to display and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Type/delete cycle over a fixed, ordered phrase list.
///
/// Indices count `char`s, so accented phrases never split inside a code point.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// Empty phrases are dropped; returns `None` when nothing is left to type.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Option<Self> {
        let phrases: Vec<Vec<char>> = phrases
            .iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        })
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    #[cfg(test)]
    pub fn char_index(&self) -> usize {
        self.chars
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one character and report the text to show.
    pub fn step(&mut self) -> TypeStep {
        let full = &self.phrases[self.phrase];
        let shown = if self.deleting {
            self.chars - 1
        } else {
            self.chars + 1
        };
        let text: String = full[..shown].iter().collect();

        let delay_ms = if !self.deleting {
            self.chars += 1;
            if self.chars == full.len() {
                self.deleting = true;
                TYPEWRITER_PAUSE_FULL_MS
            } else {
                TYPEWRITER_TYPE_STEP_MS
            }
        } else {
            self.chars -= 1;
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                TYPEWRITER_PAUSE_EMPTY_MS
            } else {
                TYPEWRITER_DELETE_STEP_MS
            }
        };

        TypeStep { text, delay_ms }
    }
}

/// Text surface the typewriter writes to.
///
/// A display is claimed by the first loop that starts on it; later starts
/// see the claim and back off, so only one loop ever writes to it.
pub trait Display {
    fn text(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    fn is_claimed(&self) -> bool;
    fn mark_claimed(&self);
}

/// Claim `display` for a new loop. False when another loop already owns it.
pub fn claim<D: Display + ?Sized>(display: &D) -> bool {
    if display.is_claimed() {
        return false;
    }
    display.mark_claimed();
    true
}

/// Show `text`, touching the display only when it differs from what is there.
///
/// Returns whether a write happened.
pub fn render<D: Display + ?Sized>(display: &D, text: &str) -> bool {
    if display.text().as_deref() == Some(text) {
        return false;
    }
    display.set_text(text);
    true
}
