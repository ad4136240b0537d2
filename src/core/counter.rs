use crate::constants::COUNTER_STEPS;

/// Leading-integer parse of a counter's text: `" 120+ "` -> 120, `"abc"` -> 0.
pub fn parse_target(text: &str) -> i64 {
    let s = text.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    // Only overflow can fail here; saturate like a very large parseInt result
    match digits.parse::<i64>() {
        Ok(v) => sign * v,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Per-tick increment for a target: `max(1, floor(target / steps))`.
#[inline]
pub fn step_for(target: i64) -> i64 {
    target.div_euclid(COUNTER_STEPS).max(1)
}

/// Values a counter displays while counting from zero up to `target`.
///
/// Each item is one tick. The last item is always exactly `target`.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    current: i64,
    step: i64,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            current: 0,
            step: step_for(target),
            done: false,
        }
    }

    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Iterator for CountUp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current)
        }
    }
}
