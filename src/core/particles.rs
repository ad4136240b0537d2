use crate::constants::{
    PARTICLE_BASE_DURATION_SEC, PARTICLE_MAX_DELAY_SEC, PARTICLE_MAX_EXTRA_DURATION_SEC,
    PARTICLE_MAX_SIZE_PX, PARTICLE_MIN_SIZE_PX, PARTICLE_REPLENISH_BATCH,
};
use rand::Rng;
use smallvec::SmallVec;

/// Randomized look of a single decorative particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    /// Horizontal start position, percent of the container width.
    pub left_pct: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(PARTICLE_MIN_SIZE_PX..PARTICLE_MAX_SIZE_PX),
            left_pct: rng.gen_range(0.0..100.0),
            duration_sec: PARTICLE_BASE_DURATION_SEC
                + rng.gen_range(0.0..PARTICLE_MAX_EXTRA_DURATION_SEC),
            delay_sec: rng.gen_range(0.0..PARTICLE_MAX_DELAY_SEC),
        }
    }

    /// Inline style declarations as `(property, value)` pairs.
    pub fn style_props(&self) -> [(&'static str, String); 5] {
        let size = format!("{}px", self.size_px);
        [
            ("width", size.clone()),
            ("height", size),
            ("left", format!("{}%", self.left_pct)),
            ("animation-duration", format!("{}s", self.duration_sec)),
            ("animation-delay", format!("{}s", self.delay_sec)),
        ]
    }
}

/// Split a pool target into (spawn now, spawn when idle).
#[inline]
pub fn initial_split(target: usize) -> (usize, usize) {
    let now = target / 2;
    (now, target - now)
}

/// How many particles to spawn after the pool changed; never more than one batch.
#[inline]
pub fn replenish_count(target: usize, live: usize) -> usize {
    target.saturating_sub(live).min(PARTICLE_REPLENISH_BATCH)
}

/// Size of the deferred second half once the idle callback finally runs.
///
/// Refills may already have run by then, so it only fills the room left below `target`.
#[inline]
pub fn idle_batch(target: usize, live: usize, later: usize) -> usize {
    later.min(target.saturating_sub(live))
}

/// Specs for one replenishment batch.
pub fn replenish_batch<R: Rng + ?Sized>(
    rng: &mut R,
    target: usize,
    live: usize,
) -> SmallVec<[ParticleSpec; PARTICLE_REPLENISH_BATCH]> {
    (0..replenish_count(target, live))
        .map(|_| ParticleSpec::random(rng))
        .collect()
}

/// A subscription that can be torn down.
pub trait Disconnect {
    fn disconnect(&self);
}

/// Holds at most one live pool watcher; installing a new one tears down the old.
#[derive(Debug)]
pub struct WatchSlot<W: Disconnect> {
    current: Option<W>,
}

impl<W: Disconnect> Default for WatchSlot<W> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<W: Disconnect> WatchSlot<W> {
    pub fn install(&mut self, watcher: W) {
        if let Some(old) = self.current.replace(watcher) {
            old.disconnect();
        }
    }

    #[cfg(test)]
    pub fn is_installed(&self) -> bool {
        self.current.is_some()
    }
}
