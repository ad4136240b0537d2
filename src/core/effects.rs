use crate::constants::{PARALLAX_HERO_FACTOR, PARALLAX_PARTICLES_FACTOR};
use glam::DVec2;

/// Placement of a click ripple inside its host element (element-local pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Diameter; the larger of the host's width and height.
    pub size: f64,
    /// Top-left corner so the circle is centered on the click.
    pub origin: DVec2,
}

impl Ripple {
    /// `rect_min`/`rect_size` are the host's client rect, `click` the pointer's client position.
    pub fn at_click(rect_min: DVec2, rect_size: DVec2, click: DVec2) -> Self {
        let size = rect_size.max_element();
        let origin = click - rect_min - DVec2::splat(size / 2.0);
        Self { size, origin }
    }
}

/// Parallax translations for (hero background, particle container).
#[inline]
pub fn parallax_offsets(scroll_y: f64) -> (f64, f64) {
    (
        scroll_y * PARALLAX_HERO_FACTOR,
        scroll_y * PARALLAX_PARTICLES_FACTOR,
    )
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

/// Inline `overflow` for the body: locked while the mobile menu is open.
#[inline]
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        ""
    }
}

/// Coalesces bursts of events into at most one pending animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Queue coalesced work through `request` unless a frame is already pending.
    ///
    /// `request` reports whether the frame was actually scheduled; when it
    /// was not, the gate stays open so the next event tries again.
    pub fn schedule_with(&mut self, request: impl FnOnce() -> bool) -> bool {
        if self.pending {
            return false;
        }
        self.pending = request();
        self.pending
    }

    /// Call from the frame callback once the coalesced work has run.
    #[inline]
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
