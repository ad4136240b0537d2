use crate::context::PageContext;
use crate::core::{parallax_offsets, translate_y};
use crate::dom;

/// Shift the hero background and the particle layer against the scroll.
pub fn apply(ctx: &PageContext, scroll_y: f64) {
    let (hero, particles) = parallax_offsets(scroll_y);
    if let Some(el) = &ctx.hero_bg {
        dom::set_style(el, "transform", &translate_y(hero));
    }
    if let Some(el) = &ctx.particles {
        dom::set_style(el, "transform", &translate_y(particles));
    }
}
