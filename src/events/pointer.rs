use crate::constants::SKILL_CARD_ACTIVE_MS;
use crate::context::PageContext;
use crate::core::{
    Ripple, RIPPLE_CLASS, SKILL_CARD_ACTIVE_CLASS, SKILL_CARD_HOVER_CLASS, SKILL_CARD_SELECTOR,
    SOCIAL_LINK_HOVER_CLASS, SOCIAL_LINK_SELECTOR,
};
use crate::dom::{self, Timeout};
use glam::DVec2;
use web_sys as web;

/// Toggle `hover_class` on the nearest `selector` ancestor as the pointer moves over/out.
fn wire_hover(root: &web::Element, selector: &'static str, hover_class: &'static str) {
    dom::add_listener(root, "pointerover", move |ev: web::PointerEvent| {
        if let Some(el) = dom::closest_match(&ev, selector) {
            _ = el.class_list().add_1(hover_class);
        }
    });
    dom::add_listener(root, "pointerout", move |ev: web::PointerEvent| {
        if let Some(el) = dom::closest_match(&ev, selector) {
            _ = el.class_list().remove_1(hover_class);
        }
    });
}

pub fn wire_skill_cards(ctx: &PageContext) {
    let Some(root) = &ctx.skills_root else {
        return;
    };
    wire_hover(root, SKILL_CARD_SELECTOR, SKILL_CARD_HOVER_CLASS);

    dom::add_listener(root, "click", move |ev: web::MouseEvent| {
        let Some(card) = dom::closest_match(&ev, SKILL_CARD_SELECTOR) else {
            return;
        };
        _ = card.class_list().add_1(SKILL_CARD_ACTIVE_CLASS);
        let done = card.clone();
        if let Err(e) = Timeout::schedule(SKILL_CARD_ACTIVE_MS, move || {
            _ = done.class_list().remove_1(SKILL_CARD_ACTIVE_CLASS);
        }) {
            log::error!("[skills] active timer: {:?}", e);
            _ = card.class_list().remove_1(SKILL_CARD_ACTIVE_CLASS);
        }
    });
}

fn spawn_ripple(document: &web::Document, link: &web::Element, ev: &web::MouseEvent) {
    let rect = link.get_bounding_client_rect();
    let ripple = Ripple::at_click(
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
    );
    let Ok(span) = document.create_element("span") else {
        return;
    };
    span.set_class_name(RIPPLE_CLASS);
    let size = format!("{}px", ripple.size);
    dom::set_style(&span, "width", &size);
    dom::set_style(&span, "height", &size);
    dom::set_style(&span, "left", &format!("{}px", ripple.origin.x));
    dom::set_style(&span, "top", &format!("{}px", ripple.origin.y));
    _ = link.append_child(&span);

    let done = span.clone();
    dom::add_once_listener(&span, "animationend", move || done.remove());
}

/// Hover pulse and click ripple on `.social-link`; navigation proceeds as normal.
pub fn wire_social_links(ctx: &PageContext) {
    let Some(root) = &ctx.social_root else {
        return;
    };
    wire_hover(root, SOCIAL_LINK_SELECTOR, SOCIAL_LINK_HOVER_CLASS);

    let document = ctx.document.clone();
    dom::add_listener(root, "click", move |ev: web::MouseEvent| {
        if let Some(link) = dom::closest_match(&ev, SOCIAL_LINK_SELECTOR) {
            spawn_ripple(&document, &link, &ev);
        }
    });
}
