use crate::context::PageContext;
use crate::core::{body_overflow, MOBILE_MENU_BTN_SELECTOR, NAV_OPEN_CLASS};
use crate::dom;
use web_sys as web;

#[inline]
pub fn is_open(nav: &web::Element) -> bool {
    nav.class_list().contains(NAV_OPEN_CLASS)
}

fn lock_body_scroll(body: Option<&web::HtmlElement>, locked: bool) {
    if let Some(body) = body {
        _ = body.style().set_property("overflow", body_overflow(locked));
    }
}

#[inline]
pub fn toggle(nav: &web::Element, body: Option<&web::HtmlElement>) {
    _ = nav.class_list().toggle(NAV_OPEN_CLASS);
    lock_body_scroll(body, is_open(nav));
}

/// Wire `.mobile-menu-btn` to open/close the `nav` panel.
pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let (Some(btn), Some(nav)) = (
        dom::query_one(&ctx.document, MOBILE_MENU_BTN_SELECTOR),
        ctx.nav.clone(),
    ) else {
        log::debug!("[menu] no button or nav");
        return Ok(());
    };
    let body = ctx.body.clone();
    dom::add_listener(&btn, "click", move |_: web::MouseEvent| {
        toggle(&nav, body.as_ref());
    });
    Ok(())
}
