use crate::constants::{ACTIVE_SECTION_LOOKAHEAD_PX, NAV_SCROLL_OFFSET_PX};
use crate::context::PageContext;
use crate::core::{
    active_section, href_fragment, link_is_active, scroll_target_top, SectionSpan,
    NAV_ACTIVE_CLASSES, NAV_LINK_SELECTOR, SECTION_SELECTOR,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Smooth-scroll link handling and active-section highlighting.
pub struct Navigation {
    ctx: Rc<PageContext>,
    sections: RefCell<Vec<web::Element>>,
}

impl Navigation {
    pub fn new(ctx: Rc<PageContext>) -> Rc<Self> {
        let nav = Rc::new(Self {
            ctx,
            sections: RefCell::new(Vec::new()),
        });
        nav.refresh_sections();
        nav
    }

    /// Re-query `section[id]`; layout may have changed.
    pub fn refresh_sections(&self) {
        let found = dom::query_all(&self.ctx.document, SECTION_SELECTOR);
        log::debug!("[nav] {} sections", found.len());
        *self.sections.borrow_mut() = found;
    }

    fn measure(&self, scroll_y: f64) -> Vec<SectionSpan> {
        self.sections
            .borrow()
            .iter()
            .map(|s| {
                let rect = s.get_bounding_client_rect();
                SectionSpan::new(s.id(), rect.top() + scroll_y, rect.height())
            })
            .collect()
    }

    pub fn update_active_link(&self) {
        let y = dom::scroll_y(&self.ctx.window);
        let spans = self.measure(y);
        let current = active_section(&spans, y, ACTIVE_SECTION_LOOKAHEAD_PX).unwrap_or("");

        for link in dom::query_all(&self.ctx.document, NAV_LINK_SELECTOR) {
            let cl = link.class_list();
            let [a, b] = NAV_ACTIVE_CLASSES;
            if link_is_active(link.get_attribute("href").as_deref(), current) {
                _ = cl.add_2(a, b);
            } else {
                _ = cl.remove_2(a, b);
            }
        }
    }

    /// Delegated from the document so links added later are handled too.
    pub fn wire_link_clicks(self: &Rc<Self>) {
        let nav = self.clone();
        dom::add_listener(&self.ctx.document, "click", move |ev: web::MouseEvent| {
            let Some(link) = dom::closest_match(&ev, NAV_LINK_SELECTOR) else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = href_fragment(&href) else {
                return;
            };
            ev.prevent_default();
            nav.scroll_to_section(id);
        });
    }

    fn scroll_to_section(&self, id: &str) {
        let Some(target) = self.ctx.document.get_element_by_id(id) else {
            log::debug!("[nav] no section #{}", id);
            return;
        };
        let rect_top = target.get_bounding_client_rect().top();
        let top = scroll_target_top(rect_top, dom::scroll_y(&self.ctx.window), NAV_SCROLL_OFFSET_PX);

        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.ctx.window.scroll_to_with_scroll_to_options(&opts);
    }
}
