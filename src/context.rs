use crate::core::{
    HERO_BG_SELECTOR, NAV_SELECTOR, PARTICLES_ID, SKILLS_SELECTOR, SOCIAL_LINKS_SELECTOR,
    TYPEWRITER_SELECTOR,
};
use crate::dom;
use anyhow::anyhow;
use web_sys as web;

/// DOM handles resolved once at startup and shared by every component.
///
/// Any of the optional handles may be missing on a given page variant; the
/// component that needs it does nothing in that case.
#[derive(Clone)]
pub struct PageContext {
    pub window: web::Window,
    pub document: web::Document,
    pub body: Option<web::HtmlElement>,
    pub nav: Option<web::Element>,
    pub hero_bg: Option<web::Element>,
    pub particles: Option<web::Element>,
    pub typewriter: Option<web::Element>,
    /// Delegation root for skill cards; the document element when `.skills` is absent.
    pub skills_root: Option<web::Element>,
    /// Delegation root for social links; the document element when `.social-links` is absent.
    pub social_root: Option<web::Element>,
}

impl PageContext {
    pub fn resolve() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;

        let delegation_root = |selector: &str| {
            dom::query_one(&document, selector).or_else(|| document.document_element())
        };
        let skills_root = delegation_root(SKILLS_SELECTOR);
        let social_root = delegation_root(SOCIAL_LINKS_SELECTOR);

        Ok(Self {
            body: document.body(),
            nav: dom::query_one(&document, NAV_SELECTOR),
            hero_bg: dom::query_one(&document, HERO_BG_SELECTOR),
            particles: document.get_element_by_id(PARTICLES_ID),
            typewriter: dom::query_one(&document, TYPEWRITER_SELECTOR),
            skills_root,
            social_root,
            window,
            document,
        })
    }
}
