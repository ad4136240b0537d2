use crate::constants::LAZY_ROOT_MARGIN;
use crate::context::PageContext;
use crate::core::{DATA_SRC_ATTR, LAZY_CLASS, LAZY_IMAGE_SELECTOR};
use crate::dom;
use crate::observe::{observe_once, OnceOptions};
use web_sys as web;

fn load(img: &web::Element) {
    let Some(src) = img.get_attribute(DATA_SRC_ATTR) else {
        return;
    };
    _ = img.set_attribute("src", &src);
    _ = img.remove_attribute(DATA_SRC_ATTR);
    _ = img.class_list().remove_1(LAZY_CLASS);
}

/// Swap in `data-src` once an image comes within the preload margin.
pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let images = dom::query_all(&ctx.document, LAZY_IMAGE_SELECTOR);
    log::debug!("[lazy] {} images pending", images.len());

    observe_once(
        &images,
        OnceOptions {
            threshold: None,
            root_margin: Some(LAZY_ROOT_MARGIN),
        },
        |img| load(&img),
    )
}
