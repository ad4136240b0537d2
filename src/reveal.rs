use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::context::PageContext;
use crate::core::{REVEAL_ACTIVE_CLASS, REVEAL_SELECTOR};
use crate::dom;
use crate::observe::{observe_once, OnceOptions};

pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let targets: Vec<_> = dom::query_all(&ctx.document, REVEAL_SELECTOR)
        .into_iter()
        .filter(|el| !el.class_list().contains(REVEAL_ACTIVE_CLASS))
        .collect();
    log::debug!("[reveal] observing {} elements", targets.len());

    observe_once(
        &targets,
        OnceOptions {
            threshold: Some(REVEAL_THRESHOLD),
            root_margin: Some(REVEAL_ROOT_MARGIN),
        },
        |el| {
            _ = el.class_list().add_1(REVEAL_ACTIVE_CLASS);
        },
    )
}
