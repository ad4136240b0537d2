use crate::constants::{COUNTER_THRESHOLD, COUNTER_TICK_MS};
use crate::context::PageContext;
use crate::core::{parse_target, CountUp, COUNTED_ATTR, COUNTER_SELECTOR};
use crate::dom;
use crate::observe::{observe_once, OnceOptions};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

async fn count_up(el: web::Element) {
    let text = el.text_content().unwrap_or_default();
    let counter = CountUp::new(parse_target(&text));
    log::debug!(
        "[counter] {} in steps of {}",
        counter.target(),
        counter.step()
    );
    for value in counter {
        dom::sleep(COUNTER_TICK_MS).await;
        el.set_text_content(Some(&value.to_string()));
    }
}

/// Count every `.number` up from zero the first time it is mostly on screen.
pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let counters: Vec<_> = dom::query_all(&ctx.document, COUNTER_SELECTOR)
        .into_iter()
        .filter(|el| !el.has_attribute(COUNTED_ATTR))
        .collect();
    log::debug!("[counter] observing {} counters", counters.len());

    observe_once(
        &counters,
        OnceOptions {
            threshold: Some(COUNTER_THRESHOLD),
            root_margin: None,
        },
        |el| {
            if el.has_attribute(COUNTED_ATTR) {
                return;
            }
            _ = el.set_attribute(COUNTED_ATTR, "");
            spawn_local(count_up(el));
        },
    )
}
