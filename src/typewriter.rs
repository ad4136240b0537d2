use crate::constants::{TYPEWRITER_PHRASES, TYPEWRITER_START_DELAY_MS};
use crate::context::PageContext;
use crate::core::typewriter::{claim, render, Display};
use crate::core::{Typewriter, TYPING_ATTR};
use crate::dom;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

impl Display for web::Element {
    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn is_claimed(&self) -> bool {
        self.has_attribute(TYPING_ATTR)
    }

    fn mark_claimed(&self) {
        _ = self.set_attribute(TYPING_ATTR, "");
    }
}

async fn run(el: web::Element, mut tw: Typewriter) {
    dom::sleep(TYPEWRITER_START_DELAY_MS).await;
    loop {
        let step = tw.step();
        render(&el, &step.text);
        dom::sleep(step.delay_ms).await;
    }
}

/// Start the type/delete loop on `.typewriter`. It never stops once started,
/// and a second start on the same element is ignored.
pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let Some(el) = ctx.typewriter.clone() else {
        log::debug!("[typewriter] no element");
        return Ok(());
    };
    let Some(tw) = Typewriter::new(TYPEWRITER_PHRASES) else {
        return Ok(());
    };
    if !claim(&el) {
        log::debug!("[typewriter] already running");
        return Ok(());
    }
    spawn_local(run(el, tw));
    Ok(())
}
