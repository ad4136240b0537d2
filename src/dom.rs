use crate::constants::FRAME_FALLBACK_MS;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Current vertical page offset; 0 when unavailable.
#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::error!("bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Nearest ancestor (or self) of the event target matching `selector`.
pub fn closest_match(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let target = ev.target()?;
    let el = target.dyn_ref::<web::Element>()?;
    el.closest(selector).ok().flatten()
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Attach a persistent listener; the closure lives for the rest of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`add_listener`], registered as passive so it can never block scrolling.
pub fn add_passive_listener(target: &web::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Attach a listener that the browser removes after its first call.
pub fn add_once_listener(target: &web::EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &opts,
    );
}

/// One-shot timer with an explicit identity, so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeout {
    id: i32,
}

impl Timeout {
    pub fn schedule(ms: i32, f: impl FnOnce() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::once_into_js(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
            .map_err(js_err)?;
        Ok(Self { id })
    }

    pub fn cancel(self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Run `f` on the next animation frame, or after ~16ms if frames are unavailable.
///
/// Returns false when nothing could be scheduled and `f` will never run.
pub fn request_frame(f: impl FnOnce() + 'static) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let callback = Closure::once_into_js(f);
    if w.request_animation_frame(callback.unchecked_ref()).is_ok() {
        return true;
    }
    w.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        FRAME_FALLBACK_MS,
    )
    .is_ok()
}

/// Run `f` when the browser is idle, or after `fallback_ms` where idle callbacks are missing.
pub fn request_idle(fallback_ms: i32, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else { return };
    let has_idle = js_sys::Reflect::has(&w, &JsValue::from_str("requestIdleCallback"))
        .unwrap_or(false);
    if has_idle {
        let callback = Closure::once_into_js(f);
        _ = w.request_idle_callback(callback.unchecked_ref());
    } else if let Err(e) = Timeout::schedule(fallback_ms, f) {
        log::error!("idle fallback timer: {:?}", e);
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    _ = JsFuture::from(promise).await;
}
