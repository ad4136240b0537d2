use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intersection options for a one-shot observer.
#[derive(Clone, Copy, Debug)]
pub struct OnceOptions<'a> {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'a str>,
}

/// Observe `targets` and call `on_enter` the first time each one intersects the viewport.
///
/// The target is unobserved before `on_enter` runs, so the effect fires at
/// most once per element for this observer.
pub fn observe_once(
    targets: &[web::Element],
    opts: OnceOptions<'_>,
    mut on_enter: impl FnMut(web::Element) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_enter(target);
            }
        },
    );

    let init = web::IntersectionObserverInit::new();
    if let Some(t) = opts.threshold {
        init.set_threshold(&JsValue::from_f64(t));
    }
    if let Some(m) = opts.root_margin {
        init.set_root_margin(m);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    callback.forget();

    for t in targets {
        observer.observe(t);
    }
    Ok(())
}
