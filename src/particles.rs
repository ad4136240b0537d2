use crate::constants::{IDLE_FALLBACK_MS, PARTICLE_COUNT};
use crate::context::PageContext;
use crate::core::{
    idle_batch, initial_split, replenish_batch, Disconnect, ParticleSpec, WatchSlot,
    PARTICLE_CLASS,
};
use crate::dom::{self, js_err};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live refill observer on `#particles`, with the closure it calls.
struct PoolWatch {
    observer: web::MutationObserver,
    _on_change: Closure<dyn FnMut()>,
}

impl Disconnect for PoolWatch {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

thread_local! {
    static POOL_WATCH: RefCell<WatchSlot<PoolWatch>> = RefCell::new(WatchSlot::default());
}

fn spawn(document: &web::Document, container: &web::Element, spec: &ParticleSpec) {
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::error!("[particles] create_element: {:?}", e);
            return;
        }
    };
    el.set_class_name(PARTICLE_CLASS);
    for (prop, value) in spec.style_props() {
        dom::set_style(&el, prop, &value);
    }
    let el_done = el.clone();
    dom::add_once_listener(&el, "animationend", move || el_done.remove());
    _ = container.append_child(&el);
}

fn spawn_batch(document: &web::Document, container: &web::Element, count: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        spawn(document, container, &ParticleSpec::random(&mut rng));
    }
}

/// Fill `#particles` and keep it topped up as particles finish their animation.
pub fn init(ctx: &PageContext) -> anyhow::Result<()> {
    let Some(container) = ctx.particles.clone() else {
        log::debug!("[particles] no container");
        return Ok(());
    };
    container.set_inner_html("");

    let (now, later) = initial_split(PARTICLE_COUNT);
    spawn_batch(&ctx.document, &container, now);
    {
        let document = ctx.document.clone();
        let container = container.clone();
        dom::request_idle(IDLE_FALLBACK_MS, move || {
            let live = container.child_element_count() as usize;
            spawn_batch(&document, &container, idle_batch(PARTICLE_COUNT, live, later))
        });
    }

    let document = ctx.document.clone();
    let watched = container.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let live = watched.child_element_count() as usize;
        let mut rng = rand::thread_rng();
        for spec in replenish_batch(&mut rng, PARTICLE_COUNT, live) {
            spawn(&document, &watched, &spec);
        }
    });
    let observer = web::MutationObserver::new(on_change.as_ref().unchecked_ref()).map_err(js_err)?;

    let init = web::MutationObserverInit::new();
    init.set_child_list(true);
    observer
        .observe_with_options(&container, &init)
        .map_err(js_err)?;

    POOL_WATCH.with(|slot| {
        slot.borrow_mut().install(PoolWatch {
            observer,
            _on_change: on_change,
        })
    });

    log::debug!("[particles] pool target {}", PARTICLE_COUNT);
    Ok(())
}
