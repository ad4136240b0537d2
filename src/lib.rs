#![cfg(target_arch = "wasm32")]
use crate::context::PageContext;
use crate::core::LOADED_CLASS;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod context;
mod core;
mod counters;
mod dom;
mod events;
mod frame;
mod lazy;
mod menu;
mod nav;
mod observe;
mod parallax;
mod particles;
mod reveal;
mod typewriter;

fn resolve_context() -> Option<PageContext> {
    match PageContext::resolve() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::error!("page context: {:?}", e);
            None
        }
    }
}

/// Run one component initializer; a failure is logged and does not stop the others.
fn run_component(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] init error: {:?}", name, e);
    }
}

fn wire_navigation(ctx: &Rc<PageContext>) {
    let nav = nav::Navigation::new(ctx.clone());
    nav.wire_link_clicks();
    let scroll = frame::ScrollFrame::new(ctx.clone(), nav.clone());
    frame::wire_scroll_and_resize(&scroll);
    nav.update_active_link();
}

/// Wire every component against the current document.
#[wasm_bindgen(js_name = initAll)]
pub fn init_all() {
    let started = Instant::now();
    let Some(ctx) = resolve_context() else {
        return;
    };
    let ctx = Rc::new(ctx);

    wire_navigation(&ctx);
    run_component("reveal", reveal::init(&ctx));
    run_component("particles", particles::init(&ctx));
    run_component("typewriter", typewriter::init(&ctx));
    events::wire_skill_cards(&ctx);
    events::wire_social_links(&ctx);
    run_component("menu", menu::init(&ctx));
    run_component("lazy", lazy::init(&ctx));
    run_component("counter", counters::init(&ctx));

    log::info!("portfolio initialized in {:?}", started.elapsed());
}

/// Refill `#particles` from scratch.
#[wasm_bindgen(js_name = initParticles)]
pub fn init_particles() {
    if let Some(ctx) = resolve_context() {
        run_component("particles", particles::init(&ctx));
    }
}

/// Start another typewriter loop on `.typewriter`.
#[wasm_bindgen(js_name = initTypewriter)]
pub fn init_typewriter() {
    if let Some(ctx) = resolve_context() {
        run_component("typewriter", typewriter::init(&ctx));
    }
}

/// Observe `.number` counters that have not been animated yet.
#[wasm_bindgen(js_name = animateNumbers)]
pub fn animate_numbers() {
    if let Some(ctx) = resolve_context() {
        run_component("counter", counters::init(&ctx));
    }
}

fn mark_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(LOADED_CLASS);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        dom::add_once_listener(&document, "DOMContentLoaded", init_all);
    } else {
        init_all();
    }

    if document.ready_state() == "complete" {
        mark_loaded(&document);
    } else {
        let doc = document.clone();
        dom::add_once_listener(&window, "load", move || mark_loaded(&doc));
    }
    Ok(())
}
