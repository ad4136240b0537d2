use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::context::PageContext;
use crate::core::FrameGate;
use crate::dom::{self, Timeout};
use crate::nav::Navigation;
use crate::parallax;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scroll-driven work, coalesced to one run per animation frame.
pub struct ScrollFrame {
    ctx: Rc<PageContext>,
    nav: Rc<Navigation>,
    gate: Cell<FrameGate>,
    resize_timer: RefCell<Option<Timeout>>,
}

impl ScrollFrame {
    pub fn new(ctx: Rc<PageContext>, nav: Rc<Navigation>) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            nav,
            gate: Cell::new(FrameGate::default()),
            resize_timer: RefCell::new(None),
        })
    }

    fn frame(&self) {
        self.nav.update_active_link();
        parallax::apply(&self.ctx, dom::scroll_y(&self.ctx.window));
    }

    /// Queue a frame unless one is already pending.
    pub fn on_scroll(self: &Rc<Self>) {
        let this = self.clone();
        let mut gate = self.gate.get();
        gate.schedule_with(move || {
            dom::request_frame(move || {
                this.frame();
                let mut gate = this.gate.get();
                gate.complete();
                this.gate.set(gate);
            })
        });
        self.gate.set(gate);
    }

    /// Restart the debounce timer; sections are re-measured once resizing settles.
    pub fn on_resize(self: &Rc<Self>) {
        if let Some(prev) = self.resize_timer.borrow_mut().take() {
            prev.cancel();
        }
        let this = self.clone();
        match Timeout::schedule(RESIZE_DEBOUNCE_MS, move || {
            this.resize_timer.borrow_mut().take();
            this.nav.refresh_sections();
            this.nav.update_active_link();
        }) {
            Ok(t) => *self.resize_timer.borrow_mut() = Some(t),
            Err(e) => log::error!("[resize] debounce timer: {:?}", e),
        }
    }
}

pub fn wire_scroll_and_resize(frame: &Rc<ScrollFrame>) {
    let window = frame.ctx.window.clone();

    let on_scroll = frame.clone();
    dom::add_passive_listener(&window, "scroll", move || on_scroll.on_scroll());

    let on_resize = frame.clone();
    dom::add_passive_listener(&window, "resize", move || on_resize.on_resize());
}
