use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A running requestAnimationFrame loop. Holds the recurring closure and
/// the id of the outstanding request so both can be released on `stop`.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    /// Cancel the outstanding frame request and drop the closure. Safe to
    /// call more than once.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

/// Call `on_frame` with the frame timestamp (ms) every animation frame
/// until the returned loop is stopped.
pub fn start_loop(mut on_frame: impl FnMut(f64) + 'static) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_next = tick.clone();
    let raf_next = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        raf_next.set(None);
        on_frame(now_ms);
        // stop() clears the slot; nothing is re-requested after that
        if let Some(next) = tick_next.borrow().as_ref() {
            raf_next.set(request_frame(next));
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(first) = tick.borrow().as_ref() {
        raf_id.set(request_frame(first));
    }
    FrameLoop { raf_id, tick }
}
