use super::{InputWiring, Listeners};
use crate::dom;
use crate::engine::PointerSample;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(listeners: &mut Listeners, w: &InputWiring) {
    wire_touchmove(listeners, w);
    wire_touchstart(listeners, w);
    wire_touchend(listeners, w);
}

fn first_touch(ev: &web::TouchEvent) -> Option<PointerSample> {
    let touch = ev.touches().get(0)?;
    Some(PointerSample::at(
        touch.client_x() as f64,
        touch.client_y() as f64,
        ev.time_stamp(),
    ))
}

// Non-passive so the page does not scroll while dragging over the grid.
fn wire_touchmove(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("touchmove", Some(false), move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        ev.prevent_default();
        let Some(sample) = first_touch(ev) else {
            return;
        };
        let rect = dom::scene_rect(&w.scene);
        w.effect
            .borrow_mut()
            .pointer_move(sample, rect, instant::now());
    });
}

fn wire_touchstart(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("touchstart", Some(true), move |_ev: web::Event| {
        w.effect.borrow_mut().touch_start(instant::now());
    });
}

fn wire_touchend(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("touchend", Some(true), move |_ev: web::Event| {
        w.effect.borrow_mut().pointer_leave();
    });
}
