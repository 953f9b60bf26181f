use super::{InputWiring, Listeners};
use crate::dom;
use crate::engine::PointerSample;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(listeners: &mut Listeners, w: &InputWiring) {
    wire_pointermove(listeners, w);
    wire_pointerleave(listeners, w);
    wire_click(listeners, w);
}

#[inline]
fn mouse_sample(ev: &web::MouseEvent) -> PointerSample {
    PointerSample::at(ev.client_x() as f64, ev.client_y() as f64, ev.time_stamp())
}

fn wire_pointermove(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("pointermove", None, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = dom::scene_rect(&w.scene);
        w.effect
            .borrow_mut()
            .pointer_move(mouse_sample(ev), rect, instant::now());
    });
}

fn wire_pointerleave(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("pointerleave", None, move |_ev: web::Event| {
        w.effect.borrow_mut().pointer_leave();
    });
}

fn wire_click(listeners: &mut Listeners, w: &InputWiring) {
    let w = w.clone();
    listeners.add("click", None, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = dom::scene_rect(&w.scene);
        if let Some(cell) = w.effect.borrow_mut().click(mouse_sample(ev), rect) {
            log::debug!("[click] ripple from ({},{})", cell.row, cell.col);
        }
    });
}
