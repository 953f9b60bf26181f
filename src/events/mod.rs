pub mod pointer;
pub mod touch;

use crate::engine::{CubesEffect, TweenAnimator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedEffect = Rc<RefCell<CubesEffect<TweenAnimator>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub scene: web::HtmlElement,
    pub effect: SharedEffect,
}

/// Listeners attached to the scene, kept so they can be removed again.
pub struct Listeners {
    target: web::HtmlElement,
    entries: Vec<(&'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl Listeners {
    pub fn new(target: web::HtmlElement) -> Self {
        Self {
            target,
            entries: Vec::new(),
        }
    }

    /// Attach `handler` for `event`. `passive` is passed through as the
    /// listener option when given.
    pub fn add(
        &mut self,
        event: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let attached = match passive {
            Some(passive) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(passive);
                self.target
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event,
                        closure.as_ref().unchecked_ref(),
                        &opts,
                    )
            }
            None => self
                .target
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        };
        if let Err(e) = attached {
            log::warn!("[events] could not attach {event}: {e:?}");
            return;
        }
        self.entries.push((event, closure));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every listener and drop its closure. Safe to call twice.
    pub fn detach(&mut self) {
        for (event, closure) in self.entries.drain(..) {
            _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

pub fn wire_input_handlers(w: &InputWiring) -> Listeners {
    let mut listeners = Listeners::new(w.scene.clone());
    pointer::wire(&mut listeners, w);
    touch::wire(&mut listeners, w);
    log::debug!("[events] {} listeners attached", listeners.len());
    listeners
}
