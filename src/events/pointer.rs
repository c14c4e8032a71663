use std::cell::RefCell;
use std::rc::Rc;

use aarohan_core::input::{pointer_ndc, wheel_delta_px};
use aarohan_core::OverlayHub;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<Vec2>>,
    pub hub: OverlayHub,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_wheel(&w);
}

fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn wire_pointermove(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let pointer = w.pointer.clone();
    let wnd = window.clone();
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        let (width, height) = viewport_size(&wnd);
        *pointer.borrow_mut() = pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, width, height);
    });
}

// Registered non-passive so the default jump can be replaced by the eased scroll.
fn wire_wheel(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let hub = w.hub.clone();
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // while a modal is up the page is frozen and modal bodies scroll natively
        if hub.any_open() || ev.ctrl_key() {
            return;
        }
        let (_, page_height) = viewport_size(&wnd);
        ev.prevent_default();
        hub.wheel(wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_height));
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
