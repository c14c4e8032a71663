use std::cell::RefCell;
use std::rc::Rc;

use aarohan_core::scene::{Camera, TotemScene};
use aarohan_core::OverlayHub;
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_SEC;
use crate::render;

pub struct Canvas2d {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

pub struct FrameContext {
    pub hub: OverlayHub,
    pub scene: TotemScene,
    pub camera: Camera,
    pub pointer: Rc<RefCell<Vec2>>,
    /// `None` when the page has no totem canvas; scrolling still ticks.
    pub surface: Option<Canvas2d>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.hub.tick_scroll(dt_sec);

        let pointer = *self.pointer.borrow();
        self.scene.advance(dt_sec, pointer);

        if let Some(s) = &self.surface {
            render::draw_totem(&s.ctx, &s.canvas, &self.scene, &self.camera);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
