#![cfg(target_arch = "wasm32")]
use aarohan_core::content::dom_ids;
use aarohan_core::scene::{Camera, SceneParams, TotemScene};
use aarohan_core::{OverlayHub, ScrollLockController, Site, SiteParams};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scroll;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// The totem canvas is optional; without it the page still works.
fn totem_surface(document: &web::Document) -> Option<frame::Canvas2d> {
    let canvas = document
        .get_element_by_id(dom_ids::TOTEM_CANVAS)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
        _ => {
            log::warn!("[scene] 2d context unavailable");
            return None;
        }
    };
    wire_canvas_resize(&canvas);
    Some(frame::Canvas2d { canvas, ctx })
}

fn build_hub(window: &web::Window, document: &web::Document) -> OverlayHub {
    let controller = ScrollLockController::new(
        Box::new(scroll::PageLock::new(document.clone())),
        Box::new(scroll::WindowScroller::new(window.clone())),
    );
    let hub = OverlayHub::new(controller);

    let nav_doc = document.clone();
    hub.subscribe(move |any_open| {
        log::info!("[overlay] scroll {}", if any_open { "locked" } else { "unlocked" });
        overlay::set_nav_hidden(&nav_doc, any_open);
    });
    hub
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aarohan-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let hub = build_hub(&window, &document);
    let site = Site::new(hub.clone(), SiteParams::default());

    ui::mount_content(&document);
    let app = app::App::new(site, document.clone());
    {
        let app = app.borrow();
        ui::sync(&app.document, &app.site);
    }

    events::wire_clicks(&document, &app);
    events::wire_booking_form(&document, &app);
    events::wire_global_keydown(app.clone());

    let pointer = Rc::new(RefCell::new(Vec2::ZERO));
    events::wire_pointer_handlers(events::PointerWiring {
        pointer: pointer.clone(),
        hub: hub.clone(),
    });

    let teardown_hub = hub.clone();
    dom::add_listener(&window, "pagehide", move |_: web::Event| {
        teardown_hub.teardown();
    });

    let seed: u64 = rand::random();
    log::info!("[scene] totem seed={seed:#018x}");
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        hub,
        scene: TotemScene::new(SceneParams::default(), seed),
        camera: Camera::default(),
        pointer,
        surface: totem_surface(&document),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
