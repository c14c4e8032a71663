use aarohan_core::{ScrollDriver, SmoothScroll, ViewportLock};
use web_sys as web;

/// Suppresses page scrolling with `overflow: hidden` on `<html>` and `<body>`.
pub struct PageLock {
    document: web::Document,
    frozen_at: Option<f64>,
}

impl PageLock {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            frozen_at: None,
        }
    }

    fn set_overflow(&self, value: &str) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("overflow", value);
        }
        if let Some(html) = self
            .document
            .document_element()
            .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web::HtmlElement>(el).ok())
        {
            _ = html.style().set_property("overflow", value);
        }
    }
}

impl ViewportLock for PageLock {
    fn freeze(&mut self) {
        self.frozen_at = web::window().and_then(|w| w.scroll_y().ok());
        self.set_overflow("hidden");
    }

    fn release(&mut self) {
        self.set_overflow("");
        // some mobile browsers jump to the top when overflow flips back
        if let (Some(y), Some(w)) = (self.frozen_at.take(), web::window()) {
            if w.scroll_y().map(|now| (now - y).abs() > 1.0).unwrap_or(false) {
                w.scroll_to_with_x_and_y(0.0, y);
            }
        }
    }
}

/// Drives `window` scrolling from a `SmoothScroll`.
pub struct WindowScroller {
    window: web::Window,
    inner: SmoothScroll,
}

impl WindowScroller {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            inner: SmoothScroll::default(),
        }
    }

    fn refresh(&mut self) {
        let Some(doc_el) = self.window.document().and_then(|d| d.document_element()) else {
            return;
        };
        let viewport = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.inner
            .set_limit((doc_el.scroll_height() as f64 - viewport).max(0.0) as f32);
        if let Ok(y) = self.window.scroll_y() {
            self.inner.sync(y as f32);
        }
    }
}

impl ScrollDriver for WindowScroller {
    fn start(&mut self) {
        self.refresh();
        self.inner.start();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }

    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    fn tick(&mut self, dt_sec: f32) -> Option<f32> {
        if !self.inner.is_running() {
            return None;
        }
        self.refresh();
        let y = self.inner.tick(dt_sec)?;
        self.window.scroll_to_with_x_and_y(0.0, y as f64);
        Some(y)
    }

    fn wheel(&mut self, delta_px: f32) {
        self.refresh();
        self.inner.wheel(delta_px);
    }

    fn scroll_to(&mut self, target_px: f32, immediate: bool) {
        self.refresh();
        self.inner.scroll_to(target_px, immediate);
        if immediate {
            self.window
                .scroll_to_with_x_and_y(0.0, self.inner.position() as f64);
        }
    }
}
