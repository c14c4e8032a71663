use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
pub fn closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest(selector).ok().flatten()
}

/// `data-index` of the closest `[data-index]` ancestor of the event target.
pub fn closest_index(ev: &web::Event) -> Option<usize> {
    closest(ev, "[data-index]")?
        .get_attribute("data-index")?
        .parse()
        .ok()
}

pub fn set_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Value of an `<input>` or `<select>`, empty for anything else.
pub fn field_value(target: &web::EventTarget) -> String {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = target.dyn_ref::<web::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

/// Page offset of an element's top edge.
pub fn page_top(element: &web::Element) -> f32 {
    let scroll_y = web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    (element.get_bounding_client_rect().top() + scroll_y) as f32
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
