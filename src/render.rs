use aarohan_core::scene::{project, Camera, Segment, TotemScene};
use smallvec::SmallVec;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{
    BEAM_BLEND, CLEAR_COLOR, DEFAULT_BLEND, MIN_LINE_WIDTH_PX, RING_STEPS,
};

#[derive(Clone, Copy, PartialEq)]
struct Stroke {
    color: &'static str,
    alpha: f32,
    width: f32,
}

impl From<&Segment> for Stroke {
    fn from(s: &Segment) -> Self {
        Self {
            color: s.color,
            alpha: s.alpha,
            width: s.width,
        }
    }
}

/// Paint one frame of the totem onto a 2D canvas.
///
/// Consecutive segments sharing a stroke style are batched into one path.
pub fn draw_totem(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    scene: &TotemScene,
    camera: &Camera,
) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    if width < 1.0 || height < 1.0 {
        return;
    }
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let view_proj = camera.view_projection(width / height);

    ctx.set_global_alpha(1.0);
    _ = ctx.set_global_composite_operation(DEFAULT_BLEND);
    ctx.set_fill_style(&JsValue::from_str(CLEAR_COLOR));
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    _ = ctx.set_global_composite_operation(BEAM_BLEND);
    ctx.set_line_cap("round");

    let segments = scene.segments(RING_STEPS);
    let mut batch: SmallVec<[(f64, f64, f64, f64); 64]> = SmallVec::new();
    let mut current: Option<Stroke> = None;

    for seg in &segments {
        let style = Stroke::from(seg);
        if current != Some(style) {
            if let Some(prev) = current {
                stroke_batch(ctx, prev, dpr, &batch);
            }
            batch.clear();
            current = Some(style);
        }
        let (Some(a), Some(b)) = (
            project(&view_proj, seg.a, width, height),
            project(&view_proj, seg.b, width, height),
        ) else {
            continue;
        };
        batch.push((a.x as f64, a.y as f64, b.x as f64, b.y as f64));
    }
    if let Some(prev) = current {
        stroke_batch(ctx, prev, dpr, &batch);
    }
    _ = ctx.set_global_composite_operation(DEFAULT_BLEND);
}

fn stroke_batch(
    ctx: &web::CanvasRenderingContext2d,
    style: Stroke,
    dpr: f64,
    lines: &[(f64, f64, f64, f64)],
) {
    if lines.is_empty() {
        return;
    }
    ctx.set_global_alpha(style.alpha as f64);
    ctx.set_stroke_style(&JsValue::from_str(style.color));
    ctx.set_line_width((style.width as f64 * dpr).max(MIN_LINE_WIDTH_PX));
    ctx.begin_path();
    for &(ax, ay, bx, by) in lines {
        ctx.move_to(ax, ay);
        ctx.line_to(bx, by);
    }
    ctx.stroke();
}
