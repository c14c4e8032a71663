use glam::Vec2;

use crate::constants::WHEEL_LINE_HEIGHT_PX;
use crate::site::Action;

#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Escape" | "Esc" => Some(Action::Escape),
        "ArrowRight" => Some(Action::NextDay),
        "ArrowLeft" => Some(Action::PreviousDay),
        _ => None,
    }
}

/// Pointer position in normalised device coordinates: x right, y up, both in [-1, 1].
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Convert a `WheelEvent` delta to pixels. Mode 0 is pixels, 1 lines, 2 pages.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f32) -> f32 {
    let delta = delta_y as f32;
    match delta_mode {
        1 => delta * WHEEL_LINE_HEIGHT_PX,
        2 => delta * page_height,
        _ => delta,
    }
}
