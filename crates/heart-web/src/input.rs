use glam::Vec2;
use web_sys as web;

use crate::constants::POINTER_SENSITIVITY;

/// Latest pointer-derived rotation offset, shared between the event
/// handlers and the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub offset: Vec2,
}

/// Map a pointer event to a small rotation offset relative to the viewport
/// center.
#[inline]
pub fn pointer_offset(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let cx = canvas.width() as f32 * 0.5;
    let cy = canvas.height() as f32 * 0.5;
    Vec2::new(
        (ev.client_x() as f32 - cx) * POINTER_SENSITIVITY,
        (ev.client_y() as f32 - cy) * POINTER_SENSITIVITY,
    )
}
