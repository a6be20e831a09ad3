use std::cell::RefCell;
use std::rc::Rc;

use heart_core::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::YES_BUTTON_ID;
use crate::dom;
use crate::input::{self, PointerState};

/// Track pointer motion over the whole window; the offset feeds the camera
/// on the next frame.
pub fn wire_pointer_tracking(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.borrow_mut().offset = input::pointer_offset(&ev, &canvas);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// The "Yes" button is the only external input into the simulation: one
/// click flips the field into its terminal celebration state. Overlays,
/// confetti layers and audio are the page's business, not ours.
pub fn wire_celebrate_click(document: &web::Document, field: Rc<RefCell<ParticleField>>) {
    dom::add_click_listener(document, YES_BUTTON_ID, move || {
        field.borrow_mut().trigger_celebration();
    });
}
