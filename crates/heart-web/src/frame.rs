use std::cell::RefCell;
use std::rc::Rc;

use heart_core::{heartbeat_phase, CameraState, ParticleField, SIM_TIME_STEP};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::PointerState;
use crate::render;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub camera: CameraState,
    pub sim_time: f32,
    pub colors: Vec<String>,
}

impl FrameContext {
    /// One animation frame: camera update, then particle advance, then the
    /// paint pass. The order is fixed; the paint pass only reads.
    pub fn frame(&mut self) {
        self.sim_time += SIM_TIME_STEP;
        let beat = heartbeat_phase(self.sim_time);

        let offset = self.pointer.borrow().offset;
        self.camera.update(offset);

        self.field.borrow_mut().advance(beat);

        render::paint(
            &self.ctx,
            &self.canvas,
            &self.field.borrow(),
            &self.camera,
            &self.colors,
        );
    }
}

/// Drive `frame()` from requestAnimationFrame; each tick re-arms the next
/// one. The loop stops when nothing reschedules it.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
