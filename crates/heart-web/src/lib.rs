#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use heart_core::{CameraState, ParticleField, HEART_SCALE, PARTICLE_COUNT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Fresh heart every visit; tests pin their own seeds.
    let seed: u64 = rand::random();
    let field = Rc::new(RefCell::new(ParticleField::new(
        PARTICLE_COUNT,
        HEART_SCALE,
        seed,
    )));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    events::wire_pointer_tracking(&canvas, pointer.clone());
    events::wire_celebrate_click(&document, field.clone());

    let colors = render::particle_colors(&field.borrow());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        pointer,
        canvas,
        ctx,
        camera: CameraState::default(),
        sim_time: 0.0,
        colors,
    }));
    frame::start_loop(frame_ctx);

    log::info!("heart-web ready");
    Ok(())
}
