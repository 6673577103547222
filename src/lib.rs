#![cfg(target_arch = "wasm32")]
use lissajous_core::{CurveRenderer, Params, HEIGHT, WIDTH};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod controls;
mod dom;
mod frame;
mod panel;
mod readout;

use constants::{CANVAS_ID, PHASE_READOUT_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lissajous-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;

    // Logical coordinates stay 0..WIDTH x 0..HEIGHT at any pixel density
    let dpr = dom::size_canvas_for_dpr(&canvas, WIDTH, HEIGHT);
    let surface = canvas::CanvasSurface::new(dom::context_2d(&canvas)?);
    surface.scale_for_dpr(dpr)?;
    log::info!(
        "[init] canvas {}x{} px (dpr={})",
        canvas.width(),
        canvas.height(),
        dpr
    );

    let params = Rc::new(RefCell::new(Params::default()));
    panel::wire(&document, params.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        params,
        surface,
        CurveRenderer::default(),
        document.get_element_by_id(PHASE_READOUT_ID),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
