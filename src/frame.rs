use crate::canvas::CanvasSurface;
use crate::readout;
use lissajous_core::{effective_duration, CurveRenderer, FramePhase, Params, RenderError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameContext {
    pub params: Rc<RefCell<Params>>,
    pub surface: CanvasSurface,
    pub renderer: CurveRenderer,
    pub phase_readout: Option<web::Element>,

    last_error: Option<RenderError>,
    bad_duration_logged: bool,
}

impl FrameContext {
    pub fn new(
        params: Rc<RefCell<Params>>,
        surface: CanvasSurface,
        renderer: CurveRenderer,
        phase_readout: Option<web::Element>,
    ) -> Self {
        Self {
            params,
            surface,
            renderer,
            phase_readout,
            last_error: None,
            bad_duration_logged: false,
        }
    }

    /// Draw one frame for a `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, timestamp_ms: f64) {
        // snapshot so the whole frame sees one consistent set of values
        let params = self.params.borrow().clone();

        let duration = params.duration_ms();
        if effective_duration(duration) != duration {
            if !self.bad_duration_logged {
                log::warn!(
                    "[frame] duration {} ms unusable, animating with {} ms",
                    duration,
                    effective_duration(duration)
                );
                self.bad_duration_logged = true;
            }
        } else {
            self.bad_duration_logged = false;
        }

        let phase = FramePhase::at(timestamp_ms, duration);
        if let Some(el) = &self.phase_readout {
            readout::update_phase(el, &phase);
        }

        match self.renderer.draw_frame(&mut self.surface, &params, phase) {
            Ok(_) => {
                if self.last_error.take().is_some() {
                    log::info!("[frame] rendering recovered");
                }
            }
            Err(e) => {
                // log each distinct failure once; the next frame retries
                if self.last_error.as_ref() != Some(&e) {
                    log::error!("[frame] render error: {}", e);
                }
                self.last_error = Some(e);
            }
        }
    }
}

fn request_frame(tick: &TickClosure) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Run `frame` once per display refresh for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        // Recovery covers `Result` errors from the surface; a trap inside
        // `frame` never returns here, so no further frame is requested.
        frame_ctx.borrow_mut().frame(timestamp);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}
