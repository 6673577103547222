use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("{} listener error: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => add_listener(&el, "click", handler),
        None => log::warn!("no #{} to attach click handler", element_id),
    }
}

/// Size the backing store to `width x height` logical units times the device
/// pixel ratio while keeping the CSS size fixed. Returns the ratio used.
pub fn size_canvas_for_dpr(canvas: &web::HtmlCanvasElement, width: f64, height: f64) -> f64 {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0);
    canvas.set_width(((width * dpr) as u32).max(1));
    canvas.set_height(((height * dpr) as u32).max(1));
    _ = canvas.set_attribute("style", &format!("width: {}px; height: {}px;", width, height));
    dpr
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext error: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}
