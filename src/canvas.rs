//! `Surface` implementation over a browser 2D canvas context.

use glam::DVec2;
use lissajous_core::{Rect, RenderError, Rgba, StrokeStyle, Surface};
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

#[inline]
fn js_err(op: &str, e: JsValue) -> RenderError {
    RenderError::Surface(format!("{}: {:?}", op, e))
}

impl CanvasSurface {
    /// Wrap a context whose transform already maps logical units to pixels.
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Scale logical coordinates by the device pixel ratio.
    pub fn scale_for_dpr(&self, dpr: f64) -> Result<(), RenderError> {
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| js_err("setTransform", e))
    }

    fn round_rect_path(&self, rect: Rect, radius: f64) -> Result<(), RenderError> {
        let DVec2 { x, y } = rect.origin;
        let DVec2 { x: w, y: h } = rect.size;
        let r = radius.min(w * 0.5).min(h * 0.5).max(0.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r)
            .and_then(|_| ctx.arc_to(x + w, y + h, x, y + h, r))
            .and_then(|_| ctx.arc_to(x, y + h, x, y, r))
            .and_then(|_| ctx.arc_to(x, y, x + w, y, r))
            .map_err(|e| js_err("arcTo", e))?;
        ctx.close_path();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba) -> Result<(), RenderError> {
        self.ctx.set_fill_style_str(&color.css());
        self.round_rect_path(rect, radius)?;
        self.ctx.fill();
        Ok(())
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color.css());
        self.ctx.set_line_join(style.join.as_str());
        self.ctx.set_line_cap(style.cap.as_str());
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64) -> Result<(), RenderError> {
        // A zero width is ignored by the context, which keeps the previous one
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }
}
