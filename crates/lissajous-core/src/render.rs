//! Draws one frame: rounded background, then the curve as individually
//! stroked segments so the width can change along the loop.

use crate::clock::FramePhase;
use crate::constants::{BACKGROUND_CORNER_RADIUS, HEIGHT, WIDTH};
use crate::curve::{closed_segments, curve_samples, Geometry};
use crate::error::RenderError;
use crate::params::Params;
use crate::surface::{LineCap, LineJoin, Rect, Rgba, StrokeStyle, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn { segments: usize },
    /// Background only; the point count left nothing to draw
    CurveSkipped,
}

#[derive(Clone, Copy, Debug)]
pub struct CurveRenderer {
    pub width: f64,
    pub height: f64,
    pub geometry: Geometry,
}

impl Default for CurveRenderer {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl CurveRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            geometry: Geometry::new(width, height),
        }
    }

    pub fn draw_frame<S: Surface>(
        &self,
        surface: &mut S,
        params: &Params,
        phase: FramePhase,
    ) -> Result<FrameOutcome, RenderError> {
        surface.save();
        let result = self
            .draw_background(surface, params)
            .and_then(|_| self.draw_curve(surface, params, phase));
        surface.restore();
        result
    }

    pub fn draw_background<S: Surface>(
        &self,
        surface: &mut S,
        params: &Params,
    ) -> Result<(), RenderError> {
        surface.save();
        let result = surface.fill_round_rect(
            Rect::new(0.0, 0.0, self.width, self.height),
            BACKGROUND_CORNER_RADIUS,
            Rgba::opaque(params.background()),
        );
        surface.restore();
        result
    }

    pub fn draw_curve<S: Surface>(
        &self,
        surface: &mut S,
        params: &Params,
        phase: FramePhase,
    ) -> Result<FrameOutcome, RenderError> {
        let mut segs = closed_segments(curve_samples(params, &self.geometry, phase)).peekable();
        if segs.peek().is_none() {
            log::debug!("curve skipped: points_count={}", params.points_count());
            return Ok(FrameOutcome::CurveSkipped);
        }

        surface.save();
        surface.set_stroke_style(StrokeStyle {
            color: Rgba {
                rgb: params.foreground(),
                alpha: params.opacity(),
            },
            join: LineJoin::Round,
            cap: LineCap::Round,
        });
        let mut drawn = 0;
        let result = segs.try_for_each(|s| -> Result<(), RenderError> {
            surface.stroke_segment(s.from, s.to, s.width)?;
            drawn += 1;
            Ok(())
        });
        surface.restore();
        result.map(|_| FrameOutcome::Drawn { segments: drawn })
    }
}
