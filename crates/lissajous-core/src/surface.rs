//! The drawing surface the renderer targets.
//!
//! Coordinates are logical units; implementations take care of device pixel
//! density. `RecordingSurface` keeps every call for inspection and is what the
//! tests draw into.

use crate::error::RenderError;
use crate::params::Rgb;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub fn css(&self) -> String {
        self.rgb.css_rgba(self.alpha)
    }
}

// The curve is always stroked with round joins and caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Round,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub join: LineJoin,
    pub cap: LineCap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }
}

pub trait Surface {
    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`.
    fn restore(&mut self);
    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba) -> Result<(), RenderError>;
    fn set_stroke_style(&mut self, style: StrokeStyle);
    /// Stroke one open segment with its own width.
    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64) -> Result<(), RenderError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    FillRoundRect { rect: Rect, radius: f64, color: Rgba },
    SetStrokeStyle(StrokeStyle),
    StrokeSegment { from: DVec2, to: DVec2, width: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    depth: usize,
    /// When set, the n-th `stroke_segment` call (0-based) fails
    pub fail_stroke_at: Option<usize>,
    strokes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose `n`-th stroke (0-based) is rejected.
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_stroke_at: Some(n),
            ..Self::default()
        }
    }

    /// Unbalanced `save` count.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeSegment { from, to, width } => Some((*from, *to, *width)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.strokes = 0;
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba) -> Result<(), RenderError> {
        self.ops.push(DrawOp::FillRoundRect {
            rect,
            radius,
            color,
        });
        Ok(())
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.ops.push(DrawOp::SetStrokeStyle(style));
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64) -> Result<(), RenderError> {
        let n = self.strokes;
        self.strokes += 1;
        if self.fail_stroke_at == Some(n) {
            return Err(RenderError::Surface(format!("stroke {n} rejected")));
        }
        self.ops.push(DrawOp::StrokeSegment { from, to, width });
        Ok(())
    }
}
