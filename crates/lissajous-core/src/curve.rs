//! Curve sampling and the traveling width wave.
//!
//! For sample `i` of `n` the curve point is
//!
//! ```text
//! t  = i / n
//! x  = cx + rx * sin(a·2πt + φ)
//! y  = cy + ry * cos(b·2πt)
//! ```
//!
//! and its stroke width follows a tent profile over `(a·2πt + φ) mod 2π`.
//! The same phase `φ` moves the curve and sweeps the wave; the two stay
//! coupled.

use crate::clock::FramePhase;
use crate::constants::{HEIGHT, MARGIN_RATIO, MAX_LINE_WIDTH, WIDTH};
use crate::params::{Direction, Params};
use glam::DVec2;
use std::f64::consts::TAU;
use std::iter::Peekable;

/// Center and radii of the ellipse bounding the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub center: DVec2,
    pub radius: DVec2,
}

impl Geometry {
    pub fn new(width: f64, height: f64) -> Self {
        let margin = DVec2::new(width, height) * MARGIN_RATIO;
        Self {
            center: DVec2::new(width, height) * 0.5,
            radius: (DVec2::new(width, height) - 2.0 * margin) * 0.5,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Tent profile in [0, 1] for a position `distance_index` in [0, 1).
///
/// `Right` is thinnest at the middle of the sweep, `Left` is widest there.
#[inline]
pub fn wave(distance_index: f64, direction: Direction) -> f64 {
    let v = (distance_index * 2.0 - 1.0).abs().clamp(0.0, 1.0);
    match direction {
        Direction::Right => v,
        Direction::Left => 1.0 - v,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    pub point: DVec2,
    pub line_width: f64,
}

/// Lazily yields `points_count + 1` samples for the given phase, nothing when
/// the point count is zero. Nothing is buffered, so any count is safe to draw.
pub fn curve_samples(
    params: &Params,
    geometry: &Geometry,
    phase: FramePhase,
) -> impl Iterator<Item = CurveSample> {
    let n = params.points_count();
    let (a, b, direction) = (params.a(), params.b(), params.direction());
    let Geometry { center, radius } = *geometry;
    let d = phase.angle;
    let count = if n == 0 { 0 } else { u64::from(n) + 1 };
    (0..count).map(move |i| {
        let t = i as f64 / n as f64;
        let at = a * TAU * t;
        let bt = b * TAU * t;
        let point = center + radius * DVec2::new((at + d).sin(), bt.cos());

        let distance = (at + d + TAU).rem_euclid(TAU);
        let distance_index = distance / TAU;
        CurveSample {
            point,
            line_width: wave(distance_index, direction) * MAX_LINE_WIDTH,
        }
    })
}

/// Collected form of [`curve_samples`].
pub fn sample_curve(params: &Params, geometry: &Geometry, phase: FramePhase) -> Vec<CurveSample> {
    curve_samples(params, geometry, phase).collect()
}

/// One individually stroked piece of the polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    pub width: f64,
}

/// Turns a sample stream into a closed loop of one segment fewer than there
/// are samples, keeping only the first and previous points.
///
/// Segment `i` runs from sample `i - 1` to sample `i` and takes sample `i`'s
/// width. The last one always returns to sample 0 instead of using the final
/// sample's position, so the loop closes for any frequency and phase.
pub struct ClosedSegments<I: Iterator<Item = CurveSample>> {
    samples: Peekable<I>,
    first: Option<DVec2>,
    previous: DVec2,
}

pub fn closed_segments<I>(samples: I) -> ClosedSegments<I::IntoIter>
where
    I: IntoIterator<Item = CurveSample>,
{
    ClosedSegments {
        samples: samples.into_iter().peekable(),
        first: None,
        previous: DVec2::ZERO,
    }
}

impl<I: Iterator<Item = CurveSample>> Iterator for ClosedSegments<I> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let first = match self.first {
            Some(p) => p,
            None => {
                let p = self.samples.next()?.point;
                self.first = Some(p);
                self.previous = p;
                p
            }
        };
        let sample = self.samples.next()?;
        let to = if self.samples.peek().is_none() {
            first
        } else {
            sample.point
        };
        let segment = Segment {
            from: self.previous,
            to,
            width: sample.line_width,
        };
        self.previous = sample.point;
        Some(segment)
    }
}

/// Collected form of [`closed_segments`] over a slice.
pub fn segments(samples: &[CurveSample]) -> Vec<Segment> {
    closed_segments(samples.iter().copied()).collect()
}
