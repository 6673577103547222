// Parsing of raw control values into parameter values.
// Kept free of web APIs so host-side tests can include it directly.

use lissajous_core::{MAX_OPACITY, MIN_DURATION_MS, MIN_FREQUENCY, MIN_OPACITY, MIN_POINTS_COUNT};

/// Parse a finite number and snap it to a multiple of `step`.
#[inline]
pub fn parse_stepped(raw: &str, step: f64) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    if step > 0.0 {
        Some((v / step).round() * step)
    } else {
        Some(v)
    }
}

pub fn parse_frequency(raw: &str, step: f64) -> Option<f64> {
    parse_stepped(raw, step).map(|v| v.max(MIN_FREQUENCY))
}

pub fn parse_points_count(raw: &str, step: f64) -> Option<u32> {
    parse_stepped(raw, step).map(|v| v.clamp(MIN_POINTS_COUNT as f64, u32::MAX as f64) as u32)
}

pub fn parse_duration(raw: &str, step: f64) -> Option<f64> {
    parse_stepped(raw, step).map(|v| v.max(MIN_DURATION_MS))
}

pub fn parse_opacity(raw: &str, step: f64) -> Option<f64> {
    parse_stepped(raw, step).map(|v| v.clamp(MIN_OPACITY, MAX_OPACITY))
}

/// `a / b` as shown next to the panel, unrounded.
pub fn format_ratio(ratio: f64) -> String {
    format!("{}", ratio)
}
