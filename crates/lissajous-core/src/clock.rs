//! Maps a monotonically increasing timestamp onto a looping animation phase.

use crate::constants::MIN_DURATION_MS;
use std::f64::consts::{PI, TAU};

/// Position within one animation period.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FramePhase {
    /// Fraction of the period elapsed, in [0, 1)
    pub progress: f64,
    /// `progress` as an angle, in [0, 2π)
    pub angle: f64,
}

/// Duration actually used for phase computation. Non-positive or non-finite
/// values fall back to the minimum so the loop keeps running.
#[inline]
pub fn effective_duration(duration_ms: f64) -> f64 {
    if duration_ms.is_finite() && duration_ms > 0.0 {
        duration_ms
    } else {
        MIN_DURATION_MS
    }
}

impl FramePhase {
    pub fn at(timestamp_ms: f64, duration_ms: f64) -> Self {
        let duration = effective_duration(duration_ms);
        let mut progress = timestamp_ms.rem_euclid(duration) / duration;
        // rem_euclid of a tiny negative value can round up to `duration`
        if !(0.0..1.0).contains(&progress) {
            progress = 0.0;
        }
        let mut angle = progress * TAU;
        if angle >= TAU {
            angle = 0.0;
        }
        Self { progress, angle }
    }

    /// Angle as a multiple of π, e.g. `"1.5000 π"`.
    pub fn readout(&self) -> String {
        format!("{:.4} π", self.angle / PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_period_is_pi() {
        let p = FramePhase::at(10_000.0, 20_000.0);
        assert_eq!(p.progress, 0.5);
        assert!((p.angle - PI).abs() < 1e-12);
        assert_eq!(p.readout(), "1.0000 π");
    }

    #[test]
    fn start_of_period_is_zero() {
        let p = FramePhase::at(40_000.0, 20_000.0);
        assert_eq!(p, FramePhase::default());
        assert_eq!(p.readout(), "0.0000 π");
    }

    #[test]
    fn invalid_duration_uses_minimum() {
        assert_eq!(effective_duration(0.0), MIN_DURATION_MS);
        assert_eq!(effective_duration(-5.0), MIN_DURATION_MS);
        assert_eq!(effective_duration(f64::NAN), MIN_DURATION_MS);
        assert_eq!(effective_duration(2_500.0), 2_500.0);
        let p = FramePhase::at(250.0, 0.0);
        assert_eq!(p.progress, 0.25);
    }

    #[test]
    fn negative_timestamps_wrap() {
        let p = FramePhase::at(-250.0, 1_000.0);
        assert!((p.progress - 0.75).abs() < 1e-12);
        let tiny = FramePhase::at(-1e-300, 1_000.0);
        assert!(tiny.progress < 1.0 && tiny.angle < TAU);
    }

    #[test]
    fn three_quarter_readout() {
        let p = FramePhase::at(15_000.0, 20_000.0);
        assert_eq!(p.readout(), "1.5000 π");
    }
}
