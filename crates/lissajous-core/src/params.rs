//! User-adjustable curve parameters.
//!
//! `Params` is owned by whoever hosts the controls and is handed to the clock
//! and renderer by reference once per frame. Setters enforce the configuration
//! bounds so a frame never observes an out-of-range value.

use crate::constants::*;
use crate::error::ParamError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Parse `#rrggbb` or the short `#rgb` form, as produced by color inputs.
    pub fn from_hex(s: &str) -> Result<Self, ParamError> {
        let err = || ParamError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc == #aabbcc
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(err()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn css_rgb(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub fn css_rgba(&self, alpha: f64) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(MIN_OPACITY, MAX_OPACITY)
        )
    }
}

/// Which way the width wave travels around the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ParamError::InvalidDirection(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    a: f64,
    b: f64,
    points_count: u32,
    duration_ms: f64,
    direction: Direction,
    background: Rgb,
    foreground: Rgb,
    opacity: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            points_count: DEFAULT_POINTS_COUNT,
            duration_ms: DEFAULT_DURATION_MS,
            direction: Direction::default(),
            background: Rgb::from_array(DEFAULT_BACKGROUND),
            foreground: Rgb::from_array(DEFAULT_FOREGROUND),
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl Params {
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn points_count(&self) -> u32 {
        self.points_count
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Horizontal over vertical frequency, unrounded.
    pub fn ratio(&self) -> f64 {
        self.a / self.b
    }

    pub fn set_a(&mut self, a: f64) {
        if a.is_finite() {
            self.a = a.max(MIN_FREQUENCY);
        }
    }

    pub fn set_b(&mut self, b: f64) {
        if b.is_finite() {
            self.b = b.max(MIN_FREQUENCY);
        }
    }

    pub fn set_points_count(&mut self, count: u32) {
        self.points_count = count.max(MIN_POINTS_COUNT);
    }

    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        if duration_ms.is_finite() {
            self.duration_ms = duration_ms.max(MIN_DURATION_MS);
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    pub fn set_foreground(&mut self, color: Rgb) {
        self.foreground = color;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        if !opacity.is_nan() {
            self.opacity = opacity.clamp(MIN_OPACITY, MAX_OPACITY);
        }
    }

    /// Swap background and foreground in a single step.
    pub fn reverse_colors(&mut self) {
        std::mem::swap(&mut self.background, &mut self.foreground);
    }

    /// Unchecked construction, for exercising the renderer with values the
    /// setters would reject (e.g. a zero point count).
    #[cfg(any(test, feature = "test-util"))]
    pub fn with_raw(mut self, a: f64, b: f64, points_count: u32, duration_ms: f64) -> Self {
        self.a = a;
        self.b = b;
        self.points_count = points_count;
        self.duration_ms = duration_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_values() {
        let p = Params::default();
        assert_eq!(p.a(), 2.0);
        assert_eq!(p.b(), 3.0);
        assert_eq!(p.points_count(), 500);
        assert_eq!(p.duration_ms(), 20_000.0);
        assert_eq!(p.direction(), Direction::Right);
        assert_eq!(p.background(), Rgb::new(255, 255, 255));
        assert_eq!(p.foreground(), Rgb::new(0, 0, 0));
        assert_eq!(p.opacity(), 1.0);
    }

    #[test]
    fn setters_clamp_to_configuration_floors() {
        let mut p = Params::default();
        p.set_a(0.0);
        p.set_b(-3.0);
        p.set_points_count(2);
        p.set_duration_ms(10.0);
        p.set_opacity(1.7);
        assert_eq!(p.a(), MIN_FREQUENCY);
        assert_eq!(p.b(), MIN_FREQUENCY);
        assert_eq!(p.points_count(), MIN_POINTS_COUNT);
        assert_eq!(p.duration_ms(), MIN_DURATION_MS);
        assert_eq!(p.opacity(), 1.0);
        p.set_opacity(-0.5);
        assert_eq!(p.opacity(), 0.0);
    }

    #[test]
    fn non_finite_inputs_are_ignored() {
        let mut p = Params::default();
        p.set_a(f64::NAN);
        p.set_duration_ms(f64::INFINITY);
        p.set_opacity(f64::NAN);
        assert_eq!(p, Params::default());
    }

    #[test]
    fn reverse_colors_twice_restores_pair() {
        let mut p = Params::default();
        p.set_foreground(Rgb::new(12, 200, 99));
        let before = (p.background(), p.foreground());
        p.reverse_colors();
        assert_eq!((p.foreground(), p.background()), before);
        p.reverse_colors();
        assert_eq!((p.background(), p.foreground()), before);
    }

    #[test]
    fn ratio_is_unrounded() {
        let p = Params::default();
        assert_eq!(p.ratio(), 2.0 / 3.0);
    }

    #[test]
    fn direction_parses_and_prints() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(Direction::Left.to_string(), "left");
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(ParamError::InvalidDirection(_))
        ));
    }

    #[test]
    fn hex_colors_parse_both_forms() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("#FFF"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
        assert!(Rgb::from_hex("ff8000").is_err());
        assert!(Rgb::from_hex("#ff80").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
    }

    #[test]
    fn css_strings() {
        let c = Rgb::new(10, 20, 30);
        assert_eq!(c.css_rgb(), "rgb(10,20,30)");
        assert_eq!(c.css_rgba(0.5), "rgba(10,20,30,0.5)");
    }
}
