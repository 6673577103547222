// Shared layout and configuration bounds used by every frontend.

// Logical drawing area, independent of device pixel density
pub const WIDTH: f64 = 500.0;
pub const HEIGHT: f64 = 500.0;
pub const MARGIN_RATIO: f64 = 0.1; // fraction of each dimension kept clear on both sides

// Stroke and background styling
pub const MAX_LINE_WIDTH: f64 = 20.0; // width at the crest of the wave
pub const BACKGROUND_CORNER_RADIUS: f64 = 8.0;

// Configuration floors
pub const MIN_FREQUENCY: f64 = 1.0;
pub const MIN_POINTS_COUNT: u32 = 10;
pub const MIN_DURATION_MS: f64 = 1_000.0;
pub const MIN_OPACITY: f64 = 0.0;
pub const MAX_OPACITY: f64 = 1.0;

// Startup values
pub const DEFAULT_A: f64 = 2.0; // horizontal frequency
pub const DEFAULT_B: f64 = 3.0; // vertical frequency
pub const DEFAULT_POINTS_COUNT: u32 = 500;
pub const DEFAULT_DURATION_MS: f64 = 20_000.0;
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];
pub const DEFAULT_FOREGROUND: [u8; 3] = [0, 0, 0];
pub const DEFAULT_OPACITY: f64 = 1.0;
