// Element ids the frontend expects in the host page, plus the control steps
// the panel snaps values to.

// Drawing surface
pub const CANVAS_ID: &str = "curve-canvas";

// Readouts
pub const RATIO_READOUT_ID: &str = "a-over-b";
pub const PHASE_READOUT_ID: &str = "phase";

// Panel controls
pub const CONTROL_A_ID: &str = "control-a";
pub const CONTROL_B_ID: &str = "control-b";
pub const CONTROL_POINTS_ID: &str = "control-points-count";
pub const CONTROL_DURATION_ID: &str = "control-duration";
pub const CONTROL_DIRECTION_ID: &str = "control-direction";
pub const CONTROL_BACKGROUND_ID: &str = "control-background";
pub const CONTROL_FOREGROUND_ID: &str = "control-foreground";
pub const CONTROL_OPACITY_ID: &str = "control-opacity";
pub const REVERSE_COLORS_ID: &str = "reverse-colors";

// Control steps
pub const FREQUENCY_STEP: f64 = 1.0;
pub const POINTS_STEP: f64 = 1.0;
pub const DURATION_STEP_MS: f64 = 1.0;
pub const OPACITY_STEP: f64 = 0.01;
