//! Error types shared by the parameter model and the renderer.

use thiserror::Error;

/// Rejected textual input for a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown direction {0:?}, expected \"left\" or \"right\"")]
    InvalidDirection(String),

    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
}

/// Failure while drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The drawing surface refused an operation
    #[error("surface error: {0}")]
    Surface(String),
}
