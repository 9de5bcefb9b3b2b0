//! Error type shared by every fallible canvas call.

use thiserror::Error;

/// Errors raised by the drawing and interactive surfaces.
///
/// All of these are caller errors: a bad request is rejected before the
/// scene is touched, so a failed call never leaves a half-drawn element.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),
    #[error("Invalid geometry for {kind}: {reason}")]
    InvalidGeometry { kind: &'static str, reason: String },
    #[error("Style key '{key}' cannot be set on a {kind}")]
    ConflictingStyleKey { kind: &'static str, key: &'static str },
    #[error("Invalid tag '{0}'")]
    InvalidTag(String),
    #[error("Tag '{0}' is purely numeric")]
    NumericTag(String),
    #[error("Tag '{0}' is reserved")]
    ReservedTag(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
