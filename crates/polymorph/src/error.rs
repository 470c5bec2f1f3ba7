//! Configuration errors.

use thiserror::Error;

/// Result alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A [`MorphConfig`](crate::MorphConfig) field holds a value the engine
/// cannot animate with.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("sphere needs at least {min} segments to outnumber the dodecahedron, got {0}", min = crate::MIN_SEGMENTS)]
    InvalidSegments(u32),

    #[error("cycle duration must be finite and positive, got {0}s")]
    InvalidCycleDuration(f32),

    #[error("speed must be finite, got {0}")]
    InvalidSpeed(f32),
}

/// A string did not name any [`ShapeKind`](crate::ShapeKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape {0:?}, expected one of tetrahedron, octahedron, cube, icosahedron, dodecahedron, sphere")]
pub struct ParseShapeError(pub String);
