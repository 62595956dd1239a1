use crate::Rect;
use thiserror::Error;

/// Errors from the world/camera/viewport mapper
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("world rectangle is degenerate: {0:?}")]
    DegenerateWorld(Rect),
    #[error("physical viewport is degenerate: {0:?}")]
    DegenerateViewport(Rect),
}

/// Errors from validating a [`crate::Config`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("too many birds: {count} (max {max})")]
    TooManyBirds { count: usize, max: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid view: {0}")]
    View(#[from] ViewError),
    #[error("unknown sketch {0:?}, expected one of void, pair, flock, world")]
    UnknownKind(String),
}
