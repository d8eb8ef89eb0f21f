//! Error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Grid must not be empty, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("Scale must be positive and finite, got ({x}, {y})")]
    InvalidScale { x: f64, y: f64 },

    #[error("Zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),

    #[error("Pan delta must be finite")]
    NonFiniteDelta,

    #[error("Upscale factor must be at least 1")]
    InvalidUpscale,

    #[error("Unknown recurrence: {0}")]
    UnknownRecurrence(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
