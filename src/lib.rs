//! Escape-time evaluation of the Mandelbrot and Julia sets over a pannable,
//! zoomable viewport, on a worker pool with an optional four-lane kernel.

pub mod buffer;
pub mod complex;
pub mod compute;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod double_buffered;
pub mod engine;
pub mod error;
pub mod escape;
pub mod lanes;
pub mod screen;
pub mod timer;
pub mod viewport;

pub use buffer::IterationBuffer;
pub use complex::Complex;
pub use compute::Strategy;
pub use config::Config;
pub use controller::{Command, Controller};
pub use engine::{Engine, PassOutcome};
pub use error::{Error, Result};
pub use escape::{evaluate, Recurrence};
pub use viewport::{Scale, Viewport};
