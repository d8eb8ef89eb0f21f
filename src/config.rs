//! Engine configuration.

use crate::{
    complex::Complex,
    compute::Strategy,
    controller::{CAP_FLOOR, CAP_STEP},
    engine::Engine,
    error::{Error, Result},
    escape::Recurrence,
    screen,
    viewport::Scale,
};

pub const DEFAULT_SIZE: screen::Size = screen::Size::new(1600, 1600);
pub const DEFAULT_SCALE: f64 = 400.0;
pub const DEFAULT_ITERATION_CAP: u32 = 128;
pub const DEFAULT_UPSCALE: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Grid dimensions; fixed for the lifetime of an engine.
    pub size: screen::Size,
    pub scale: (f64, f64),
    /// World position of the top-left pixel. `None` centres world `(0, 0)`.
    pub offset: Option<Complex>,
    pub iteration_cap: u32,
    pub cap_floor: u32,
    pub cap_step: u32,
    pub recurrence: Recurrence,
    pub strategy: Strategy,
    /// Worker pool size. `0` means one per logical CPU.
    pub workers: usize,
    /// Skip a pass when no command changed the view since the last one.
    pub skip_unchanged: bool,
    /// Block size used when replicating counts for display.
    pub upscale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            scale: (DEFAULT_SCALE, DEFAULT_SCALE),
            offset: None,
            iteration_cap: DEFAULT_ITERATION_CAP,
            cap_floor: CAP_FLOOR,
            cap_step: CAP_STEP,
            recurrence: Recurrence::default(),
            strategy: Strategy::default(),
            workers: num_cpus::get(),
            skip_unchanged: true,
            upscale: DEFAULT_UPSCALE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::EmptyGrid {
                width: self.size.width,
                height: self.size.height,
            });
        }
        Scale::new(self.scale.0, self.scale.1)?;
        if self.upscale == 0 {
            return Err(Error::InvalidUpscale);
        }
        Ok(())
    }
}

pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new(size: screen::Size) -> Self {
        Self {
            config: Config {
                size,
                ..Config::default()
            },
        }
    }

    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.config.scale = (x, y);
        self
    }

    pub fn with_offset(mut self, offset: Complex) -> Self {
        self.config.offset = Some(offset);
        self
    }

    pub fn with_iteration_cap(mut self, iteration_cap: u32) -> Self {
        self.config.iteration_cap = iteration_cap;
        self
    }

    pub fn with_cap_limits(mut self, floor: u32, step: u32) -> Self {
        self.config.cap_floor = floor;
        self.config.cap_step = step;
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.config.recurrence = recurrence;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn with_skip_unchanged(mut self, skip_unchanged: bool) -> Self {
        self.config.skip_unchanged = skip_unchanged;
        self
    }

    pub fn with_upscale(mut self, upscale: u32) -> Self {
        self.config.upscale = upscale;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn create(self) -> Result<Engine> {
        Engine::new(self.config)
    }
}

impl From<Config> for Builder {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_centre_a_1600_grid() {
        let config = Config::default();
        assert_eq!(config.size, screen::Size::new(1600, 1600));
        assert_eq!(config.scale, (400.0, 400.0));
        assert_eq!(config.iteration_cap, 128);
        assert_eq!(config.cap_floor, 32);
        assert_eq!(config.recurrence, Recurrence::Mandelbrot);
        assert!(config.workers >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_grid() {
        let builder = Builder::new(screen::Size::new(0, 10));
        assert!(matches!(
            builder.config().validate(),
            Err(Error::EmptyGrid { width: 0, height: 10 })
        ));
    }

    #[test]
    fn rejects_bad_scale_and_upscale() {
        let builder = Builder::new(screen::Size::new(4, 4)).with_scale(-1.0, 1.0);
        assert!(matches!(
            builder.config().validate(),
            Err(Error::InvalidScale { .. })
        ));
        let builder = Builder::new(screen::Size::new(4, 4)).with_upscale(0);
        assert!(matches!(
            builder.config().validate(),
            Err(Error::InvalidUpscale)
        ));
    }
}
