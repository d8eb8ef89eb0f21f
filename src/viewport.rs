//! View state and the screen/world coordinate mapping.

use crate::{
    complex::Complex,
    error::{Error, Result},
    escape::Recurrence,
    screen::{self, Point},
};

/// Pixels per world unit along each axis. Always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let scale = Self { x, y };
        if scale.is_valid() {
            Ok(scale)
        } else {
            Err(Error::InvalidScale { x, y })
        }
    }

    pub fn uniform(value: f64) -> Result<Self> {
        Self::new(value, value)
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    scale: Scale,
    offset: Complex,
    iteration_cap: u32,
    recurrence: Recurrence,
}

impl Viewport {
    pub fn new(scale: Scale, offset: Complex, iteration_cap: u32, recurrence: Recurrence) -> Self {
        Self {
            scale,
            offset,
            iteration_cap,
            recurrence,
        }
    }

    /// A viewport that puts world `(0, 0)` at the centre of a grid of `size`.
    pub fn centred(
        size: screen::Size,
        scale: Scale,
        iteration_cap: u32,
        recurrence: Recurrence,
    ) -> Self {
        let offset = Complex::new(
            -(f64::from(size.width) / 2.0) / scale.x,
            -(f64::from(size.height) / 2.0) / scale.y,
        );
        Self::new(scale, offset, iteration_cap, recurrence)
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// World position of the screen's top-left corner.
    pub fn offset(&self) -> Complex {
        self.offset
    }

    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    pub fn screen_to_world(&self, screen: Point) -> Complex {
        Complex::new(
            screen.x / self.scale.x + self.offset.real,
            screen.y / self.scale.y + self.offset.imaginary,
        )
    }

    pub fn world_to_screen(&self, world: Complex) -> Point {
        Point::new(
            (world.real - self.offset.real) * self.scale.x,
            (world.imaginary - self.offset.imaginary) * self.scale.y,
        )
    }

    pub(crate) fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    pub(crate) fn set_offset(&mut self, offset: Complex) {
        self.offset = offset;
    }

    pub(crate) fn set_iteration_cap(&mut self, iteration_cap: u32) {
        self.iteration_cap = iteration_cap;
    }

    pub(crate) fn set_recurrence(&mut self, recurrence: Recurrence) {
        self.recurrence = recurrence;
    }
}
