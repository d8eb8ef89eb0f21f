use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel at row-major `index`: `(index mod width, index div width)`.
    pub fn pixel_of(&self, index: usize) -> Point {
        debug_assert!(index < self.area());
        let width = self.width as usize;
        Point::new((index % width) as f64, (index / width) as f64)
    }
}

/// A position (or a displacement) in screen-pixel space.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Convert a position in an upscaled window into a grid position.
pub fn window_to_screen(window: Point, upscale: u32) -> Point {
    let factor = f64::from(upscale.max(1));
    Point::new(window.x / factor, window.y / factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_of_is_row_major() {
        let size = Size::new(5, 3);
        assert_eq!(size.pixel_of(0), Point::new(0.0, 0.0));
        assert_eq!(size.pixel_of(4), Point::new(4.0, 0.0));
        assert_eq!(size.pixel_of(5), Point::new(0.0, 1.0));
        assert_eq!(size.pixel_of(14), Point::new(4.0, 2.0));
    }

    #[test]
    fn pixel_of_uses_width_on_non_square_grids() {
        let size = Size::new(8, 2);
        assert_eq!(size.pixel_of(9), Point::new(1.0, 1.0));
    }

    #[test]
    fn window_positions_shrink_by_the_upscale_factor() {
        assert_eq!(
            window_to_screen(Point::new(30.0, 11.0), 2),
            Point::new(15.0, 5.5)
        );
        assert_eq!(
            window_to_screen(Point::new(30.0, 11.0), 0),
            Point::new(30.0, 11.0)
        );
    }
}
