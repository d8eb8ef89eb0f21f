use std::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// A point on the complex plane, in IEEE double precision.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// `z * z`, written out so that it rounds the same way as the lane kernel.
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imaginary * self.imaginary,
            imaginary: 2.0 * self.real * self.imaginary,
        }
    }

    pub fn norm_sq(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imaginary: self.imaginary - other.imaginary,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imaginary * other.imaginary,
            imaginary: self.real * other.imaginary + self.imaginary * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Complex;

    #[test]
    fn square_agrees_with_multiplication() {
        let z = Complex::new(0.25, -1.5);
        assert_eq!(z.square(), z * z);
    }

    #[test]
    fn multiplication_follows_the_product_rule() {
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, -1.0);
        assert_eq!(product, Complex::new(5.0, 5.0));
    }

    #[test]
    fn norm_sq_of_three_four() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sq(), 25.0);
    }

    #[test]
    fn pod_layout_is_two_doubles() {
        let z = Complex::new(-0.8, 0.156);
        let raw: [f64; 2] = bytemuck::cast(z);
        assert_eq!(raw, [-0.8, 0.156]);
    }
}
