//! Escape-time evaluation of a single point.

use std::{fmt, str::FromStr};

use crate::{complex::Complex, error::Error};

/// Squared escape radius. Once `|z| >= 2` both recurrences diverge.
pub const ESCAPE_NORM_SQ: f64 = 4.0;

/// The `c` used by [`Recurrence::Julia`].
pub const JULIA_CONSTANT: Complex = Complex::new(-0.8, 0.156);

/// The two supported update rules, both `z <- z² + c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// `z₀ = 0`, `c = p`.
    #[default]
    Mandelbrot,
    /// `z₀ = p`, `c = JULIA_CONSTANT`.
    Julia,
}

impl Recurrence {
    /// Initial `(z, c)` for the world point `point`.
    pub fn seed(self, point: Complex) -> (Complex, Complex) {
        match self {
            Recurrence::Mandelbrot => (Complex::ZERO, point),
            Recurrence::Julia => (point, JULIA_CONSTANT),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Mandelbrot => write!(f, "mandelbrot"),
            Recurrence::Julia => write!(f, "julia"),
        }
    }
}

impl FromStr for Recurrence {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "0" | "mandelbrot" => Ok(Recurrence::Mandelbrot),
            "1" | "julia" => Ok(Recurrence::Julia),
            _ => Err(Error::UnknownRecurrence(value.to_string())),
        }
    }
}

/**
Number of completed iterations before `point` escapes, at most `cap`.

Each step applies `z <- z² + c` and then tests `|z|² >= 4`. A point that escapes
on the first update reports 0; a point that survives `cap` updates reports `cap`.
*/
pub fn evaluate(point: Complex, recurrence: Recurrence, cap: u32) -> u32 {
    let (mut z, c) = recurrence.seed(point);
    let mut iterations = 0;
    while iterations < cap {
        z = z.square() + c;
        // Also stops on a NaN norm, which overflowing seeds produce.
        if !(z.norm_sq() < ESCAPE_NORM_SQ) {
            break;
        }
        iterations += 1;
    }
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(evaluate(Complex::ZERO, Recurrence::Mandelbrot, 128), 128);
    }

    #[test]
    fn far_point_escapes_immediately() {
        for cap in [1, 2, 32, 1000] {
            assert_eq!(evaluate(Complex::new(2.0, 2.0), Recurrence::Mandelbrot, cap), 0);
        }
    }

    #[test]
    fn escape_on_the_radius_counts_as_escaped() {
        // z1 = 1, z2 = 2 with |z2|² == 4 exactly.
        assert_eq!(evaluate(Complex::new(1.0, 0.0), Recurrence::Mandelbrot, 128), 1);
        assert_eq!(evaluate(Complex::new(-2.0, 0.0), Recurrence::Mandelbrot, 128), 0);
    }

    #[test]
    fn known_mandelbrot_counts() {
        assert_eq!(evaluate(Complex::new(0.3, 0.0), Recurrence::Mandelbrot, 128), 11);
        assert_eq!(evaluate(Complex::new(0.5, 0.5), Recurrence::Mandelbrot, 128), 4);
        assert_eq!(evaluate(Complex::new(-0.75, 0.1), Recurrence::Mandelbrot, 128), 32);
        assert_eq!(evaluate(Complex::new(0.0, 1.0), Recurrence::Mandelbrot, 128), 128);
    }

    #[test]
    fn julia_constant_golden_count() {
        assert_eq!(evaluate(JULIA_CONSTANT, Recurrence::Julia, 128), 128);
        assert_eq!(evaluate(JULIA_CONSTANT, Recurrence::Julia, 256), 250);
        assert_eq!(evaluate(JULIA_CONSTANT, Recurrence::Julia, 1000), 250);
    }

    #[test]
    fn julia_starts_from_the_point() {
        assert_eq!(evaluate(Complex::new(1.5, 0.0), Recurrence::Julia, 128), 3);
    }

    #[test]
    fn overflowing_seed_escapes_immediately() {
        // z² has real part inf - inf.
        let point = Complex::new(1e200, 1e200);
        assert_eq!(evaluate(point, Recurrence::Julia, 128), 0);
    }

    #[test]
    fn zero_cap_reports_zero() {
        assert_eq!(evaluate(Complex::ZERO, Recurrence::Mandelbrot, 0), 0);
    }

    #[test]
    fn parses_numeric_and_named_selectors() {
        assert_eq!("0".parse::<Recurrence>().unwrap(), Recurrence::Mandelbrot);
        assert_eq!("1".parse::<Recurrence>().unwrap(), Recurrence::Julia);
        assert_eq!("Julia".parse::<Recurrence>().unwrap(), Recurrence::Julia);
        assert!("burning-ship".parse::<Recurrence>().is_err());
    }
}
