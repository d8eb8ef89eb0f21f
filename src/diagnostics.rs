use std::{fmt, time::Duration};

use crate::{complex::Complex, escape::Recurrence, viewport::Scale};

/// Read-only view state for on-screen text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagnostics {
    pub scale: Scale,
    pub offset: Complex,
    pub iteration_cap: u32,
    pub recurrence: Recurrence,
    /// Wall-clock time of the last completed pass.
    pub last_pass: Option<Duration>,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scale: {:.6} log10 = {:.6}",
            self.scale.x,
            self.scale.x.log10()
        )?;
        writeln!(
            f,
            "Offset: {:.6},{:.6}",
            self.offset.real, self.offset.imaginary
        )?;
        writeln!(
            f,
            "Maximum iterations: {} ({})",
            self.iteration_cap, self.recurrence
        )?;
        match self.last_pass {
            Some(duration) => write!(
                f,
                "Time taken to generate the iterations: {:.6}",
                duration.as_secs_f64()
            ),
            None => write!(f, "Time taken to generate the iterations: -"),
        }
    }
}
