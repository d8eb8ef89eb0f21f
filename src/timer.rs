use std::time::{Duration, Instant};

use log::debug;

/// Wall-clock timer that logs its elapsed time when dropped.
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("{} took {:?}", self.name, self.elapsed());
    }
}
