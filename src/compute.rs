use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    buffer::IterationBuffer,
    error::Error,
    escape::evaluate,
    lanes::{evaluate_lanes, LANES},
    screen::Point,
    viewport::Viewport,
};

/// Chunks handed out per worker by the scalar strategy.
pub const CHUNKS_PER_WORKER: usize = 8;

/// How a grid pass spreads work over the worker pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One point at a time, over contiguous chunks of the flat index range.
    Scalar,
    /// Four points at a time, row by row, with a scalar tail for widths that are not
    /// a multiple of four.
    #[default]
    Vectorized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Scalar => write!(f, "scalar"),
            Strategy::Vectorized => write!(f, "vectorized"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(Strategy::Scalar),
            "vectorized" | "simd" => Ok(Strategy::Vectorized),
            _ => Err(Error::UnknownStrategy(value.to_string())),
        }
    }
}

/**
Chunk length for the scalar strategy.

Escape times are very uneven across a frame: rows through the set run to the cap
while rows outside it finish after a handful of steps. Splitting `total` into exactly
one chunk per worker leaves most workers idle while the one holding the set finishes.
Cutting it into `workers * CHUNKS_PER_WORKER` pieces lets rayon's work stealing
even this out, and the pieces are still large enough that scheduling is noise.

`par_chunks_mut` makes the chunks contiguous and disjoint, with only the last one
allowed to be short, so every index is written by exactly one worker.
*/
pub fn chunk_len(total: usize, workers: usize) -> usize {
    let pieces = workers.max(1) * CHUNKS_PER_WORKER;
    ((total + pieces - 1) / pieces).max(1)
}

/// Fill `buffer` with the escape time of every pixel under `viewport`.
///
/// Returns `false` if `cancel` was raised before every chunk started; the buffer
/// is then partially stale and must not be published.
pub fn evaluate_grid(
    viewport: &Viewport,
    strategy: Strategy,
    buffer: &mut IterationBuffer,
    cancel: &AtomicBool,
) -> bool {
    if buffer.size().area() == 0 {
        return true;
    }

    trace!("begin evaluate_grid ({})", strategy);

    let skipped = AtomicBool::new(false);
    match strategy {
        Strategy::Scalar => scalar_pass(viewport, buffer, cancel, &skipped),
        Strategy::Vectorized => vectorized_pass(viewport, buffer, cancel, &skipped),
    }

    trace!("end evaluate_grid ({})", strategy);
    !skipped.load(Ordering::Relaxed)
}

fn scalar_pass(
    viewport: &Viewport,
    buffer: &mut IterationBuffer,
    cancel: &AtomicBool,
    skipped: &AtomicBool,
) {
    let size = buffer.size();
    let recurrence = viewport.recurrence();
    let cap = viewport.iteration_cap();
    let chunk_len = chunk_len(size.area(), rayon::current_num_threads());

    buffer
        .par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(chunk, counts)| {
            if cancel.load(Ordering::Relaxed) {
                skipped.store(true, Ordering::Relaxed);
                return;
            }
            let start = chunk * chunk_len;
            for (index, count) in (start..).zip(counts.iter_mut()) {
                let world = viewport.screen_to_world(size.pixel_of(index));
                *count = evaluate(world, recurrence, cap);
            }
        });
}

fn vectorized_pass(
    viewport: &Viewport,
    buffer: &mut IterationBuffer,
    cancel: &AtomicBool,
    skipped: &AtomicBool,
) {
    let width = buffer.size().width as usize;
    let recurrence = viewport.recurrence();
    let cap = viewport.iteration_cap();

    buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            if cancel.load(Ordering::Relaxed) {
                skipped.store(true, Ordering::Relaxed);
                return;
            }
            let y = y as f64;
            let world = |x: usize| viewport.screen_to_world(Point::new(x as f64, y));

            let mut groups = row.chunks_exact_mut(LANES);
            let mut x = 0;
            for group in &mut groups {
                let points = std::array::from_fn(|lane| world(x + lane));
                group.copy_from_slice(&evaluate_lanes(points, recurrence, cap));
                x += LANES;
            }
            for (x, count) in (x..).zip(groups.into_remainder()) {
                *count = evaluate(world(x), recurrence, cap);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_len_covers_total() {
        for total in [0, 1, 7, 4096, 1600 * 1600, 1_000_003] {
            for workers in [0, 1, 3, 16, 64] {
                let len = chunk_len(total, workers);
                assert!(len >= 1);
                let pieces = workers.max(1) * CHUNKS_PER_WORKER;
                assert!(len * pieces >= total);
            }
        }
    }

    #[test]
    fn strategy_parses() {
        assert_eq!("scalar".parse::<Strategy>().unwrap(), Strategy::Scalar);
        assert_eq!("SIMD".parse::<Strategy>().unwrap(), Strategy::Vectorized);
        assert!("gpu".parse::<Strategy>().is_err());
    }
}
