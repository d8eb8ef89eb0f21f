use std::env;

use log::{info, warn};
use simd_mandelbrot::{
    config::DEFAULT_SIZE,
    controller::{Command, KEY_ZOOM_IN},
    screen::Point,
    Engine, PassOutcome, Recurrence, Strategy,
};

const DEFAULT_FRAMES: usize = 8;

/// Zoom target, in grid pixels: the seahorse valley on the default view.
const ANCHOR: Point = Point::new(500.0, 760.0);

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);

    let recurrence = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|error| {
            warn!("{}, using mandelbrot", error);
            Recurrence::Mandelbrot
        }),
        None => Recurrence::Mandelbrot,
    };
    let strategy = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|error| {
            warn!("{}, using vectorized", error);
            Strategy::Vectorized
        }),
        None => Strategy::Vectorized,
    };
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    info!("running with set = {}", recurrence);

    let mut engine = Engine::builder(DEFAULT_SIZE)
        .with_recurrence(recurrence)
        .with_strategy(strategy)
        .create()
        .unwrap();

    for frame in 0..frames {
        match engine.frame() {
            PassOutcome::Completed(_) => {
                let escaped = engine
                    .iterations()
                    .iter()
                    .filter(|&&count| count < engine.viewport().iteration_cap())
                    .count();
                info!(
                    "frame {}: {} of {} pixels escaped\n{}",
                    frame,
                    escaped,
                    engine.size().area(),
                    engine.diagnostics()
                );
            }
            outcome => info!("frame {}: {:?}", frame, outcome),
        }

        engine.submit(Command::Zoom {
            factor: KEY_ZOOM_IN,
            anchor: ANCHOR,
        });
        if frame % 4 == 3 {
            engine.submit(Command::AdjustCap(32));
        }
    }
}
