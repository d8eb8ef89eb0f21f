/*!
The per-frame driver.

An [`Engine`] owns the single long-lived [`Viewport`] (through its [`Controller`]),
the queue of pending [`Command`]s, the worker pool and the double-buffered
iteration counts. Each frame drains the queue, then runs one grid pass on the pool.

Commands only touch the viewport between passes and a pass only reads it, so
nothing is locked. A pass writes the back buffer and is published by a swap once
every row is written; readers of [`Engine::iterations`] always see one whole frame.
*/

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use log::{debug, warn};

use crate::{
    buffer::IterationBuffer,
    complex::Complex,
    compute::{evaluate_grid, Strategy},
    config::{self, Config},
    controller::{Command, Controller},
    diagnostics::Diagnostics,
    double_buffered::DoubleBuffered,
    error::Result,
    screen,
    timer::Timer,
    viewport::{Scale, Viewport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    /// A fresh frame was published.
    Completed(Duration),
    /// The pass was cancelled; the previous frame is still published.
    Cancelled,
    /// Nothing changed since the last published frame.
    Skipped,
}

pub struct Engine {
    controller: Controller,
    pending: Vec<Command>,
    iterations: DoubleBuffered<IterationBuffer>,
    strategy: Strategy,
    pool: rayon::ThreadPool,
    cancel: Arc<AtomicBool>,
    skip_unchanged: bool,
    dirty: bool,
    last_pass: Option<Duration>,
    upscale: u32,
}

impl Engine {
    pub fn builder(size: screen::Size) -> config::Builder {
        config::Builder::new(size)
    }

    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let scale = Scale::new(config.scale.0, config.scale.1)?;
        let viewport = match config.offset {
            Some(offset) => Viewport::new(scale, offset, config.iteration_cap, config.recurrence),
            None => Viewport::centred(config.size, scale, config.iteration_cap, config.recurrence),
        };
        let workers = if config.workers == 0 {
            num_cpus::get()
        } else {
            config.workers
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("escape-worker-{}", index))
            .build()?;

        debug!(
            "engine {}x{} with {} workers, {} strategy",
            config.size.width, config.size.height, workers, config.strategy
        );

        Ok(Self {
            controller: Controller::with_cap_limits(viewport, config.cap_floor, config.cap_step),
            pending: Vec::new(),
            iterations: DoubleBuffered::new(IterationBuffer::new(config.size)),
            strategy: config.strategy,
            pool,
            cancel: Arc::new(AtomicBool::new(false)),
            skip_unchanged: config.skip_unchanged,
            dirty: true,
            last_pass: None,
            upscale: config.upscale,
        })
    }

    pub fn size(&self) -> screen::Size {
        self.iterations.front.size()
    }

    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Switching strategy does not dirty the view: both produce the same counts.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn upscale(&self) -> u32 {
        self.upscale
    }

    /// Queue a command for the start of the next frame.
    pub fn submit(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Apply queued commands in order. Rejected commands are logged and dropped.
    ///
    /// Returns the number of commands that were applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        for command in self.pending.drain(..) {
            match self.controller.apply(command) {
                Ok(()) => applied += 1,
                Err(error) => warn!("rejected {:?}: {}", command, error),
            }
        }
        if applied > 0 {
            self.dirty = true;
        }
        applied
    }

    /// Force the next pass even if the view is unchanged.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Raising the flag makes the running (or next) pass stop handing out work.
    ///
    /// The flag is cleared when a pass ends, whether or not it was cancelled. A flag
    /// raised after every chunk already started has no effect.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Drain pending commands, then run one pass.
    pub fn frame(&mut self) -> PassOutcome {
        self.apply_pending();
        self.render()
    }

    /// Run one grid pass over the current viewport.
    pub fn render(&mut self) -> PassOutcome {
        if self.skip_unchanged && !self.dirty {
            return PassOutcome::Skipped;
        }

        let viewport = *self.controller.viewport();
        let strategy = self.strategy;
        let cancel = &self.cancel;
        let back = &mut self.iterations.back;

        let timer = Timer::new("grid pass");
        let completed = self
            .pool
            .install(|| evaluate_grid(&viewport, strategy, back, cancel));
        let elapsed = timer.elapsed();
        self.cancel.store(false, Ordering::Relaxed);

        if completed {
            self.iterations.swap();
            self.dirty = false;
            self.last_pass = Some(elapsed);
            PassOutcome::Completed(elapsed)
        } else {
            debug!("grid pass cancelled after {:?}", elapsed);
            PassOutcome::Cancelled
        }
    }

    /// The last published frame.
    pub fn iterations(&self) -> &IterationBuffer {
        &self.iterations.front
    }

    /// The last published frame, replicated into `upscale`-sized blocks.
    pub fn upscaled_iterations(&self) -> Result<IterationBuffer> {
        self.iterations.front.upscaled(self.upscale)
    }

    /// World point under a position in the upscaled window.
    pub fn window_to_world(&self, window: screen::Point) -> Complex {
        self.viewport()
            .screen_to_world(screen::window_to_screen(window, self.upscale))
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let viewport = self.viewport();
        Diagnostics {
            scale: viewport.scale(),
            offset: viewport.offset(),
            iteration_cap: viewport.iteration_cap(),
            recurrence: viewport.recurrence(),
            last_pass: self.last_pass,
        }
    }
}
