//! Viewport commands.

use log::debug;

use crate::{
    complex::Complex,
    error::{Error, Result},
    escape::Recurrence,
    screen::Point,
    viewport::{Scale, Viewport},
};

/// Smallest iteration cap a command can leave behind.
pub const CAP_FLOOR: u32 = 32;
/// Amount [`Controller::raise_cap`] and [`Controller::lower_cap`] move the cap by.
pub const CAP_STEP: u32 = 32;

pub const WHEEL_ZOOM_IN: f64 = 1.01;
pub const WHEEL_ZOOM_OUT: f64 = 0.99;
pub const KEY_ZOOM_IN: f64 = 1.1;
pub const KEY_ZOOM_OUT: f64 = 0.9;

/// A discrete mutation of the view, queued by input handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Drag by a screen-space displacement.
    Pan(Point),
    /// Multiply the scale by `factor`, keeping the world point under `anchor` fixed.
    Zoom { factor: f64, anchor: Point },
    AdjustCap(i64),
    SelectRecurrence(Recurrence),
}

/// Owns the [`Viewport`] and applies [`Command`]s to it.
///
/// Every command either succeeds or leaves the viewport untouched.
#[derive(Clone, Debug)]
pub struct Controller {
    viewport: Viewport,
    cap_floor: u32,
    cap_step: u32,
}

impl Controller {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_cap_limits(viewport, CAP_FLOOR, CAP_STEP)
    }

    pub fn with_cap_limits(mut viewport: Viewport, cap_floor: u32, cap_step: u32) -> Self {
        let cap_floor = cap_floor.max(1);
        viewport.set_iteration_cap(viewport.iteration_cap().max(cap_floor));
        Self {
            viewport,
            cap_floor,
            cap_step,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cap_floor(&self) -> u32 {
        self.cap_floor
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Pan(delta) => self.pan_screen(delta),
            Command::Zoom { factor, anchor } => self.zoom(factor, anchor),
            Command::AdjustCap(delta) => {
                self.adjust_cap(delta);
                Ok(())
            }
            Command::SelectRecurrence(recurrence) => {
                self.select_recurrence(recurrence);
                Ok(())
            }
        }
    }

    /// `offset <- offset - delta`, with `delta` in world units.
    pub fn pan_world(&mut self, delta: Complex) -> Result<()> {
        let offset = self.viewport.offset() - delta;
        if !delta.is_finite() || !offset.is_finite() {
            return Err(Error::NonFiniteDelta);
        }
        self.viewport.set_offset(offset);
        debug!("pan by {:?}, offset now {:?}", delta, offset);
        Ok(())
    }

    /// Pan by a screen-space displacement, converted through the current scale.
    pub fn pan_screen(&mut self, delta: Point) -> Result<()> {
        if !delta.is_finite() {
            return Err(Error::NonFiniteDelta);
        }
        let scale = self.viewport.scale();
        self.pan_world(Complex::new(delta.x / scale.x, delta.y / scale.y))
    }

    /// Zoom about `anchor`: the world point under it does not move.
    pub fn zoom(&mut self, factor: f64, anchor: Point) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidZoomFactor(factor));
        }
        let old = self.viewport.scale();
        let scale = Scale::new(old.x * factor, old.y * factor)?;

        let before = self.viewport.screen_to_world(anchor);
        let mut zoomed = self.viewport;
        zoomed.set_scale(scale);
        let after = zoomed.screen_to_world(anchor);
        zoomed.set_offset(zoomed.offset() + (before - after));

        self.viewport = zoomed;
        debug!("zoom by {} about {:?}, scale now {:?}", factor, anchor, scale);
        Ok(())
    }

    /// `cap <- max(floor, cap + delta)`.
    pub fn adjust_cap(&mut self, delta: i64) {
        let cap = (i64::from(self.viewport.iteration_cap()) + delta)
            .clamp(i64::from(self.cap_floor), i64::from(u32::MAX));
        self.viewport.set_iteration_cap(cap as u32);
        debug!("iteration cap now {}", cap);
    }

    pub fn raise_cap(&mut self) {
        self.adjust_cap(i64::from(self.cap_step));
    }

    pub fn lower_cap(&mut self) {
        self.adjust_cap(-i64::from(self.cap_step));
    }

    pub fn select_recurrence(&mut self, recurrence: Recurrence) {
        self.viewport.set_recurrence(recurrence);
        debug!("recurrence now {}", recurrence);
    }
}
