//! Frame-driven interval timer

/// Accumulates frame deltas and reports whole elapsed intervals.
///
/// The core never owns a timer; the app ticks this once per frame and calls
/// `next()` on a carousel for every interval that fired.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: f32,
    accumulated: f32,
    paused: bool,
}

impl IntervalScheduler {
    /// `interval` is in seconds and is clamped to a small positive minimum
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(0.001),
            accumulated: 0.0,
            paused: false,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Advance by `dt` seconds; returns how many intervals completed
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.paused || !(dt > 0.0) {
            return 0;
        }

        self.accumulated += dt;
        let fired = (self.accumulated / self.interval).floor();
        self.accumulated -= fired * self.interval;
        fired as u32
    }

    /// A paused scheduler ignores ticks but keeps its partial interval
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
