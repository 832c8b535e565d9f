//! Horizontal swipe interpretation
//!
//! A gesture is tracked from the first contact to release. On release the
//! total horizontal displacement is compared against a threshold and turned
//! into at most one [`SwipeDecision`]. Malformed sequences (a move or release
//! without a start) degrade to [`SwipeDecision::None`].

use serde::{Serialize, Deserialize};
use tracing::trace;

/// Minimum horizontal travel, in pointer units, for a swipe to count
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Outcome of a completed gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDecision {
    /// Dragged leftward past the threshold
    Next,
    /// Dragged rightward past the threshold
    Previous,
    /// Too short, never moved, or never started
    None,
}

/// Interpreter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Tracking,
}

/// Turns pointer samples of one gesture into a swipe decision.
///
/// The interpreter knows nothing about list length; callers map the
/// decision onto `next` / `previous` themselves.
#[derive(Debug, Clone)]
pub struct SwipeGestureInterpreter {
    threshold: f32,
    start_x: Option<f32>,
    latest_x: Option<f32>,
}

impl SwipeGestureInterpreter {
    /// Create an interpreter with the default 50-unit threshold
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Create an interpreter with a custom threshold
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
            latest_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> GestureState {
        if self.start_x.is_some() {
            GestureState::Tracking
        } else {
            GestureState::Idle
        }
    }

    /// Begin a gesture at `x`, discarding any unfinished one
    pub fn on_gesture_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.latest_x = None;
    }

    /// Record the latest position. Ignored while idle.
    pub fn on_gesture_move(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.latest_x = Some(x);
        }
    }

    /// Finish the gesture and emit a decision. Always returns to idle.
    pub fn on_gesture_end(&mut self) -> SwipeDecision {
        let start = self.start_x.take();
        let latest = self.latest_x.take();

        let (Some(start), Some(latest)) = (start, latest) else {
            return SwipeDecision::None;
        };

        let distance = start - latest;
        let decision = if distance > self.threshold {
            SwipeDecision::Next
        } else if distance < -self.threshold {
            SwipeDecision::Previous
        } else {
            SwipeDecision::None
        };

        trace!(distance, ?decision, "gesture finished");
        decision
    }
}

impl Default for SwipeGestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
