//! Easing curves and time-based tweens
//!
//! Tweens are pure functions of elapsed time. Callers keep the clock (usually
//! a per-section `f32` advanced by `stable_dt`) and ask for the value.

use std::f32::consts::PI;

use crate::viewport::MotionPolicy;

/// Easing curves, named after their GSAP counterparts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2InOut,
    Power3Out,
    /// Overshoots by the given factor before settling
    BackOut(f32),
    ElasticOut,
}

impl Ease {
    /// Map progress in `[0, 1]` to eased progress. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Ease::ElasticOut => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let period = 0.3;
                let shift = period / 4.0;
                2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }
}

/// One value animated from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration: duration.max(0.0),
            ease,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Delay plus duration
    pub fn total(&self) -> f32 {
        self.delay + self.duration
    }

    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed: f32) -> f32 {
        let eased = self.ease.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    /// Like [`Tween::value_at`], but reduced motion skips straight to the end
    pub fn sample(&self, elapsed: f32, policy: MotionPolicy) -> f32 {
        match policy {
            MotionPolicy::Reduced => self.to,
            MotionPolicy::Full => self.value_at(elapsed),
        }
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.total()
    }
}

/// Tweens played back to back on one value
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<(f32, Tween)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tween that starts when the previous one ends
    pub fn then(mut self, tween: Tween) -> Self {
        let start = self.duration();
        self.segments.push((start, tween));
        self
    }

    pub fn duration(&self) -> f32 {
        self.segments
            .last()
            .map(|(start, tween)| start + tween.total())
            .unwrap_or(0.0)
    }

    /// `None` for an empty timeline. Before the first segment starts, the
    /// first segment's start value is returned.
    pub fn value_at(&self, elapsed: f32) -> Option<f32> {
        let active = self.segments.iter().rev().find(|(start, _)| elapsed >= *start);
        match active {
            Some((start, tween)) => Some(tween.value_at(elapsed - start)),
            None => self.segments.first().map(|(_, tween)| tween.from),
        }
    }

    pub fn sample(&self, elapsed: f32, policy: MotionPolicy) -> Option<f32> {
        match policy {
            MotionPolicy::Reduced => self.segments.last().map(|(_, tween)| tween.to),
            MotionPolicy::Full => self.value_at(elapsed),
        }
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::BackOut(1.7),
        Ease::ElasticOut,
    ];

    #[test]
    fn test_ease_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-5, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_ease_shapes() {
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-5);
        assert!(Ease::Power3Out.apply(0.5) > 0.9);
        // Back overshoots past the target before settling
        assert!(Ease::BackOut(1.7).apply(0.7) > 1.0);
        assert_eq!(Ease::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_tween_delay_and_progress() {
        let tween = Tween::new(0.0, 10.0, 2.0, Ease::Linear).with_delay(1.0);
        assert_eq!(tween.value_at(0.5), 0.0);
        assert!((tween.value_at(2.0) - 5.0).abs() < 1e-5);
        assert_eq!(tween.value_at(5.0), 10.0);
        assert!(tween.is_finished(3.0));
        assert!(!tween.is_finished(2.9));
    }

    #[test]
    fn test_reduced_motion_jumps_to_end() {
        let tween = Tween::new(100.0, 0.0, 1.2, Ease::Power3Out).with_delay(0.5);
        assert_eq!(tween.sample(0.0, MotionPolicy::Reduced), 0.0);
        assert_eq!(tween.sample(0.0, MotionPolicy::Full), 100.0);
    }

    #[test]
    fn test_timeline_chains_segments() {
        let timeline = Timeline::new()
            .then(Tween::new(10.0, 50.0, 2.0, Ease::Power2InOut))
            .then(Tween::new(50.0, 5.0, 2.0, Ease::Power2InOut));

        assert_eq!(timeline.duration(), 4.0);
        assert_eq!(timeline.value_at(0.0), Some(10.0));
        assert!((timeline.value_at(1.0).unwrap() - 30.0).abs() < 1e-4);
        assert_eq!(timeline.value_at(2.0), Some(50.0));
        assert!((timeline.value_at(3.0).unwrap() - 27.5).abs() < 1e-4);
        assert_eq!(timeline.value_at(10.0), Some(5.0));
        assert_eq!(timeline.sample(0.0, MotionPolicy::Reduced), Some(5.0));
        assert!(Timeline::new().value_at(1.0).is_none());
    }
}
