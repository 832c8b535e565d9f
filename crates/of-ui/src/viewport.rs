//! Viewport classification
//!
//! The window width is observed here, once per frame, and turned into a
//! [`DeviceClass`]. Navigation state never reads it; views receive the class
//! and the derived [`MotionPolicy`] as plain values.

use serde::{Serialize, Deserialize};
use tracing::debug;

pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// How much animation the presentation layer may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPolicy {
    Full,
    /// Entrance animations resolve immediately
    Reduced,
}

impl MotionPolicy {
    /// Mobile devices get reduced motion unless explicitly allowed
    pub fn for_device(device: DeviceClass, animate_on_mobile: bool) -> Self {
        match device {
            DeviceClass::Mobile if !animate_on_mobile => MotionPolicy::Reduced,
            _ => MotionPolicy::Full,
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPolicy::Reduced
    }
}

/// Tracks the current window width and its device class
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    breakpoint: f32,
    width: f32,
    class: DeviceClass,
}

impl ViewportObserver {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            width: breakpoint,
            class: DeviceClass::Desktop,
        }
    }

    pub fn classify(&self, width: f32) -> DeviceClass {
        if width < self.breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Record a new width. Returns true when the device class changed.
    pub fn update(&mut self, width: f32) -> bool {
        self.width = width;
        let class = self.classify(width);
        if class == self.class {
            return false;
        }

        debug!("Viewport {:.0}px: {:?} -> {:?}", width, self.class, class);
        self.class = class;
        true
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn device(&self) -> DeviceClass {
        self.class
    }

    pub fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        let observer = ViewportObserver::default();
        assert_eq!(observer.classify(767.9), DeviceClass::Mobile);
        assert_eq!(observer.classify(768.0), DeviceClass::Desktop);
        assert_eq!(observer.classify(1920.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut observer = ViewportObserver::default();
        assert!(!observer.update(1200.0));
        assert!(observer.update(400.0));
        assert!(observer.is_mobile());
        assert!(!observer.update(500.0));
        assert_eq!(observer.width(), 500.0);
        assert!(observer.update(900.0));
        assert_eq!(observer.device(), DeviceClass::Desktop);
    }

    #[test]
    fn test_motion_policy() {
        assert_eq!(MotionPolicy::for_device(DeviceClass::Mobile, false), MotionPolicy::Reduced);
        assert_eq!(MotionPolicy::for_device(DeviceClass::Mobile, true), MotionPolicy::Full);
        assert_eq!(MotionPolicy::for_device(DeviceClass::Desktop, false), MotionPolicy::Full);
    }
}
