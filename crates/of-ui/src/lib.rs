//! User interface building blocks for the portfolio
//!
//! Theme, viewport classification, frame-driven timers, tweens and the
//! egui controls that drive carousels.

pub mod controls;
pub mod scheduler;
pub mod theme;
pub mod tween;
pub mod typing;
pub mod viewport;
pub mod widget_utils;

pub use controls::{CarouselControls, DragPhase};
pub use scheduler::IntervalScheduler;
pub use theme::{Theme, apply_theme};
pub use tween::{Ease, Timeline, Tween};
pub use typing::TypingEffect;
pub use viewport::{DeviceClass, MotionPolicy, ViewportObserver};
pub use widget_utils::{WidgetId, surface_id};

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const RANDOM: &str = "🎲";
    pub const ROCKET: &str = "🚀";
    pub const LINK: &str = "🔗";
}
