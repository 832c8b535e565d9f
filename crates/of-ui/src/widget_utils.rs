//! Widget id helpers
//!
//! Several sections draw the same kind of control (dots, arrows, swipe
//! surfaces) for different carousels in one frame. Ids are built from the
//! surface and the part name so they never collide.

use egui::Id;
use of_core::navigation::Surface;
use std::fmt::Display;

/// Widget ID builder that joins components with `_`
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Start from a navigable surface
    pub fn surface(surface: Surface) -> Self {
        Self::new(surface.label())
    }

    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    pub fn build(&self) -> String {
        self.components.join("_")
    }

    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Id for one part of a surface's controls, e.g. `surface_id(Surface::Projects, "swipe")`
pub fn surface_id(surface: Surface, part: impl Display) -> Id {
    WidgetId::surface(surface).with(part).id()
}
