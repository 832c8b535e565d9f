//! Carousel controls: dots, arrows, random and swipe input
//!
//! Every control routes through [`Carousel::dispatch`]; drags are fed to a
//! [`SwipeGestureInterpreter`] first and only its decision reaches the
//! carousel.

use egui::{Color32, Pos2, Rect, Response, RichText, Sense, Stroke, Ui, Vec2};
use of_core::navigation::{Carousel, NavigationCommand, SwipeDecision, SwipeGestureInterpreter};
use tracing::warn;

use crate::icons;
use crate::theme::palette;
use crate::widget_utils::surface_id;

/// Sizes and colors shared by every carousel control
#[derive(Debug, Clone)]
struct ControlsConfig {
    dot_radius: f32,
    dot_spacing: f32,
    inactive_color: Color32,
    arrow_size: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            dot_radius: 5.0,
            dot_spacing: 18.0,
            inactive_color: Color32::from_gray(90),
            arrow_size: 36.0,
        }
    }
}

/// Pointer phase extracted from an egui response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Started(f32),
    Moved(f32),
    Released,
    Idle,
}

impl DragPhase {
    pub fn from_response(response: &Response) -> Self {
        let x = response.interact_pointer_pos().map(|p| p.x);
        if response.drag_started() {
            x.map_or(DragPhase::Idle, DragPhase::Started)
        } else if response.drag_released() {
            DragPhase::Released
        } else if response.dragged() {
            x.map_or(DragPhase::Idle, DragPhase::Moved)
        } else {
            DragPhase::Idle
        }
    }
}

/// Controls for one carousel, holding that surface's gesture state
pub struct CarouselControls {
    swipe: SwipeGestureInterpreter,
    config: ControlsConfig,
}

impl CarouselControls {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeGestureInterpreter::with_threshold(swipe_threshold),
            config: ControlsConfig::default(),
        }
    }

    /// Feed one drag phase. Returns the new index when a swipe completed.
    pub fn feed(&mut self, phase: DragPhase, carousel: &mut Carousel) -> Option<usize> {
        match phase {
            DragPhase::Started(x) => {
                self.swipe.on_gesture_start(x);
                None
            }
            DragPhase::Moved(x) => {
                self.swipe.on_gesture_move(x);
                None
            }
            DragPhase::Released => {
                let decision = self.swipe.on_gesture_end();
                if decision == SwipeDecision::None {
                    return None;
                }
                carousel.apply_swipe(decision)
            }
            DragPhase::Idle => None,
        }
    }

    /// Route drags on `response` through the swipe interpreter
    pub fn track_swipe(&mut self, response: &Response, carousel: &mut Carousel) -> Option<usize> {
        self.feed(DragPhase::from_response(response), carousel)
    }

    /// Make `rect` swipeable without allocating new space, e.g. over a card
    pub fn swipe_area(&mut self, ui: &Ui, rect: Rect, carousel: &mut Carousel) -> Option<usize> {
        let response = ui.interact(rect, surface_id(carousel.surface(), "swipe"), Sense::drag());
        self.track_swipe(&response, carousel)
    }

    /// Row of dots, one per item. Clicking a dot jumps to it.
    pub fn dots(&self, ui: &mut Ui, carousel: &mut Carousel, color_for: impl Fn(usize) -> Color32) -> Option<usize> {
        let count = carousel.len();
        let width = self.config.dot_spacing * count as f32;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, self.config.dot_radius * 4.0), Sense::hover());

        let mut clicked = None;
        for (idx, center) in dot_positions(count, rect.center(), self.config.dot_spacing).into_iter().enumerate() {
            let selected = carousel.is_selected(idx);
            let hit = Rect::from_center_size(center, Vec2::splat(self.config.dot_spacing));
            let response = ui
                .interact(hit, surface_id(carousel.surface(), format!("dot_{}", idx)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            let color = if selected { color_for(idx) } else { self.config.inactive_color };
            let radius = if selected || response.hovered() {
                self.config.dot_radius * 1.4
            } else {
                self.config.dot_radius
            };
            ui.painter().circle_filled(center, radius, color);
            if selected {
                ui.painter().circle_stroke(center, radius + 3.0, Stroke::new(1.0, color.linear_multiply(0.5)));
            }

            if response.clicked() {
                clicked = Some(idx);
            }
        }

        let target = clicked?;
        dispatch_logged(carousel, NavigationCommand::JumpTo(target))
    }

    /// Previous / next buttons
    pub fn arrows(&self, ui: &mut Ui, carousel: &mut Carousel) -> Option<usize> {
        let size = Vec2::splat(self.config.arrow_size);
        let mut command = None;

        ui.horizontal(|ui| {
            if ui.add_sized(size, egui::Button::new(RichText::new(icons::PREVIOUS).size(18.0))).on_hover_text("Previous").clicked() {
                command = Some(NavigationCommand::Previous);
            }
            ui.label(
                RichText::new(format!("{} / {}", carousel.current() + 1, carousel.len()))
                    .color(palette::TEXT_DIM)
                    .monospace(),
            );
            if ui.add_sized(size, egui::Button::new(RichText::new(icons::NEXT).size(18.0))).on_hover_text("Next").clicked() {
                command = Some(NavigationCommand::Next);
            }
        });

        dispatch_logged(carousel, command?)
    }

    /// Button that jumps to a random item
    pub fn random_button(&self, ui: &mut Ui, carousel: &mut Carousel, label: &str) -> Option<usize> {
        let clicked = ui
            .add(egui::Button::new(RichText::new(label).strong()).fill(palette::ORANGE.linear_multiply(0.6)))
            .on_hover_text("Random (R)")
            .clicked();
        if !clicked {
            return None;
        }
        dispatch_logged(carousel, NavigationCommand::Random)
    }
}

/// Dispatch from a widget, logging rather than propagating a rejection
pub fn dispatch_logged(carousel: &mut Carousel, command: NavigationCommand) -> Option<usize> {
    match carousel.dispatch(command) {
        Ok(index) => Some(index),
        Err(e) => {
            warn!("{} control: {}", carousel.surface().label(), e);
            None
        }
    }
}

/// Centers of `count` dots spread evenly around `center`
pub fn dot_positions(count: usize, center: Pos2, spacing: f32) -> Vec<Pos2> {
    let span = spacing * count.saturating_sub(1) as f32;
    let left = center.x - span / 2.0;
    (0..count)
        .map(|i| Pos2::new(left + spacing * i as f32, center.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use of_core::navigation::Surface;

    #[test]
    fn test_dot_positions_centered() {
        let dots = dot_positions(3, Pos2::new(100.0, 20.0), 10.0);
        assert_eq!(dots, vec![Pos2::new(90.0, 20.0), Pos2::new(100.0, 20.0), Pos2::new(110.0, 20.0)]);
        assert!(dot_positions(0, Pos2::ZERO, 10.0).is_empty());
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut carousel = Carousel::new(Surface::Projects, 10).unwrap();
        let mut controls = CarouselControls::new(50.0);

        assert_eq!(controls.feed(DragPhase::Started(300.0), &mut carousel), None);
        assert_eq!(controls.feed(DragPhase::Moved(200.0), &mut carousel), None);
        assert_eq!(controls.feed(DragPhase::Released, &mut carousel), Some(1));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_swipe_right_wraps_back() {
        let mut carousel = Carousel::new(Surface::JourneyCards, 3).unwrap();
        let mut controls = CarouselControls::new(50.0);

        controls.feed(DragPhase::Started(100.0), &mut carousel);
        controls.feed(DragPhase::Moved(180.0), &mut carousel);
        assert_eq!(controls.feed(DragPhase::Released, &mut carousel), Some(2));
    }

    #[test]
    fn test_short_drag_and_stray_release_ignored() {
        let mut carousel = Carousel::new(Surface::Projects, 10).unwrap();
        let mut controls = CarouselControls::new(50.0);

        controls.feed(DragPhase::Started(100.0), &mut carousel);
        controls.feed(DragPhase::Moved(130.0), &mut carousel);
        assert_eq!(controls.feed(DragPhase::Released, &mut carousel), None);
        assert_eq!(controls.feed(DragPhase::Released, &mut carousel), None);
        assert_eq!(controls.feed(DragPhase::Idle, &mut carousel), None);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_swipe_area_without_pointer_keeps_selection() {
        let ctx = egui::Context::default();
        let mut carousel = Carousel::new(Surface::JourneyCards, 3).unwrap();
        let mut controls = CarouselControls::new(50.0);
        let mut changed = Some(usize::MAX);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = Rect::from_min_size(ui.cursor().min, Vec2::new(200.0, 120.0));
                changed = controls.swipe_area(ui, rect, &mut carousel);
            });
        });

        assert_eq!(changed, None);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_dispatch_logged_swallows_out_of_range() {
        let mut carousel = Carousel::new(Surface::Timeline, 3).unwrap();
        assert_eq!(dispatch_logged(&mut carousel, NavigationCommand::JumpTo(9)), None);
        assert_eq!(dispatch_logged(&mut carousel, NavigationCommand::JumpTo(2)), Some(2));
    }
}
