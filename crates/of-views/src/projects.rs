//! Projects: a solar system where every planet is a project
//!
//! Planets sit on concentric orbits around a central sun. Clicking a planet,
//! a progress dot or an arrow moves the projects carousel; the card beside
//! the scene shows the selected project.

use std::f32::consts::TAU;
use std::rc::Rc;

use egui::{Align2, Color32, FontId, Frame, Margin, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};
use glam::Vec3;
use tracing::info;

use of_content::{Project, SiteConfig, PROJECTS};
use of_core::navigation::{Carousel, NavigationCommand, SelectionSubscriber, Surface};
use of_core::NavigationError;
use of_ui::controls::dispatch_logged;
use of_ui::theme::{palette, rgb};
use of_ui::{icons, CarouselControls, DeviceClass, Ease, MotionPolicy, Tween};

use crate::mascots::Sun;
use crate::scene::{Camera, Starfield, StarfieldConfig};
use crate::{Section, SectionId, SiteContext};

/// Planet radii before device scaling, cycled when there are more projects
pub const BASE_SIZES: [f32; 10] = [0.4, 0.35, 0.45, 0.3, 0.5, 0.55, 0.4, 0.35, 0.4, 0.35];

const MOBILE_SCALE: f32 = 0.7;
const SELECTED_GROWTH: f32 = 0.15;

/// Angle of planet `index` out of `count`, evenly spaced
pub fn orbit_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32 * TAU
}

/// Orbit radius; three rings repeat every three planets
pub fn orbit_radius(index: usize, device: DeviceClass) -> f32 {
    let ring = (index % 3) as f32;
    match device {
        DeviceClass::Mobile => 2.5 + ring * 1.5,
        DeviceClass::Desktop => 4.0 + ring * 2.5,
    }
}

pub fn base_size(index: usize) -> f32 {
    BASE_SIZES[index % BASE_SIZES.len()]
}

pub fn planet_size(index: usize, device: DeviceClass, selected: bool) -> f32 {
    let size = match device {
        DeviceClass::Mobile => base_size(index) * MOBILE_SCALE,
        DeviceClass::Desktop => base_size(index),
    };
    if selected {
        size + SELECTED_GROWTH
    } else {
        size
    }
}

/// World position of planet `index` on the orbital plane
pub fn planet_position(index: usize, count: usize, device: DeviceClass) -> Vec3 {
    let angle = orbit_angle(index, count);
    let radius = orbit_radius(index, device);
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Distance shown in the telemetry line, in astronomical units
pub fn telemetry_distance(index: usize) -> f32 {
    2.5 + index as f32 * 0.5
}

pub fn telemetry_line(index: usize) -> String {
    format!(
        "TARGET: PROJECT_{} | STATUS: ACTIVE | DISTANCE: {:.1}AU",
        index + 1,
        telemetry_distance(index)
    )
}

/// Camera auto-rotation in radians per second
fn auto_rotate_speed(device: DeviceClass) -> f32 {
    match device {
        DeviceClass::Mobile => TAU / 60.0,
        DeviceClass::Desktop => TAU / 30.0,
    }
}

pub struct ProjectsSection {
    carousel: Carousel,
    controls: CarouselControls,
    starfield: Starfield,
    sun: Sun,
    orbit_angle: f32,
    card_clock: f32,
    card_intro: Tween,
}

impl ProjectsSection {
    pub fn new(config: &SiteConfig, subscriber: &Rc<dyn SelectionSubscriber>) -> Result<Self, NavigationError> {
        let mut carousel = Carousel::new(Surface::Projects, PROJECTS.len())?;
        carousel.add_subscriber(subscriber);

        Ok(Self {
            carousel,
            controls: CarouselControls::new(config.motion.swipe_threshold),
            starfield: Starfield::new(StarfieldConfig {
                count: 2000,
                half_extent: 50.0,
                rotation_speed: 0.005,
                point_size: 1.0,
                seed: 11,
            }),
            sun: Sun::new(palette::AMBER),
            orbit_angle: 0.0,
            card_clock: 0.0,
            card_intro: Tween::new(0.0, 1.0, 0.6, Ease::Power2InOut),
        })
    }

    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    pub fn selected_project(&self) -> &'static Project {
        &PROJECTS[self.carousel.current()]
    }

    fn camera(&self, device: DeviceClass) -> Camera {
        let (distance, height) = match device {
            DeviceClass::Mobile => (12.0, 8.0),
            DeviceClass::Desktop => (15.0, 7.0),
        };
        let position = Vec3::new(self.orbit_angle.sin() * distance, height, self.orbit_angle.cos() * distance);
        Camera::new(position, Vec3::ZERO)
    }

    fn on_selected(&mut self, changed: Option<usize>) {
        if let Some(index) = changed {
            self.card_clock = 0.0;
            info!("Viewing project {}", PROJECTS[index].title);
        }
    }

    fn solar_system(&mut self, ui: &mut Ui, size: Vec2, ctx: &SiteContext) {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(12.0), palette::SPACE);

        let device = ctx.device;
        let camera = self.camera(device);
        self.starfield.paint(&painter, rect, &camera);

        if let Some((center, distance)) = camera.project(Vec3::ZERO, rect) {
            let radius = if device.is_mobile() { 0.8 } else { 1.2 };
            self.sun.paint(&painter, center, camera.screen_radius(radius, distance, rect));
        }

        // Orbit paths
        let count = PROJECTS.len();
        for (idx, project) in PROJECTS.iter().enumerate() {
            let radius = orbit_radius(idx, device);
            let alpha = if self.carousel.is_selected(idx) { 0.4 } else { 0.15 };
            let points: Vec<Pos2> = (0..=64)
                .filter_map(|step| {
                    let a = step as f32 / 64.0 * TAU;
                    camera.project(Vec3::new(a.cos() * radius, 0.0, a.sin() * radius), rect)
                })
                .map(|(pos, _)| pos)
                .collect();
            painter.add(egui::Shape::line(points, Stroke::new(1.0, rgb(project.color.to_array()).linear_multiply(alpha))));
        }

        // Planets, far to near
        let mut planets: Vec<(usize, Pos2, f32, f32)> = (0..count)
            .filter_map(|idx| {
                let world = planet_position(idx, count, device);
                let (pos, distance) = camera.project(world, rect)?;
                let size = planet_size(idx, device, self.carousel.is_selected(idx));
                Some((idx, pos, distance, camera.screen_radius(size, distance, rect)))
            })
            .collect();
        planets.sort_by(|a, b| b.2.total_cmp(&a.2));

        let pointer = response.interact_pointer_pos();
        let mut clicked = None;

        for &(idx, pos, distance, radius) in &planets {
            let project = &PROJECTS[idx];
            let color = rgb(project.color.to_array());
            let selected = self.carousel.is_selected(idx);

            if (idx + 1) % 3 == 0 && !device.is_mobile() {
                let ring = camera.screen_radius(0.25, distance, rect) + radius;
                let outline: Vec<Pos2> = (0..=32)
                    .map(|step| {
                        let a = step as f32 / 32.0 * TAU;
                        pos + Vec2::new(a.cos() * ring, a.sin() * ring * 0.35)
                    })
                    .collect();
                let alpha = if selected { 0.6 } else { 0.4 };
                painter.add(egui::Shape::line(outline, Stroke::new(2.0, color.linear_multiply(alpha))));
            }
            if selected {
                painter.circle_filled(pos, radius * 1.25, color.linear_multiply(0.2));
            }
            painter.circle_filled(pos, radius, color.linear_multiply(0.9));
            if selected {
                painter.circle_stroke(pos, radius * 1.35, Stroke::new(1.5, Color32::WHITE.linear_multiply(0.8)));
                painter.circle_filled(pos - Vec2::new(0.0, radius * 1.8), 2.5, Color32::WHITE);
            }
            if base_size(idx) > 0.4 && !device.is_mobile() {
                let moon_offset = camera.screen_radius(base_size(idx) + 0.4, distance, rect);
                painter.circle_filled(pos + Vec2::new(moon_offset, 0.0), 2.0, Color32::from_gray(204));
            }

            if response.clicked() {
                if let Some(pointer) = pointer {
                    if pointer.distance(pos) <= radius.max(8.0) {
                        clicked = Some(idx);
                    }
                }
            }
        }

        // Swipes on the scene step through projects
        let swiped = self.controls.track_swipe(&response, &mut self.carousel);
        self.on_selected(swiped);

        if let Some(idx) = clicked {
            let changed = dispatch_logged(&mut self.carousel, NavigationCommand::JumpTo(idx));
            self.on_selected(changed);
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
        painter.text(
            rect.left_bottom() + Vec2::new(12.0, -12.0),
            Align2::LEFT_BOTTOM,
            "Click a planet or swipe to explore",
            FontId::monospace(11.0),
            palette::TEXT_DIM,
        );
    }

    fn navigation_panel(&mut self, ui: &mut Ui, ctx: &SiteContext) {
        let project = self.selected_project();
        let accent = rgb(project.color.to_array());
        let appear = self.card_intro.sample(self.card_clock, ctx.motion);

        ui.label(RichText::new("NAVIGATION_SYSTEM").monospace().strong().color(palette::TEXT));
        let changed = self
            .controls
            .dots(ui, &mut self.carousel, |idx| rgb(PROJECTS[idx].color.to_array()));
        self.on_selected(changed);
        ui.label(RichText::new(telemetry_line(self.carousel.current())).monospace().small().color(accent));
        ui.add_space(8.0);

        Frame::none()
            .fill(palette::PANEL)
            .stroke(Stroke::new(1.0, accent.linear_multiply(0.5 * appear)))
            .rounding(Rounding::same(14.0))
            .inner_margin(Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                project_card(ui, project, appear);
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let changed = self.controls.arrows(ui, &mut self.carousel);
            self.on_selected(changed);
        });
        let label = format!("{} RANDOM_PROJECT.EXE", icons::RANDOM);
        let changed = self.controls.random_button(ui, &mut self.carousel, &label);
        self.on_selected(changed);
    }
}

fn project_card(ui: &mut Ui, project: &Project, appear: f32) {
    let accent = rgb(project.color.to_array());
    let fade = |c: Color32| c.linear_multiply(appear.clamp(0.0, 1.0));

    ui.horizontal(|ui| {
        ui.label(RichText::new(project.icon).size(34.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(project.title).size(20.0).strong().color(fade(palette::TEXT)));
            ui.label(RichText::new(project.summary).italics().color(fade(accent)));
        });
    });
    ui.add_space(8.0);

    ui.label(RichText::new("TECH_STACK:").monospace().small().color(fade(palette::TEXT_DIM)));
    ui.horizontal_wrapped(|ui| {
        for tech in project.tech_stack {
            ui.label(RichText::new(format!("● {}", tech)).small().color(fade(accent)));
        }
    });
    ui.add_space(8.0);

    ui.label(RichText::new("DESCRIPTION:").monospace().small().color(fade(palette::TEXT_DIM)));
    ui.label(RichText::new("$ cat project_details.txt").monospace().small().color(fade(palette::AMBER)));
    ui.label(RichText::new(project.description).color(fade(palette::TEXT)));
    ui.add_space(10.0);

    let button = egui::Button::new(RichText::new(format!("{} VIEW_PROJECT", icons::LINK)).monospace().color(accent))
        .stroke(Stroke::new(1.5, accent))
        .fill(Color32::TRANSPARENT);
    if ui.add(button).on_hover_text(project.link).clicked() {
        ui.ctx().output_mut(|o| o.open_url = Some(egui::OpenUrl::new_tab(project.link)));
    }
}

impl Section for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn title(&self) -> &str {
        "Projects"
    }

    fn on_frame_update(&mut self, ctx: &SiteContext, dt: f32) {
        self.card_clock += dt;
        self.starfield.update(dt, ctx.motion);
        if ctx.motion == MotionPolicy::Full {
            self.sun.update(dt);
            self.orbit_angle = (self.orbit_angle + auto_rotate_speed(ctx.device) * dt) % TAU;
        }
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("PROJECTS").heading().strong().color(palette::AMBER));
        });
        ui.add_space(20.0);

        let width = ui.available_width();
        if ctx.is_mobile() {
            self.solar_system(ui, Vec2::new(width, 320.0), ctx);
            ui.add_space(12.0);
            self.navigation_panel(ui, ctx);
        } else {
            let panel_width = 380.0_f32.min(width * 0.4);
            ui.horizontal_top(|ui| {
                self.solar_system(ui, Vec2::new(width - panel_width - 16.0, 560.0), ctx);
                ui.vertical(|ui| {
                    ui.set_width(panel_width);
                    self.navigation_panel(ui, ctx);
                });
            });
        }
        ui.add_space(40.0);

        if ctx.motion == MotionPolicy::Full {
            ui.ctx().request_repaint();
        }
    }

    fn navigate(&mut self, command: NavigationCommand) -> Option<usize> {
        let changed = dispatch_logged(&mut self.carousel, command);
        self.on_selected(changed);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use of_core::SelectionContext;
    use std::cell::Cell;

    struct Counter(Cell<usize>);

    impl SelectionSubscriber for Counter {
        fn on_selection_change(&self, _context: &SelectionContext) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn section() -> (ProjectsSection, Rc<Counter>) {
        let counter = Rc::new(Counter(Cell::new(0)));
        let subscriber: Rc<dyn SelectionSubscriber> = counter.clone();
        (ProjectsSection::new(&SiteConfig::default(), &subscriber).unwrap(), counter)
    }

    #[test]
    fn test_orbit_radius() {
        assert_eq!(orbit_radius(0, DeviceClass::Desktop), 4.0);
        assert_eq!(orbit_radius(1, DeviceClass::Desktop), 6.5);
        assert_eq!(orbit_radius(2, DeviceClass::Desktop), 9.0);
        assert_eq!(orbit_radius(3, DeviceClass::Desktop), 4.0);
        assert_eq!(orbit_radius(0, DeviceClass::Mobile), 2.5);
        assert_eq!(orbit_radius(5, DeviceClass::Mobile), 5.5);
    }

    #[test]
    fn test_planet_size() {
        assert_eq!(planet_size(5, DeviceClass::Desktop, false), 0.55);
        assert!((planet_size(5, DeviceClass::Desktop, true) - 0.70).abs() < 1e-6);
        assert!((planet_size(0, DeviceClass::Mobile, false) - 0.28).abs() < 1e-6);
        assert!((planet_size(0, DeviceClass::Mobile, true) - 0.43).abs() < 1e-6);
        // Sizes cycle past the table
        assert_eq!(base_size(12), base_size(2));
    }

    #[test]
    fn test_orbit_angles_even() {
        assert_eq!(orbit_angle(0, 10), 0.0);
        assert!((orbit_angle(5, 10) - std::f32::consts::PI).abs() < 1e-6);
        let p = planet_position(0, 10, DeviceClass::Desktop);
        assert!((p - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_telemetry() {
        assert_eq!(telemetry_distance(0), 2.5);
        assert_eq!(telemetry_distance(9), 7.0);
        assert_eq!(telemetry_line(3), "TARGET: PROJECT_4 | STATUS: ACTIVE | DISTANCE: 4.0AU");
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut projects, counter) = section();

        assert_eq!(projects.navigate(NavigationCommand::Previous), Some(9));
        assert_eq!(projects.selected_project().title, "Little Soldiers Family Daycare");
        assert_eq!(projects.navigate(NavigationCommand::Next), Some(0));
        assert_eq!(projects.navigate(NavigationCommand::JumpTo(10)), None);
        assert_eq!(projects.current(), 0);

        let random = projects.navigate(NavigationCommand::Random).unwrap();
        assert!(random < PROJECTS.len());
        assert_eq!(counter.0.get(), 3);
    }
}
