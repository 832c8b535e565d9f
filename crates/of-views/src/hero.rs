//! Hero: space scene, animated name, typed subtitles and jump buttons

use std::rc::Rc;
use std::time::Duration;

use egui::{Align2, FontId, Pos2, Rect, RichText, Stroke, Ui, Vec2};
use glam::Vec3;
use tracing::debug;

use of_content::{SiteConfig, HERO};
use of_core::navigation::{Carousel, NavigationCommand, SelectionSubscriber, Surface};
use of_core::NavigationError;
use of_ui::theme::palette;
use of_ui::{Ease, IntervalScheduler, MotionPolicy, Timeline, Tween, TypingEffect};

use crate::mascots::{float_offset, Astronaut, SpaceStation, Sun};
use crate::scene::{Camera, Starfield, StarfieldConfig};
use crate::{Section, SectionId, SiteContext};

/// Seconds after launch at which subtitles start typing
const SUBTITLES_AT: f32 = 5.5;

const SUN_POSITION: Vec3 = Vec3::new(-15.0, 10.0, -20.0);
const STATION_POSITION: Vec3 = Vec3::new(12.0, 6.0, -12.0);
const ASTRONAUT_POSITION: Vec3 = Vec3::new(3.0, -1.5, -2.0);

/// Camera dolly on launch: out to z = 50, then in to z = 5
pub fn camera_rig() -> Timeline {
    Timeline::new()
        .then(Tween::new(10.0, 50.0, 2.0, Ease::Power2InOut))
        .then(Tween::new(50.0, 5.0, 2.0, Ease::Power2InOut))
}

pub struct HeroSection {
    clock: f32,
    starfield: Starfield,
    station: SpaceStation,
    sun: Sun,
    astronaut: Astronaut,
    camera_rig: Timeline,
    name_intro: Tween,
    buttons_intro: Tween,
    subtitles: Carousel,
    subtitle_timer: IntervalScheduler,
    typing: TypingEffect,
    /// Clock value at which subtitles first appeared
    subtitles_since: Option<f32>,
}

impl HeroSection {
    pub fn new(config: &SiteConfig, subscriber: &Rc<dyn SelectionSubscriber>) -> Result<Self, NavigationError> {
        let mut subtitles = Carousel::new(Surface::Subtitles, HERO.subtitles.len())?;
        subtitles.add_subscriber(subscriber);

        let motion = &config.motion;
        let typing = TypingEffect::new(
            HERO.subtitles[subtitles.current()],
            Duration::from_millis(motion.typing_speed_ms),
        );

        Ok(Self {
            clock: 0.0,
            starfield: Starfield::new(StarfieldConfig::default()),
            station: SpaceStation::new(0.2),
            sun: Sun::new(palette::AMBER),
            astronaut: Astronaut::new(0.5),
            camera_rig: camera_rig(),
            name_intro: Tween::new(0.0, 1.0, 2.0, Ease::BackOut(1.7)).with_delay(3.0),
            buttons_intro: Tween::new(0.0, 1.0, 1.2, Ease::ElasticOut).with_delay(5.0),
            subtitles,
            subtitle_timer: IntervalScheduler::new(motion.subtitle_interval_secs),
            typing,
            subtitles_since: None,
        })
    }

    pub fn current_subtitle(&self) -> &'static str {
        HERO.subtitles[self.subtitles.current()]
    }

    pub fn typed_subtitle(&self) -> &str {
        self.typing.visible()
    }

    /// Once shown, subtitles stay shown even if the motion policy changes
    pub fn subtitles_visible(&self) -> bool {
        self.subtitles_since.is_some()
    }

    /// Advance the subtitle rotation by `dt` seconds
    fn advance_subtitles(&mut self, dt: f32) {
        for _ in 0..self.subtitle_timer.tick(dt) {
            if let Ok(index) = self.subtitles.dispatch(NavigationCommand::Next) {
                debug!("Hero subtitle -> {}", HERO.subtitles[index]);
                self.typing.restart(HERO.subtitles[index]);
            }
        }
        self.typing.tick(dt);
    }

    fn camera(&self, motion: MotionPolicy) -> Camera {
        let z = self.camera_rig.sample(self.clock, motion).unwrap_or(5.0);
        Camera::new(Vec3::new(0.0, 0.0, z), Vec3::new(0.0, 0.0, z - 10.0))
    }

    fn paint_scene(&self, ui: &Ui, rect: Rect, ctx: &SiteContext) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette::SPACE);

        let camera = self.camera(ctx.motion);
        self.starfield.paint(&painter, rect, &camera);

        let scale = if ctx.is_mobile() { 0.6 } else { 1.0 };

        if let Some((pos, distance)) = camera.project(SUN_POSITION, rect) {
            self.sun.paint(&painter, pos, camera.screen_radius(2.5, distance, rect) * scale);
        }
        if let Some((pos, distance)) = camera.project(STATION_POSITION, rect) {
            self.station.paint(&painter, pos, camera.screen_radius(4.0, distance, rect) * scale);
        }

        let drift = match ctx.motion {
            MotionPolicy::Full => float_offset(self.astronaut.time(), 0.5, 1.0),
            MotionPolicy::Reduced => Vec3::ZERO,
        };
        if let Some((pos, distance)) = camera.project(ASTRONAUT_POSITION + drift, rect) {
            self.astronaut.paint(&painter, pos, camera.screen_radius(1.5, distance, rect) * scale);
        }

        // Warm glow behind the title
        painter.circle_filled(rect.center(), rect.width().min(rect.height()) * 0.35, palette::AMBER.linear_multiply(0.03));
    }

    fn paint_title(&self, ui: &Ui, rect: Rect, ctx: &SiteContext) -> f32 {
        let progress = self.name_intro.sample(self.clock, ctx.motion);
        let alpha = progress.clamp(0.0, 1.0);
        let size = if ctx.is_mobile() { 34.0 } else { 72.0 } * (0.8 + 0.2 * progress);
        let y = rect.center().y - rect.height() * 0.12 + (1.0 - progress) * 50.0;

        let painter = ui.painter_at(rect);
        let pos = Pos2::new(rect.center().x, y);
        painter.text(
            pos + Vec2::splat(2.0),
            Align2::CENTER_CENTER,
            HERO.name,
            FontId::proportional(size),
            palette::ORANGE.linear_multiply(alpha * 0.5),
        );
        let title = painter.text(
            pos,
            Align2::CENTER_CENTER,
            HERO.name,
            FontId::proportional(size),
            palette::AMBER.linear_multiply(alpha),
        );

        // Glowing underline
        let underline = title.width() * 0.6;
        let line_y = title.bottom() + 12.0;
        painter.line_segment(
            [Pos2::new(pos.x - underline / 2.0, line_y), Pos2::new(pos.x + underline / 2.0, line_y)],
            Stroke::new(3.0, palette::AMBER.linear_multiply(alpha)),
        );
        line_y
    }

    fn paint_subtitle(&self, ui: &Ui, rect: Rect, top: f32, ctx: &SiteContext) {
        if !self.subtitles_visible() {
            return;
        }
        let size = if ctx.is_mobile() { 16.0 } else { 26.0 };
        let painter = ui.painter_at(rect);
        let text = format!("> {}", self.typing.visible());
        let galley = painter.text(
            Pos2::new(rect.center().x, top + 40.0),
            Align2::CENTER_CENTER,
            text,
            FontId::monospace(size),
            palette::SKY,
        );

        // Blinking cursor
        if (ctx.time * 2.0).fract() < 0.5 || !self.typing.is_complete() {
            let x = galley.right() + 6.0;
            painter.line_segment(
                [Pos2::new(x, galley.top()), Pos2::new(x, galley.bottom())],
                Stroke::new(2.0, palette::AMBER),
            );
        }
    }

    fn buttons(&self, ui: &mut Ui, rect: Rect, ctx: &SiteContext) {
        let appear = self.buttons_intro.sample(self.clock, ctx.motion);
        if appear <= 0.01 {
            return;
        }

        let area = Rect::from_center_size(
            Pos2::new(rect.center().x, rect.center().y + rect.height() * 0.22 + (1.0 - appear) * 50.0),
            Vec2::new(rect.width().min(520.0), 48.0),
        );
        ui.allocate_ui_at_rect(area, |ui| {
            ui.horizontal_centered(|ui| {
                for action in HERO.actions {
                    let label = RichText::new(action.to_uppercase())
                        .monospace()
                        .color(palette::SKY.linear_multiply(appear.min(1.0)));
                    let button = egui::Button::new(label)
                        .stroke(Stroke::new(2.0, palette::AMBER))
                        .fill(palette::AMBER.linear_multiply(0.08));
                    if ui.add(button).clicked() {
                        let target = match *action {
                            "About" => SectionId::About,
                            "Contact" => SectionId::Contact,
                            _ => SectionId::Projects,
                        };
                        ctx.request_scroll(target);
                    }
                }
            });
        });

        let hint = Rect::from_center_size(Pos2::new(rect.center().x, rect.bottom() - 30.0), Vec2::new(160.0, 30.0));
        ui.allocate_ui_at_rect(hint, |ui| {
            ui.vertical_centered(|ui| {
                let scroll = egui::Button::new(RichText::new("SCROLL DOWN").small().color(palette::SKY)).frame(false);
                if ui.add(scroll).clicked() {
                    ctx.request_scroll(SectionId::Footer);
                }
            });
        });
    }
}

impl Section for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn title(&self) -> &str {
        "Home"
    }

    fn on_frame_update(&mut self, ctx: &SiteContext, dt: f32) {
        self.clock += dt;
        self.starfield.update(dt, ctx.motion);
        if ctx.motion == MotionPolicy::Full {
            self.station.update(dt);
            self.sun.update(dt);
            self.astronaut.update(dt);
        }
        // Only the part of this frame after the subtitles appeared counts
        let visible_for = match self.subtitles_since {
            Some(_) => dt,
            None => {
                let visible_for = match ctx.motion {
                    MotionPolicy::Reduced => dt,
                    MotionPolicy::Full => (self.clock - SUBTITLES_AT).clamp(0.0, dt),
                };
                if visible_for > 0.0 {
                    self.subtitles_since = Some(self.clock - visible_for);
                }
                visible_for
            }
        };
        if visible_for > 0.0 {
            self.advance_subtitles(visible_for);
        }
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        let height = ui.ctx().screen_rect().height().max(480.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), egui::Sense::hover());
        // Subtitles hold still while the hero is scrolled away
        self.subtitle_timer.set_paused(!ui.is_rect_visible(rect));

        self.paint_scene(ui, rect, ctx);
        let underline = self.paint_title(ui, rect, ctx);
        self.paint_subtitle(ui, rect, underline, ctx);
        self.buttons(ui, rect, ctx);

        // Keep the scene moving
        if ctx.motion == MotionPolicy::Full || !self.typing.is_complete() {
            ui.ctx().request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use of_ui::DeviceClass;
    use std::cell::RefCell;
    use of_core::SelectionContext;

    struct Recorder(RefCell<Vec<usize>>);

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, context: &SelectionContext) {
            self.0.borrow_mut().push(context.index);
        }
    }

    fn hero() -> (HeroSection, Rc<Recorder>) {
        let recorder = Rc::new(Recorder(RefCell::new(Vec::new())));
        let subscriber: Rc<dyn SelectionSubscriber> = recorder.clone();
        (HeroSection::new(&SiteConfig::default(), &subscriber).unwrap(), recorder)
    }

    #[test]
    fn test_camera_rig_path() {
        let rig = camera_rig();
        assert_eq!(rig.value_at(0.0), Some(10.0));
        assert_eq!(rig.value_at(2.0), Some(50.0));
        assert_eq!(rig.value_at(4.0), Some(5.0));
        assert_eq!(rig.sample(0.0, MotionPolicy::Reduced), Some(5.0));
    }

    #[test]
    fn test_subtitles_wait_for_intro() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = test_support::context(&runtime, DeviceClass::Desktop);
        let (mut hero, recorder) = hero();

        hero.on_frame_update(&ctx, 5.0);
        assert_eq!(hero.typed_subtitle(), "");
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_subtitles_rotate_every_interval() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = test_support::context(&runtime, DeviceClass::Desktop);
        let (mut hero, recorder) = hero();

        hero.on_frame_update(&ctx, SUBTITLES_AT);
        assert_eq!(hero.current_subtitle(), "Full Stack Developer");

        // Typing finishes well inside one interval
        hero.on_frame_update(&ctx, 3.0);
        assert_eq!(hero.typed_subtitle(), "Full Stack Developer");

        hero.on_frame_update(&ctx, 1.0);
        assert_eq!(hero.current_subtitle(), "Machine Learning Engineer");
        assert_eq!(hero.typed_subtitle(), "Machine Learn");

        hero.on_frame_update(&ctx, 8.0);
        assert_eq!(*recorder.0.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_reduced_motion_shows_subtitles_immediately() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = test_support::context(&runtime, DeviceClass::Mobile);
        let (mut hero, _) = hero();

        hero.on_frame_update(&ctx, 0.1);
        assert_eq!(hero.typed_subtitle(), "Fu");
    }

    #[test]
    fn test_subtitles_stay_visible_after_growing_to_desktop() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mobile = test_support::context(&runtime, DeviceClass::Mobile);
        let desktop = test_support::context(&runtime, DeviceClass::Desktop);
        let (mut hero, _) = hero();

        hero.on_frame_update(&mobile, 0.1);
        assert!(hero.subtitles_visible());

        // Still well before the desktop intro reaches the subtitles
        hero.on_frame_update(&desktop, 0.1);
        assert!(hero.subtitles_visible());
        assert_eq!(hero.typed_subtitle(), "Ful");
    }

    #[test]
    fn test_desktop_subtitles_appear_at_intro_time() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = test_support::context(&runtime, DeviceClass::Desktop);
        let (mut hero, _) = hero();

        hero.on_frame_update(&ctx, SUBTITLES_AT - 0.5);
        assert!(!hero.subtitles_visible());
        hero.on_frame_update(&ctx, 1.0);
        assert_eq!(hero.subtitles_since, Some(SUBTITLES_AT));
    }
}
