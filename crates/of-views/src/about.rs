//! About: intro, tech badges and the experience timeline
//!
//! Desktop shows a vertical timeline with a detail card; narrow windows get
//! swipeable journey cards instead. The two carousels are independent, so
//! resizing across the breakpoint keeps each one's position.

use std::rc::Rc;

use egui::{Color32, Frame, Margin, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};

use of_content::{Experience, SiteConfig, EXPERIENCES, TECH_SKILLS};
use of_core::navigation::{Carousel, NavigationCommand, SelectionSubscriber, Surface};
use of_core::NavigationError;
use of_ui::controls::dispatch_logged;
use of_ui::theme::{palette, rgb};
use of_ui::{CarouselControls, Ease, MotionPolicy, Tween};

use crate::{Reveal, Section, SectionId, SiteContext};

const INTRO: &str = "I build things for the web and for machines that learn. \
From responsive front ends to ML pipelines, I like turning ideas into products people enjoy using.";

pub struct AboutSection {
    timeline: Carousel,
    cards: Carousel,
    card_controls: CarouselControls,
    timeline_controls: CarouselControls,
    reveal: Reveal,
    title_intro: Tween,
    line_intro: Tween,
    clock: f32,
}

impl AboutSection {
    pub fn new(config: &SiteConfig, subscriber: &Rc<dyn SelectionSubscriber>) -> Result<Self, NavigationError> {
        let mut timeline = Carousel::new(Surface::Timeline, EXPERIENCES.len())?;
        let mut cards = Carousel::new(Surface::JourneyCards, EXPERIENCES.len())?;
        timeline.add_subscriber(subscriber);
        cards.add_subscriber(subscriber);

        let threshold = config.motion.swipe_threshold;
        Ok(Self {
            timeline,
            cards,
            card_controls: CarouselControls::new(threshold),
            timeline_controls: CarouselControls::new(threshold),
            reveal: Reveal::default(),
            title_intro: Tween::new(0.0, 1.0, 1.5, Ease::Power3Out),
            line_intro: Tween::new(0.0, 1.0, 1.5, Ease::Power3Out).with_delay(0.5),
            clock: 0.0,
        })
    }

    pub fn timeline_index(&self) -> usize {
        self.timeline.current()
    }

    pub fn card_index(&self) -> usize {
        self.cards.current()
    }

    /// Carousel shown for the given layout
    pub fn active_carousel_mut(&mut self, mobile: bool) -> &mut Carousel {
        if mobile {
            &mut self.cards
        } else {
            &mut self.timeline
        }
    }

    fn header(&mut self, ui: &mut Ui, motion: MotionPolicy) {
        let elapsed = self.reveal.elapsed(self.clock);
        let title = self.title_intro.sample(elapsed, motion);
        let line = self.line_intro.sample(elapsed, motion);

        ui.add_space((1.0 - title) * 100.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("ABOUT ME")
                    .heading()
                    .strong()
                    .color(palette::AMBER.linear_multiply(title)),
            );
            let width = 160.0 * line;
            let (rect, _) = ui.allocate_exact_size(Vec2::new(160.0, 4.0), Sense::hover());
            ui.painter().rect_filled(
                Rect::from_center_size(rect.center(), Vec2::new(width, 3.0)),
                Rounding::same(2.0),
                palette::ORANGE,
            );
            ui.add_space(12.0);
            ui.label(RichText::new(INTRO).color(palette::TEXT));
        });
    }

    fn tech_badges(ui: &mut Ui) {
        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            for skill in TECH_SKILLS {
                Frame::none()
                    .fill(palette::PANEL)
                    .stroke(Stroke::new(1.0, palette::AMBER.linear_multiply(0.4)))
                    .rounding(Rounding::same(12.0))
                    .inner_margin(Margin::symmetric(10.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(*skill).small().color(palette::SKY));
                    });
            }
        });
        ui.add_space(24.0);
    }

    fn desktop_timeline(&mut self, ui: &mut Ui) {
        ui.columns(2, |columns| {
            let nodes = &mut columns[0];
            for (idx, experience) in EXPERIENCES.iter().enumerate() {
                if timeline_node(nodes, experience, self.timeline.is_selected(idx)).clicked() {
                    dispatch_logged(&mut self.timeline, NavigationCommand::JumpTo(idx));
                }
            }

            let detail = &mut columns[1];
            experience_card(detail, &EXPERIENCES[self.timeline.current()], false);
            detail.add_space(12.0);
            detail.vertical_centered(|ui| {
                self.timeline_controls
                    .dots(ui, &mut self.timeline, |_| palette::AMBER);
            });
        });
    }

    fn journey_cards(&mut self, ui: &mut Ui) {
        let experience = &EXPERIENCES[self.cards.current()];

        let card = ui.scope(|ui| experience_card(ui, experience, true)).response;
        // The whole card is swipeable
        self.card_controls.swipe_area(ui, card.rect, &mut self.cards);

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            self.card_controls.arrows(ui, &mut self.cards);
            self.card_controls.dots(ui, &mut self.cards, |idx| rgb(EXPERIENCES[idx].color().to_array()));
            ui.label(RichText::new("Swipe or tap to explore").small().color(palette::TEXT_DIM));
        });
    }
}

fn timeline_node(ui: &mut Ui, experience: &Experience, active: bool) -> egui::Response {
    let accent = rgb(experience.color().to_array());
    let (rect, response) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 72.0), Sense::click());
    let painter = ui.painter();

    let line_x = rect.left() + 16.0;
    painter.line_segment(
        [Pos2::new(line_x, rect.top()), Pos2::new(line_x, rect.bottom())],
        Stroke::new(2.0, palette::AMBER.linear_multiply(0.3)),
    );

    let node = Pos2::new(line_x, rect.center().y);
    let radius = if active { 9.0 } else { 6.0 };
    painter.circle_filled(node, radius, if active { accent } else { Color32::from_gray(80) });
    if active || response.hovered() {
        painter.circle_stroke(node, radius + 4.0, Stroke::new(1.5, accent.linear_multiply(0.5)));
    }

    let text_color = if active { palette::TEXT } else { palette::TEXT_DIM };
    painter.text(
        Pos2::new(line_x + 24.0, rect.center().y - 10.0),
        egui::Align2::LEFT_CENTER,
        experience.role,
        egui::FontId::proportional(16.0),
        text_color,
    );
    painter.text(
        Pos2::new(line_x + 24.0, rect.center().y + 12.0),
        egui::Align2::LEFT_CENTER,
        format!("{}  ·  {}", experience.company, experience.period),
        egui::FontId::proportional(13.0),
        accent,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn experience_card(ui: &mut Ui, experience: &Experience, compact: bool) {
    let accent = rgb(experience.color().to_array());
    Frame::none()
        .fill(palette::PANEL)
        .stroke(Stroke::new(1.0, accent.linear_multiply(0.6)))
        .rounding(Rounding::same(16.0))
        .inner_margin(Margin::same(if compact { 16.0 } else { 24.0 }))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(experience.role).size(20.0).strong().color(palette::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(experience.kind.label().to_uppercase()).small().color(accent));
                });
            });
            ui.label(RichText::new(format!("{}  ·  {}", experience.company, experience.period)).color(accent));
            ui.add_space(8.0);
            ui.label(RichText::new(experience.description).color(palette::TEXT_DIM));
            ui.add_space(8.0);

            let skills = if compact { experience.headline_skills() } else { experience.skills };
            ui.horizontal_wrapped(|ui| {
                for skill in skills {
                    ui.label(RichText::new(*skill).small().background_color(accent.linear_multiply(0.15)));
                }
            });
            ui.add_space(8.0);
            ui.label(RichText::new(format!("★ {}", experience.achievement)).color(palette::AMBER));
        });
}

impl Section for AboutSection {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn title(&self) -> &str {
        "About"
    }

    fn on_frame_update(&mut self, _ctx: &SiteContext, dt: f32) {
        self.clock += dt;
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        let top = ui.cursor().min;
        self.reveal.observe(ui.is_rect_visible(Rect::from_min_size(top, Vec2::new(ui.available_width(), 200.0))), self.clock);

        ui.add_space(60.0);
        self.header(ui, ctx.motion);
        Self::tech_badges(ui);

        if ctx.is_mobile() {
            self.journey_cards(ui);
        } else {
            self.desktop_timeline(ui);
        }
        ui.add_space(60.0);

        if self.reveal.has_started() && !self.title_intro.is_finished(self.reveal.elapsed(self.clock)) {
            ui.ctx().request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use of_core::SelectionContext;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<(Surface, usize)>>);

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, context: &SelectionContext) {
            self.0.borrow_mut().push((context.surface, context.index));
        }
    }

    #[test]
    fn test_layouts_navigate_independently() {
        let recorder = Rc::new(Recorder(RefCell::new(Vec::new())));
        let subscriber: Rc<dyn SelectionSubscriber> = recorder.clone();
        let mut about = AboutSection::new(&SiteConfig::default(), &subscriber).unwrap();

        about.active_carousel_mut(true).dispatch(NavigationCommand::Previous).unwrap();
        about.active_carousel_mut(false).dispatch(NavigationCommand::JumpTo(1)).unwrap();

        assert_eq!(about.card_index(), 2);
        assert_eq!(about.timeline_index(), 1);
        assert_eq!(
            *recorder.0.borrow(),
            vec![(Surface::JourneyCards, 2), (Surface::Timeline, 1)]
        );
    }

    #[test]
    fn test_keyboard_does_not_drive_about() {
        let subscriber: Rc<dyn SelectionSubscriber> = Rc::new(Recorder(RefCell::new(Vec::new())));
        let mut about = AboutSection::new(&SiteConfig::default(), &subscriber).unwrap();
        assert_eq!(about.navigate(NavigationCommand::Next), None);
        assert_eq!(about.timeline_index(), 0);
    }
}
