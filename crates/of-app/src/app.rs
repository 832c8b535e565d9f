//! Application shell: owns the sections and drives them every frame

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use eframe::egui::{Align, CentralPanel, Context, Frame, Key, ScrollArea};
use tracing::{debug, info};

use of_content::SiteConfig;
use of_core::events::events::DeviceClassChanged;
use of_core::{EmailSender, EventBus, NavigationCommand, NavigationError, SelectionForwarder, SelectionSubscriber};
use of_ui::theme::palette;
use of_ui::{MotionPolicy, ViewportObserver};
use of_views::{
    AboutSection, ContactSection, FooterSection, HeroSection, ProjectsSection, Section, SectionId, SiteContext,
};

/// Longest frame step fed to the animations; avoids jumps after a stall
const MAX_FRAME_DT: f32 = 0.1;

/// Build every page section in scroll order
pub fn build_sections(
    config: &SiteConfig,
    subscriber: &Rc<dyn SelectionSubscriber>,
) -> Result<Vec<Box<dyn Section>>, NavigationError> {
    Ok(vec![
        Box::new(HeroSection::new(config, subscriber)?),
        Box::new(AboutSection::new(config, subscriber)?),
        Box::new(ProjectsSection::new(config, subscriber)?),
        Box::new(ContactSection::new()),
        Box::new(FooterSection::new()),
    ])
}

/// Keyboard shortcuts for the project carousel
pub fn key_command(key: Key) -> Option<NavigationCommand> {
    match key {
        Key::ArrowLeft => Some(NavigationCommand::Previous),
        Key::ArrowRight => Some(NavigationCommand::Next),
        Key::R => Some(NavigationCommand::Random),
        _ => None,
    }
}

pub struct OrbitfolioApp {
    sections: Vec<Box<dyn Section>>,
    config: Arc<SiteConfig>,
    events: EventBus,
    sender: Arc<dyn EmailSender>,
    runtime: tokio::runtime::Runtime,
    viewport: ViewportObserver,
    /// Scroll target requested during the previous frame
    pending_scroll: Option<SectionId>,
    // Carousels only hold weak references to the forwarder
    _forwarder: Rc<dyn SelectionSubscriber>,
}

impl OrbitfolioApp {
    pub fn new(
        config: SiteConfig,
        events: EventBus,
        sender: Arc<dyn EmailSender>,
        runtime: tokio::runtime::Runtime,
    ) -> anyhow::Result<Self> {
        let forwarder: Rc<dyn SelectionSubscriber> = Rc::new(SelectionForwarder::new(events.clone()));
        let sections = build_sections(&config, &forwarder)?;
        let viewport = ViewportObserver::new(config.motion.mobile_breakpoint);

        info!("Built {} sections", sections.len());

        Ok(Self {
            sections,
            config: Arc::new(config),
            events,
            sender,
            runtime,
            viewport,
            pending_scroll: None,
            _forwarder: forwarder,
        })
    }

    fn site_context(&self, time: f32) -> SiteContext {
        let device = self.viewport.device();
        SiteContext {
            device,
            motion: MotionPolicy::for_device(device, self.config.motion.animate_on_mobile),
            config: self.config.clone(),
            events: self.events.clone(),
            runtime_handle: self.runtime.handle().clone(),
            sender: self.sender.clone(),
            time,
            scroll_request: Cell::new(self.pending_scroll),
        }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        // Typing into the contact form must not move the carousel
        if ctx.memory(|m| m.focus().is_some()) {
            return;
        }

        let commands: Vec<NavigationCommand> = ctx.input(|i| {
            [Key::ArrowLeft, Key::ArrowRight, Key::R]
                .into_iter()
                .filter(|key| i.key_pressed(*key))
                .filter_map(key_command)
                .collect()
        });

        if let Some(projects) = self.sections.iter_mut().find(|s| s.id() == SectionId::Projects) {
            for command in commands {
                if let Some(index) = projects.navigate(command) {
                    debug!("Keyboard {:?} selected project {}", command, index);
                }
            }
        }
    }
}

impl eframe::App for OrbitfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let (dt, time, width) = ctx.input(|i| (i.stable_dt.min(MAX_FRAME_DT), i.time as f32, i.screen_rect().width()));

        let device_changed = self.viewport.update(width);
        if device_changed {
            self.events.publish(DeviceClassChanged {
                mobile: self.viewport.is_mobile(),
                width: self.viewport.width(),
            });
        }

        self.handle_keyboard(ctx);

        let site = self.site_context(time);
        self.pending_scroll = None;
        for section in &mut self.sections {
            if device_changed {
                section.on_device_change(&site);
            }
            section.on_frame_update(&site, dt);
        }

        let target = site.take_scroll_request();
        let sections = &mut self.sections;
        CentralPanel::default()
            .frame(Frame::none().fill(palette::SPACE))
            .show(ctx, |ui| {
                ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    for section in sections.iter_mut() {
                        let rect = ui.scope(|ui| section.ui(&site, ui)).response.rect;
                        if target == Some(section.id()) {
                            ui.scroll_to_rect(rect, Some(Align::TOP));
                        }
                    }
                });
            });

        // Requests raised while drawing are served next frame
        self.pending_scroll = site.take_scroll_request();

        // The starfields never stop moving
        ctx.request_repaint();
    }
}
