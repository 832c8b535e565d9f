//! Page sections for the portfolio
//!
//! Each section owns its own navigation state and animation clocks and draws
//! itself into the shared scroll area. Sections receive a [`SiteContext`]
//! every frame with the device class, motion policy and shared services.

mod about;
mod contact;
mod footer;
mod hero;
pub mod mascots;
pub mod projects;
pub mod scene;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;

use std::cell::Cell;
use std::sync::Arc;

use egui::Ui;
use of_content::SiteConfig;
use of_core::{EmailSender, EventBus, NavigationCommand};
use of_ui::{DeviceClass, MotionPolicy};

/// Page sections in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// Resolve a nav-link anchor; a leading `#` is ignored
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        [
            SectionId::Hero,
            SectionId::About,
            SectionId::Projects,
            SectionId::Contact,
            SectionId::Footer,
        ]
        .into_iter()
        .find(|id| id.anchor() == anchor)
    }
}

/// Context passed to sections during rendering
pub struct SiteContext {
    pub device: DeviceClass,
    pub motion: MotionPolicy,
    pub config: Arc<SiteConfig>,
    pub events: EventBus,
    /// Tokio runtime handle for the e-mail send
    pub runtime_handle: tokio::runtime::Handle,
    pub sender: Arc<dyn EmailSender>,
    /// Seconds since launch
    pub time: f32,
    /// Section the page should scroll to after this frame
    pub scroll_request: Cell<Option<SectionId>>,
}

impl SiteContext {
    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    pub fn request_scroll(&self, section: SectionId) {
        self.scroll_request.set(Some(section));
    }

    pub fn take_scroll_request(&self) -> Option<SectionId> {
        self.scroll_request.take()
    }
}

/// Starts an entrance animation the first time a section scrolls into view
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    started_at: Option<f32>,
}

impl Reveal {
    /// Record visibility at time `now`; only the first visible frame counts
    pub fn observe(&mut self, visible: bool, now: f32) {
        if visible && self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Seconds since the section was first seen, zero before that
    pub fn elapsed(&self, now: f32) -> f32 {
        self.started_at.map_or(0.0, |start| (now - start).max(0.0))
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }
}

/// Base trait for all page sections
pub trait Section {
    fn id(&self) -> SectionId;

    fn title(&self) -> &str;

    /// Draw the section
    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui);

    /// Called once per frame before drawing
    fn on_frame_update(&mut self, _ctx: &SiteContext, _dt: f32) {}

    /// Called when the window crosses the mobile breakpoint
    fn on_device_change(&mut self, _ctx: &SiteContext) {}

    /// Keyboard navigation; sections without a carousel ignore it
    fn navigate(&mut self, _command: NavigationCommand) -> Option<usize> {
        None
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use of_core::contact::LoggingSender;

    /// Context with defaults and its own runtime
    pub fn context(runtime: &tokio::runtime::Runtime, device: DeviceClass) -> SiteContext {
        SiteContext {
            device,
            motion: MotionPolicy::for_device(device, false),
            config: Arc::new(SiteConfig::default()),
            events: EventBus::new(),
            runtime_handle: runtime.handle().clone(),
            sender: Arc::new(LoggingSender),
            time: 0.0,
            scroll_request: Cell::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip() {
        for id in [SectionId::Hero, SectionId::About, SectionId::Projects, SectionId::Contact, SectionId::Footer] {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("#contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn test_nav_links_resolve() {
        for link in of_content::NAV_LINKS {
            assert!(SectionId::from_anchor(link.anchor).is_some(), "{} has no section", link.anchor);
        }
    }

    #[test]
    fn test_reveal_starts_once() {
        let mut reveal = Reveal::default();
        reveal.observe(false, 1.0);
        assert_eq!(reveal.elapsed(3.0), 0.0);

        reveal.observe(true, 2.0);
        reveal.observe(true, 2.5);
        assert!(reveal.has_started());
        assert_eq!(reveal.elapsed(3.0), 1.0);
    }

    #[test]
    fn test_scroll_request_taken_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = test_support::context(&runtime, DeviceClass::Desktop);
        ctx.request_scroll(SectionId::About);
        assert_eq!(ctx.take_scroll_request(), Some(SectionId::About));
        assert_eq!(ctx.take_scroll_request(), None);
    }
}
