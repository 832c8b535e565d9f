use chrono::Datelike;
use egui::{Align, Frame, Layout, Margin, RichText, Stroke, Ui};

use of_content::catalog::{HERO, NAV_LINKS, SOCIAL_LINKS};
use of_ui::theme::{palette, rgb, success_color};

use crate::{Section, SectionId, SiteContext};

const BRAND: &str = "ABHISHEK.DEV";
const TAGLINE: &str = "Full Stack Developer & Machine Learning Engineer crafting digital experiences that bridge the gap between imagination and reality.";

/// Where the back-to-top button scrolls
pub const BACK_TO_TOP: SectionId = SectionId::Hero;

pub fn mailto(recipient: &str) -> String {
    format!("mailto:{}", recipient)
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, HERO.owner)
}

#[derive(Debug, Default)]
pub struct FooterSection;

impl FooterSection {
    pub fn new() -> Self {
        Self
    }

    fn nav_links(&self, ctx: &SiteContext, ui: &mut Ui) {
        ui.label(RichText::new("NAVIGATION").strong().color(palette::AMBER));
        for link in NAV_LINKS {
            if ui.link(RichText::new(link.name).color(palette::TEXT)).clicked() {
                match SectionId::from_anchor(link.anchor) {
                    Some(section) => ctx.request_scroll(section),
                    None => tracing::warn!("Unknown anchor '{}'", link.anchor),
                }
            }
        }
    }

    fn contact_info(&self, ctx: &SiteContext, ui: &mut Ui) {
        let recipient = &ctx.config.contact.recipient;
        ui.label(RichText::new("CONTACT_INFO").strong().monospace().color(palette::AMBER));
        ui.label(RichText::new("EMAIL:").small().monospace().color(palette::TEXT_DIM));
        ui.hyperlink_to(RichText::new(recipient.as_str()).color(palette::TEXT), mailto(recipient));
        ui.label(RichText::new("STATUS:").small().monospace().color(palette::TEXT_DIM));
        ui.label(RichText::new("● Available for work").color(success_color()));
        ui.label(RichText::new("LOCATION:").small().monospace().color(palette::TEXT_DIM));
        ui.label(RichText::new("Earth, Solar System 🌍").color(palette::TEXT));
    }

    fn social_links(&self, ui: &mut Ui) {
        ui.label(RichText::new("CONNECT_WITH_ME").strong().monospace().color(palette::AMBER));
        ui.horizontal_wrapped(|ui| {
            for link in SOCIAL_LINKS {
                ui.hyperlink_to(
                    RichText::new(format!("{} {}", link.icon, link.name)).color(rgb(link.color.to_array())),
                    link.url,
                )
                .on_hover_text(link.description);
            }
        });
    }
}

impl Section for FooterSection {
    fn id(&self) -> SectionId {
        SectionId::Footer
    }

    fn title(&self) -> &str {
        "Footer"
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        Frame::none()
            .fill(palette::NEBULA)
            .stroke(Stroke::new(1.0, palette::AMBER.linear_multiply(0.3)))
            .inner_margin(Margin::symmetric(24.0, 32.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let brand = |ui: &mut Ui| {
                    ui.label(RichText::new(BRAND).heading().strong().color(palette::AMBER));
                    ui.label(RichText::new(TAGLINE).color(palette::TEXT_DIM));
                };

                if ctx.is_mobile() {
                    brand(ui);
                    ui.add_space(16.0);
                    self.nav_links(ctx, ui);
                    ui.add_space(16.0);
                    self.contact_info(ctx, ui);
                } else {
                    ui.columns(3, |columns| {
                        brand(&mut columns[0]);
                        self.nav_links(ctx, &mut columns[1]);
                        self.contact_info(ctx, &mut columns[2]);
                    });
                }

                ui.add_space(24.0);
                self.social_links(ui);

                ui.add_space(24.0);
                ui.separator();
                ui.horizontal(|ui| {
                    let year = chrono::Local::now().year();
                    ui.label(RichText::new(copyright_line(year)).small().monospace().color(palette::TEXT_DIM));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let button = egui::Button::new(RichText::new("BACK_TO_TOP ↑").monospace().color(palette::AMBER))
                            .stroke(Stroke::new(1.0, palette::AMBER.linear_multiply(0.4)))
                            .fill(palette::AMBER.linear_multiply(0.1));
                        if ui.add(button).clicked() {
                            ctx.request_scroll(BACK_TO_TOP);
                        }
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_scrolls_to_hero() {
        assert_eq!(BACK_TO_TOP, SectionId::Hero);
        assert_eq!(SectionId::from_anchor(BACK_TO_TOP.anchor()), Some(SectionId::Hero));

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let ctx = crate::test_support::context(&runtime, of_ui::DeviceClass::Desktop);
        ctx.request_scroll(BACK_TO_TOP);
        assert_eq!(ctx.take_scroll_request(), Some(SectionId::Hero));
    }

    #[test]
    fn test_mailto_uses_configured_recipient() {
        let config = of_content::SiteConfig::default();
        assert_eq!(mailto(&config.contact.recipient), "mailto:john.chukka@gmail.com");
    }

    #[test]
    fn test_footer_draws_on_both_layouts() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        for device in [of_ui::DeviceClass::Desktop, of_ui::DeviceClass::Mobile] {
            let site = crate::test_support::context(&runtime, device);
            let mut footer = FooterSection::new();
            let ctx = egui::Context::default();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| footer.ui(&site, ui));
            });
            // Nothing was clicked
            assert_eq!(site.take_scroll_request(), None);
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 Abhishek Chukka. All rights reserved.");
    }
}
