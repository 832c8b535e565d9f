//! Contact form section
//!
//! The send runs on the tokio runtime; its result lands in a shared slot
//! that is drained on the next frame.

use std::sync::Arc;

use egui::{Frame, Margin, RichText, Rounding, Stroke, TextEdit, Ui};
use parking_lot::Mutex;
use tracing::{debug, warn};

use of_core::contact::SubmitStatus;
use of_core::events::events::{ContactFailed, ContactSent};
use of_core::{ContactController, ContactError};
use of_ui::theme::{error_color, palette, success_color};
use of_ui::icons;

use crate::{Section, SectionId, SiteContext};

type SendSlot = Arc<Mutex<Option<Result<(), ContactError>>>>;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Banner text for a failed send
pub fn failure_message(recipient: &str) -> String {
    format!("Failed to send message. Please try again or email me directly at {}", recipient)
}

#[derive(Default)]
pub struct ContactSection {
    controller: ContactController,
    pending: SendSlot,
    last_failure: Option<ContactError>,
}

impl ContactSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &ContactController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ContactController {
        &mut self.controller
    }

    /// Validate the form and spawn the send
    pub fn submit(&mut self, ctx: &SiteContext, repaint: Option<egui::Context>) -> Result<(), ContactError> {
        let request = match self.controller.begin_submit(&ctx.config.contact) {
            Ok(request) => request,
            Err(ContactError::AlreadySubmitting) => return Err(ContactError::AlreadySubmitting),
            Err(e) => {
                self.last_failure = Some(e.clone());
                return Err(e);
            }
        };
        self.last_failure = None;
        debug!("Submitting contact form from {}", request.template_params.from_email);

        let sender = ctx.sender.clone();
        let slot = self.pending.clone();
        ctx.runtime_handle.spawn(async move {
            let result = sender.send(&request).await;
            *slot.lock() = Some(result);
            if let Some(egui_ctx) = repaint {
                egui_ctx.request_repaint();
            }
        });
        Ok(())
    }

    /// Apply a finished send, if any. Returns true when the status changed.
    pub fn poll(&mut self, ctx: &SiteContext) -> bool {
        let Some(result) = self.pending.lock().take() else {
            return false;
        };

        match &result {
            Ok(()) => ctx.events.publish(ContactSent {
                from_email: self.controller.form.email.trim().to_string(),
            }),
            Err(e) => {
                ctx.events.publish(ContactFailed { reason: e.to_string() });
                self.last_failure = Some(e.clone());
            }
        }
        self.controller.finish(result);
        true
    }

    fn status_banner(&mut self, ui: &mut Ui, recipient: &str) {
        let (text, color) = match self.controller.status() {
            SubmitStatus::Success => (SUCCESS_MESSAGE.to_string(), success_color()),
            SubmitStatus::Error(reason) => {
                let text = match self.last_failure {
                    Some(ContactError::MissingField(_)) => format!("Please fill in every field: {}", reason),
                    _ => failure_message(recipient),
                };
                (text, error_color())
            }
            SubmitStatus::Idle | SubmitStatus::Submitting => return,
        };

        Frame::none()
            .fill(color.linear_multiply(0.15))
            .stroke(Stroke::new(1.0, color))
            .rounding(Rounding::same(8.0))
            .inner_margin(Margin::same(10.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(text).color(color));
                    if ui.small_button("✕").clicked() {
                        self.controller.reset_status();
                        self.last_failure = None;
                    }
                });
            });
    }
}

impl Section for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn title(&self) -> &str {
        "Contact"
    }

    fn on_frame_update(&mut self, ctx: &SiteContext, _dt: f32) {
        self.poll(ctx);
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        ui.add_space(60.0);
        let (title, tagline) = if ctx.is_mobile() {
            ("CONTACT", "Let's build something amazing together")
        } else {
            ("GET IN TOUCH", "Ready to bring your ideas to life?")
        };
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).heading().strong().color(palette::SKY));
            ui.label(RichText::new(tagline).color(palette::TEXT_DIM));
        });
        ui.add_space(20.0);

        let width = ui.available_width().min(640.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(width);
            Frame::none()
                .fill(palette::PANEL)
                .stroke(Stroke::new(1.0, palette::SKY.linear_multiply(0.4)))
                .rounding(Rounding::same(16.0))
                .inner_margin(Margin::same(24.0))
                .show(ui, |ui| {
                    let submitting = self.controller.is_submitting();
                    let form = &mut self.controller.form;

                    ui.label(RichText::new("Name").color(palette::SKY));
                    ui.add_enabled(!submitting, TextEdit::singleline(&mut form.name).hint_text("Your name").desired_width(f32::INFINITY));
                    ui.label(RichText::new("Email").color(palette::SKY));
                    ui.add_enabled(!submitting, TextEdit::singleline(&mut form.email).hint_text("your.email@example.com").desired_width(f32::INFINITY));
                    ui.label(RichText::new("Message").color(palette::SKY));
                    ui.add_enabled(
                        !submitting,
                        TextEdit::multiline(&mut form.message)
                            .hint_text("Tell me about your project...")
                            .desired_rows(5)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(12.0);

                    let label = if submitting {
                        "Sending...".to_string()
                    } else {
                        format!("{} Launch Message", icons::ROCKET)
                    };
                    let button = egui::Button::new(RichText::new(label).strong()).fill(palette::SKY.linear_multiply(0.3));
                    if ui.add_enabled(!submitting, button).clicked() {
                        if let Err(e) = self.submit(ctx, Some(ui.ctx().clone())) {
                            warn!("Contact form not sent: {}", e);
                        }
                    }
                    if submitting {
                        ui.spinner();
                    }

                    ui.add_space(8.0);
                    self.status_banner(ui, &ctx.config.contact.recipient);
                });
        });
        ui.add_space(60.0);
    }
}
