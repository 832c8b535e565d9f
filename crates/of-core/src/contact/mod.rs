//! Contact form state and e-mail request construction
//!
//! The form collects three free-text fields and, once the required fields are
//! present, produces an [`EmailRequest`] for an external [`EmailSender`].
//! Delivery outcome is a binary status; there is no retry.

mod sender;

pub use sender::{EmailSender, LoggingSender};

use serde::{Serialize, Deserialize};
use tracing::{info, warn};

use crate::error::ContactError;

/// Token values shipped in the default configuration
pub const PLACEHOLDER_SERVICE_ID: &str = "service_your_id";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "template_your_id";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "your_public_key";

/// E-mail service credentials plus the fixed recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_string(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            recipient: "john.chukka@gmail.com".to_string(),
        }
    }
}

impl ContactConfig {
    /// True once every token has been replaced with a real value
    pub fn is_configured(&self) -> bool {
        tokens_filled(&self.service_id, &self.template_id, &self.public_key)
    }
}

fn tokens_filled(service_id: &str, template_id: &str, public_key: &str) -> bool {
    let filled = |value: &str, placeholder: &str| !value.trim().is_empty() && value != placeholder;

    filled(service_id, PLACEHOLDER_SERVICE_ID)
        && filled(template_id, PLACEHOLDER_TEMPLATE_ID)
        && filled(public_key, PLACEHOLDER_PUBLIC_KEY)
}

/// The three user-entered fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check required-field presence. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Template parameters expected by the e-mail template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// One send request in the EmailJS REST shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(form: &ContactForm, config: &ContactConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                message: form.message.clone(),
                to_email: config.recipient.clone(),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        tokens_filled(&self.service_id, &self.template_id, &self.public_key)
    }

    /// JSON body for the REST endpoint
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Submission status shown by the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Drives the form through a single submission
#[derive(Debug, Default)]
pub struct ContactController {
    pub form: ContactForm,
    status: SubmitStatus,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and move to `Submitting`, returning the request to send
    pub fn begin_submit(&mut self, config: &ContactConfig) -> Result<EmailRequest, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }

        if let Err(e) = self.form.validate() {
            self.status = SubmitStatus::Error(e.to_string());
            return Err(e);
        }

        self.status = SubmitStatus::Submitting;
        Ok(EmailRequest::new(&self.form, config))
    }

    /// Record the delivery outcome. Success clears the form.
    pub fn finish(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                info!("contact message delivered");
                self.form.clear();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                warn!("contact message failed: {}", e);
                self.status = SubmitStatus::Error(e.to_string());
            }
        }
    }

    /// Back to idle, e.g. after the banner was dismissed
    pub fn reset_status(&mut self) {
        if !self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

        form.name = "Ada".to_string();
        form.email = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("email")));

        form.email = "ada@example.com".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));

        form.message = "hi".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_placeholder() {
        let config = ContactConfig::default();
        assert!(!config.is_configured());

        let config = ContactConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_def".to_string(),
            public_key: "pk_123".to_string(),
            ..ContactConfig::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_request_payload_shape() {
        let request = EmailRequest::new(&filled_form(), &ContactConfig::default());
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(value["service_id"], "service_your_id");
        assert_eq!(value["template_id"], "template_your_id");
        assert_eq!(value["user_id"], "your_public_key");
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["from_email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "Hello there");
        assert_eq!(value["template_params"]["to_email"], "john.chukka@gmail.com");
    }

    #[test]
    fn test_submit_success_clears_form() {
        let mut controller = ContactController::new();
        controller.form = filled_form();

        let request = controller.begin_submit(&ContactConfig::default()).unwrap();
        assert_eq!(request.template_params.from_name, "Ada");
        assert!(controller.is_submitting());

        controller.finish(Ok(()));
        assert_eq!(controller.status(), &SubmitStatus::Success);
        assert_eq!(controller.form, ContactForm::default());
    }

    #[test]
    fn test_submit_failure_keeps_form() {
        let mut controller = ContactController::new();
        controller.form = filled_form();

        controller.begin_submit(&ContactConfig::default()).unwrap();
        controller.finish(Err(ContactError::Delivery("timeout".to_string())));

        assert!(matches!(controller.status(), SubmitStatus::Error(msg) if msg.contains("timeout")));
        assert_eq!(controller.form, filled_form());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut controller = ContactController::new();
        controller.form = filled_form();

        controller.begin_submit(&ContactConfig::default()).unwrap();
        assert_eq!(
            controller.begin_submit(&ContactConfig::default()),
            Err(ContactError::AlreadySubmitting)
        );
        assert!(controller.is_submitting());

        // Cannot reset while a send is in flight
        controller.reset_status();
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_invalid_form_sets_error_status() {
        let mut controller = ContactController::new();
        let result = controller.begin_submit(&ContactConfig::default());

        assert_eq!(result, Err(ContactError::MissingField("name")));
        assert!(matches!(controller.status(), SubmitStatus::Error(_)));

        controller.reset_status();
        assert_eq!(controller.status(), &SubmitStatus::Idle);
    }
}
