//! E-mail delivery seam

use tracing::info;

use super::EmailRequest;
use crate::error::ContactError;

/// External e-mail delivery service
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one request. No retries are attempted by callers.
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError>;
}

/// Sender that logs the outgoing payload instead of performing HTTP.
///
/// Requests still carrying placeholder tokens are refused so the form shows
/// its fallback banner.
#[derive(Debug, Default, Clone)]
pub struct LoggingSender;

#[async_trait::async_trait]
impl EmailSender for LoggingSender {
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError> {
        if !request.is_configured() {
            return Err(ContactError::NotConfigured);
        }

        let body = request
            .to_json()
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        info!(service = %request.service_id, template = %request.template_id, "sending contact e-mail: {}", body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactConfig, ContactForm};

    fn form() -> ContactForm {
        ContactForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            message: "Ping".to_string(),
        }
    }

    #[tokio::test]
    async fn test_placeholder_tokens_refused() {
        let request = EmailRequest::new(&form(), &ContactConfig::default());
        assert_eq!(LoggingSender.send(&request).await, Err(ContactError::NotConfigured));
    }

    #[tokio::test]
    async fn test_configured_request_sent() {
        let config = ContactConfig {
            service_id: "service_real".to_string(),
            template_id: "template_real".to_string(),
            public_key: "key_real".to_string(),
            ..ContactConfig::default()
        };
        let request = EmailRequest::new(&form(), &config);
        assert_eq!(LoggingSender.send(&request).await, Ok(()));
    }
}
