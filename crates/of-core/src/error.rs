//! Error types for navigation and the contact form

use thiserror::Error;

/// Contract violations raised by an [`IndexCycler`](crate::navigation::IndexCycler).
///
/// Both variants are integration bugs in the calling UI code and are
/// reported immediately instead of being clamped away.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("item list must contain at least one item (got {0})")]
    InvalidLength(usize),

    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Errors that can occur while submitting the contact form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("a message is already being sent")]
    AlreadySubmitting,

    #[error("e-mail service is not configured")]
    NotConfigured,

    #[error("delivery failed: {0}")]
    Delivery(String),
}
