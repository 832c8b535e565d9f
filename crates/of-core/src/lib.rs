//! Core functionality for the portfolio
//!
//! Navigation state for every carousel-like surface, swipe interpretation,
//! the site event bus and the contact form. Nothing here depends on a UI
//! toolkit or on the window size.

pub mod contact;
pub mod error;
pub mod events;
pub mod navigation;

// Re-export commonly used types
pub use contact::{ContactConfig, ContactController, ContactForm, EmailRequest, EmailSender, SubmitStatus};
pub use error::{ContactError, NavigationError};
pub use events::{EventBus, SelectionForwarder};
pub use navigation::{
    Carousel, IndexCycler, NavigationCommand, SelectionContext, SelectionSubscriber,
    Surface, SwipeDecision, SwipeGestureInterpreter,
};
