//! Portfolio content and site configuration
//!
//! Static content tables (projects, experience, social links, hero copy) and
//! the JSON-backed [`SiteConfig`].

pub mod catalog;
pub mod color;
pub mod config;

use thiserror::Error;

// Re-exports
pub use catalog::{
    Experience, ExperienceKind, Hero, NavLink, Project, SocialLink, EXPERIENCES, HERO, NAV_LINKS,
    PROJECTS, SOCIAL_LINKS, TECH_SKILLS,
};
pub use color::Rgb;
pub use config::{MotionConfig, SiteConfig};

/// Errors that can occur while loading content or configuration
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
