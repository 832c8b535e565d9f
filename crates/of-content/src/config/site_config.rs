//! Site configuration loaded from JSON
//!
//! Every field has a default, so a partial file (or no file at all) yields a
//! usable configuration. The e-mail tokens can additionally be supplied
//! through environment variables, which take precedence over the file.

use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use of_core::ContactConfig;
use of_core::navigation::DEFAULT_SWIPE_THRESHOLD;

use crate::ContentError;

/// Environment variable naming a config file
pub const CONFIG_PATH_ENV: &str = "ORBITFOLIO_CONFIG";

pub const SERVICE_ID_ENV: &str = "ORBITFOLIO_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_ENV: &str = "ORBITFOLIO_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_ENV: &str = "ORBITFOLIO_EMAILJS_PUBLIC_KEY";

/// Animation timing and the responsive breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Keep the heavy entrance animations on narrow viewports
    pub animate_on_mobile: bool,

    /// Seconds between hero subtitle rotations
    pub subtitle_interval_secs: f32,

    /// Milliseconds per typed character
    pub typing_speed_ms: u64,

    /// Minimum horizontal drag, in points, that counts as a swipe
    pub swipe_threshold: f32,

    /// Widths strictly below this are treated as mobile
    pub mobile_breakpoint: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            animate_on_mobile: false,
            subtitle_interval_secs: 4.0,
            typing_speed_ms: 80,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            mobile_breakpoint: 768.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub motion: MotionConfig,
}

impl SiteConfig {
    /// Parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults when it is missing or broken.
    /// Environment overrides are applied either way.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }),
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides();
        config
    }

    /// Override the e-mail tokens from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Override the e-mail tokens from an arbitrary lookup. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (SERVICE_ID_ENV, &mut self.contact.service_id),
            (TEMPLATE_ID_ENV, &mut self.contact.template_id),
            (PUBLIC_KEY_ENV, &mut self.contact.public_key),
        ];

        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                debug!("{} set from environment", key);
                *slot = value;
            }
        }
    }

    /// Reject values that would stall or break the animations
    pub fn validate(&self) -> Result<(), ContentError> {
        let motion = &self.motion;
        if !(motion.subtitle_interval_secs > 0.0) {
            return Err(ContentError::InvalidValue(format!(
                "subtitle_interval_secs must be positive, got {}",
                motion.subtitle_interval_secs
            )));
        }
        if motion.typing_speed_ms == 0 {
            return Err(ContentError::InvalidValue("typing_speed_ms must be at least 1".into()));
        }
        if !(motion.swipe_threshold >= 0.0) {
            return Err(ContentError::InvalidValue(format!(
                "swipe_threshold must not be negative, got {}",
                motion.swipe_threshold
            )));
        }
        if !(motion.mobile_breakpoint > 0.0) {
            return Err(ContentError::InvalidValue(format!(
                "mobile_breakpoint must be positive, got {}",
                motion.mobile_breakpoint
            )));
        }
        Ok(())
    }
}
