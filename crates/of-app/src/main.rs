//! Orbitfolio desktop entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui;
use tracing::{info, warn};

use of_content::config::CONFIG_PATH_ENV;
use of_content::SiteConfig;
use of_core::contact::LoggingSender;
use of_core::events::events::{ContactFailed, ContactSent, DeviceClassChanged, SelectionChanged};
use of_core::EventBus;
use of_ui::{apply_theme, Theme};

mod app;

use app::OrbitfolioApp;

/// `--config <path>` wins over the environment variable
fn config_path<I>(args: I, env_value: Option<String>) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

/// Log every application event
fn install_event_logging(events: &EventBus) {
    events.on::<SelectionChanged, _>(|e| {
        info!(surface = e.surface.label(), index = e.index, "selection changed");
    });
    events.on::<DeviceClassChanged, _>(|e| {
        info!(mobile = e.mobile, width = e.width, "device class changed");
    });
    events.on::<ContactSent, _>(|e| {
        info!(from = %e.from_email, "contact message sent");
    });
    events.on::<ContactFailed, _>(|e| {
        warn!(reason = %e.reason, "contact message failed");
    });
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let path = config_path(std::env::args().skip(1), std::env::var(CONFIG_PATH_ENV).ok());
    let config = SiteConfig::load_or_default(path.as_deref());
    if !config.contact.is_configured() {
        warn!("E-mail tokens are placeholders; the contact form will report failures");
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    let events = EventBus::new();
    install_event_logging(&events);

    let app = OrbitfolioApp::new(config, events, Arc::new(LoggingSender), runtime)?;

    info!("Starting Orbitfolio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Orbitfolio",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, &Theme::default());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
