use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub accent: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Deep Space".to_string(),
            accent: palette::AMBER,
        }
    }
}

/// Named colors shared by every section
pub mod palette {
    use egui::Color32;

    pub const SPACE: Color32 = Color32::from_rgb(0, 0, 0);
    pub const NEBULA: Color32 = Color32::from_rgb(12, 10, 24);
    pub const PANEL: Color32 = Color32::from_rgb(20, 18, 32);
    pub const AMBER: Color32 = Color32::from_rgb(255, 170, 0);
    pub const ORANGE: Color32 = Color32::from_rgb(255, 107, 53);
    pub const SKY: Color32 = Color32::from_rgb(135, 206, 235);
    pub const STAR: Color32 = Color32::from_rgb(235, 235, 255);
    pub const TEXT: Color32 = Color32::from_rgb(225, 225, 235);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 150, 170);
}

/// Apply the dark space theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    let widget_bg = Color32::from_rgb(30, 28, 46);
    let hover_color = Color32::from_rgb(44, 40, 66);
    let border = Color32::from_rgb(70, 64, 96);

    visuals.window_fill = palette::PANEL;
    visuals.panel_fill = palette::SPACE;
    visuals.extreme_bg_color = palette::NEBULA;
    visuals.faint_bg_color = widget_bg;

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
    ] {
        widget.bg_fill = widget_bg;
        widget.bg_stroke = Stroke::new(1.0, border);
        widget.fg_stroke = Stroke::new(1.0, palette::TEXT);
        widget.rounding = Rounding::same(8.0);
    }
    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent);

    visuals.widgets.active.bg_fill = theme.accent.linear_multiply(0.4);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, theme.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.active.rounding = Rounding::same(8.0);

    visuals.selection.bg_fill = theme.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    visuals.hyperlink_color = theme.accent;

    visuals.window_shadow.extrusion = 16.0;
    visuals.popup_shadow.extrusion = 6.0;

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(30.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}

pub fn accent_color() -> Color32 {
    palette::AMBER
}

/// Banner color for a failed send
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Banner color for a delivered message
pub fn success_color() -> Color32 {
    Color32::from_rgb(80, 220, 120)
}

/// Convert a content color into an egui color
pub fn rgb(bytes: [u8; 3]) -> Color32 {
    Color32::from_rgb(bytes[0], bytes[1], bytes[2])
}
