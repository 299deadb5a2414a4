use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
    /// Width of the ring drawn around the focused component
    pub focus_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Launcher Dark".to_string(),
            dark_mode: true,
            focus_width: 3.0,
        }
    }
}

/// Apply the launcher theme. Sizes are scaled up for viewing from a distance.
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(12, 14, 18);
        let panel_bg = Color32::from_rgb(20, 23, 29);
        let widget_bg = Color32::from_rgb(30, 34, 42);
        let text_color = Color32::from_rgb(230, 232, 236);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = bg_color;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(48, 52, 60));
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(8.0);
    }

    // The engine owns focus, so egui's own focus highlight uses the accent
    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(theme.focus_width, accent_color());
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    style.spacing.item_spacing = egui::vec2(12.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.indent = 24.0;

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(32.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(16.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Stroke of the focus ring
pub fn focus_stroke() -> Stroke {
    Stroke::new(Theme::default().focus_width, accent_color())
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(255, 196, 64)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Dimmed text, e.g. for completed list entries
pub fn muted_color() -> Color32 {
    Color32::from_rgb(130, 134, 142)
}
