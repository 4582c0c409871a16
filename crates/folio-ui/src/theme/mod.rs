use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

use folio_core::ThemePreference;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Folio Light".to_string(),
            dark_mode: false,
        }
    }
}

impl Theme {
    pub fn from_preference(pref: ThemePreference) -> Self {
        if pref.is_dark() {
            Self {
                name: "Folio Dark".to_string(),
                dark_mode: true,
            }
        } else {
            Self::default()
        }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    let accent = accent_color(theme.dark_mode);

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(24, 26, 31);
        let panel_bg = Color32::from_rgb(31, 34, 40);
        let widget_bg = Color32::from_rgb(41, 45, 52);
        let hover_color = Color32::from_rgb(52, 57, 66);
        let text_color = Color32::from_rgb(222, 224, 228);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    } else {
        let bg_color = Color32::from_rgb(248, 248, 246);
        let panel_bg = Color32::from_rgb(253, 253, 251);
        let widget_bg = Color32::from_rgb(240, 240, 237);
        let hover_color = Color32::from_rgb(230, 231, 227);
        let text_color = Color32::from_rgb(40, 42, 48);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }

    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Accent color for the active theme
pub fn accent_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(120, 160, 245)
    } else {
        Color32::from_rgb(52, 98, 218)
    }
}

/// Muted color for inactive indicators
pub fn muted_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_gray(110)
    } else {
        Color32::from_gray(170)
    }
}
