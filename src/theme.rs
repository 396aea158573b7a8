//! Dark panel theme with the default teal line colour as accent

use egui::Color32;

use crate::core::Rgb;

/// Panel palette
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PANEL: Color32 = Color32::from_rgb(18, 20, 21);          // #121415
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(28, 31, 32);       // #1C1F20
    pub const BG_HOVER: Color32 = Color32::from_rgb(40, 44, 46);          // #282C2E

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 230);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 150, 150);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 90);

    // === Accents ===
    pub const ACCENT: Color32 = Color32::from_rgb(0, 200, 160);           // #00C8A0
    pub const ERROR: Color32 = Color32::from_rgb(220, 90, 90);
    pub const BORDER: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 25);
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

pub fn to_rgb_array(c: Rgb) -> [u8; 3] {
    [c.r, c.g, c.b]
}

pub fn from_rgb_array([r, g, b]: [u8; 3]) -> Rgb {
    Rgb::new(r, g, b)
}

/// egui Visuals for the control panel
pub fn panel_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_ELEVATED;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.weak_bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.4);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
