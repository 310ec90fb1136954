//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 246, 240);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SURFACE: Color32 = Color32::from_rgb(241, 236, 228);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 41, 59);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 116, 139);
pub const ACCENT: Color32 = Color32::from_rgb(180, 83, 9);
pub const SAGE: Color32 = Color32::from_rgb(101, 130, 105);
pub const ROSE: Color32 = Color32::from_rgb(225, 29, 72);
pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

/// Map a backend style token such as `bg-sage-500` to a colour
pub fn token_color(token: &str) -> Color32 {
    if token.contains("sage") {
        SAGE
    } else if token.contains("rose") {
        ROSE
    } else if token.contains("indigo") {
        INDIGO
    } else {
        ACCENT
    }
}

/// Apply the light heritage theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_SECONDARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
