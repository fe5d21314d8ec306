//! Unified theme and color constants for the dashboard.
//!
//! Light palette: white cards on a pale grey canvas with an indigo accent.
//! All colors should be sourced from here to keep the cards consistent.

use egui::{Color32, Rounding, Stroke, Visuals};

/// Background colors for different layers
pub mod bg {
    use super::*;

    /// Window canvas behind the cards
    pub const CANVAS: Color32 = Color32::from_rgb(244, 246, 250);

    /// Sidebar background
    pub const SIDEBAR: Color32 = Color32::from_rgb(255, 255, 255);

    /// Card surfaces, dropdown trigger and popup
    pub const CARD: Color32 = Color32::WHITE;

    /// List rows inside the product card
    pub const ROW: Color32 = Color32::from_rgb(248, 249, 252);

    /// Counter display and grid tiles
    pub const TILE: Color32 = Color32::from_rgb(238, 240, 245);
}

/// Accent colors
pub mod accent {
    use super::*;

    /// Primary indigo used for the active menu item and avatar
    pub const INDIGO: Color32 = Color32::from_rgb(79, 70, 229);

    /// Highlight behind the currently selected dropdown option
    pub const SELECTED_OPTION: Color32 = Color32::from_rgb(238, 242, 255);
}

/// Text colors at different emphasis levels
pub mod text {
    use super::*;

    pub const PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);

    pub const SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);

    /// Empty state message
    pub const MUTED: Color32 = Color32::from_rgb(136, 136, 136);

    /// Text on indigo fills
    pub const ON_ACCENT: Color32 = Color32::WHITE;
}

/// Border colors
pub mod border {
    use super::*;

    /// Row separators inside the dropdown
    pub const SUBTLE: Color32 = Color32::from_rgb(238, 238, 238);

    /// Dropdown trigger and popup outline
    pub const DEFAULT: Color32 = Color32::from_rgb(204, 204, 204);
}

/// Status glyph colors
pub mod state {
    use super::*;

    pub const OK: Color32 = Color32::from_rgb(34, 197, 94);

    pub const BAD: Color32 = Color32::from_rgb(239, 68, 68);

    /// Dropdown chevron
    pub const CHEVRON: Color32 = Color32::from_rgb(154, 163, 178);
}

/// Corner radius shared by cards and controls
pub const CARD_ROUNDING: f32 = 10.0;
pub const CONTROL_ROUNDING: f32 = 6.0;

/// Helper to create a stroke with consistent styling
pub fn stroke(color: Color32, width: f32) -> Stroke {
    Stroke::new(width, color)
}

/// egui visuals for the light dashboard.
pub fn visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = bg::CANVAS;
    visuals.window_fill = bg::CARD;
    visuals.override_text_color = Some(text::PRIMARY);
    visuals.widgets.noninteractive.bg_stroke = stroke(border::SUBTLE, 1.0);
    visuals.widgets.inactive.rounding = Rounding::same(CONTROL_ROUNDING);
    visuals.widgets.hovered.rounding = Rounding::same(CONTROL_ROUNDING);
    visuals.widgets.active.rounding = Rounding::same(CONTROL_ROUNDING);
    visuals.selection.bg_fill = accent::SELECTED_OPTION;
    visuals.selection.stroke = stroke(accent::INDIGO, 1.0);
    visuals
}

/// Frame used for every dashboard card.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(bg::CARD)
        .rounding(Rounding::same(CARD_ROUNDING))
        .stroke(stroke(border::SUBTLE, 1.0))
        .inner_margin(egui::Margin::same(16.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_are_light() {
        let v = visuals();
        assert!(!v.dark_mode);
        assert_eq!(v.panel_fill, bg::CANVAS);
    }

    #[test]
    fn test_selected_option_matches_dropdown_highlight() {
        // #eef2ff
        assert_eq!(accent::SELECTED_OPTION, Color32::from_rgb(0xee, 0xf2, 0xff));
    }
}
