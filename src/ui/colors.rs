//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Emphasized color for the simulated clock.
    pub const ACTIVE: Color32 = Color32::from_rgb(100, 180, 255);
}

/// Colors for the map canvas.
pub mod canvas {
    use super::Color32;

    /// Background around the map square.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Station markers.
    pub const STATION: Color32 = Color32::from_rgb(255, 0, 0);
    /// Station number labels.
    pub const STATION_LABEL: Color32 = Color32::from_rgb(255, 220, 220);
    /// Great-circle paths.
    pub const PATH: Color32 = Color32::from_rgb(255, 255, 0);
    /// Distance labels drawn next to paths.
    pub const DISTANCE_LABEL: Color32 = Color32::from_rgb(255, 255, 160);

    /// Label backdrop - requires alpha, use function.
    pub fn label_backdrop() -> Color32 {
        Color32::from_rgba_unmultiplied(0, 0, 0, 140)
    }

    /// Multiplicative tint applied to the map texture.
    pub fn daylight_tint(factor: f32) -> Color32 {
        Color32::from_gray((factor.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}
