//! Color utilities for plots

use egui::Color32;

/// Get a categorical color from a palette, cycling past the end
pub fn categorical_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(99, 110, 250),   // Blue
        Color32::from_rgb(239, 85, 59),    // Red
        Color32::from_rgb(0, 204, 150),    // Green
        Color32::from_rgb(171, 99, 250),   // Purple
        Color32::from_rgb(255, 161, 90),   // Orange
        Color32::from_rgb(25, 211, 243),   // Cyan
        Color32::from_rgb(255, 102, 146),  // Pink
        Color32::from_rgb(182, 232, 128),  // Lime
        Color32::from_rgb(255, 151, 255),  // Magenta
        Color32::from_rgb(254, 203, 82),   // Yellow
    ];
    PALETTE[index % PALETTE.len()]
}
