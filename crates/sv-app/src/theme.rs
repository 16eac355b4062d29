use egui::{Color32, Context, Rounding, Stroke, Style, Visuals};

/// Apply the application's dark theme
pub fn apply_theme(ctx: &Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    let bg_color = Color32::from_rgb(23, 23, 23);           // Very dark background
    let panel_bg = Color32::from_rgb(31, 31, 31);           // Panel background
    let widget_bg = Color32::from_rgb(40, 40, 40);          // Widget background
    let hover_color = Color32::from_rgb(50, 50, 50);        // Hover state
    let accent_color = Color32::from_rgb(99, 110, 250);     // Matches the first store color
    let text_color = Color32::from_rgb(220, 220, 220);      // Primary text

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.weak_bg_fill = widget_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = accent_color.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, accent_color);

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
