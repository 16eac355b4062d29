//! Grouped bar chart implementation

use egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};
use sv_core::ChartSpec;

use super::colors::categorical_color;

/// Grouped bar chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChartConfig {
    /// Whether to show the store legend
    pub show_legend: bool,

    /// Whether to show grid
    pub show_grid: bool,

    /// Share of a product slot covered by its bars (0.0 to 1.0)
    pub slot_width: f64,

    /// Whether to write product names under their slot
    pub show_product_labels: bool,
}

impl Default for GroupedBarChartConfig {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            slot_width: 0.8,
            show_product_labels: true,
        }
    }
}

/// Center and width of a bar inside its product slot.
///
/// Groups split the slot evenly, so every bar of one store sits at the same
/// offset within each product.
pub fn bar_geometry(category: usize, group: usize, group_count: usize, slot_width: f64) -> (f64, f64) {
    let width = slot_width / group_count.max(1) as f64;
    let center = category as f64 - slot_width / 2.0 + width * (group as f64 + 0.5);
    (center, width)
}

/// Bar chart view drawing one colored series per store
pub struct GroupedBarChartView {
    id: String,
    pub config: GroupedBarChartConfig,
}

impl GroupedBarChartView {
    /// Create a new grouped bar chart view
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: GroupedBarChartConfig::default(),
        }
    }

    /// Build the bar series, one per store group, in legend order
    pub fn series(&self, spec: &ChartSpec) -> Vec<BarChart> {
        let group_count = spec.groups.len();

        spec.groups
            .iter()
            .enumerate()
            .map(|(group, store_id)| {
                let color = categorical_color(group);
                let bars = spec
                    .bars_in_group(group)
                    .map(|bar| {
                        let (center, width) = bar_geometry(bar.category, group, group_count, self.config.slot_width);
                        Bar::new(center, bar.quantity.as_f64())
                            .width(width)
                            .name(format!("{} / {}", bar.product, bar.store_id))
                            .fill(color)
                    })
                    .collect();

                BarChart::new(bars).name(store_id).color(color)
            })
            .collect()
    }

    pub fn ui(&mut self, ui: &mut Ui, spec: &ChartSpec) {
        if spec.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No rows for this selection").weak());
            });
            return;
        }

        let max_quantity = spec.bars.iter().map(|bar| bar.quantity.as_f64()).fold(0.0, f64::max);
        let label_room = if self.config.show_product_labels { max_quantity * 0.08 } else { 0.0 };

        let mut plot = Plot::new(&self.id)
            .show_grid(self.config.show_grid)
            .show_axes([false, true])
            .y_axis_label(&spec.y_label)
            .include_y(0.0)
            .include_y(-label_room)
            .include_y(max_quantity * 1.05)
            .include_x(-0.5)
            .include_x(spec.categories.len() as f64 - 0.5)
            .allow_scroll(false)
            .height((ui.available_height() - 24.0).max(120.0));

        if self.config.show_legend {
            plot = plot.legend(Legend::default());
        }

        let series = self.series(spec);
        let show_labels = self.config.show_product_labels;

        plot.show(ui, |plot_ui| {
            for chart in series {
                plot_ui.bar_chart(chart);
            }

            if show_labels {
                for (idx, product) in spec.categories.iter().enumerate() {
                    plot_ui.text(
                        Text::new(PlotPoint::new(idx as f64, 0.0), product.as_str())
                            .anchor(Align2::CENTER_TOP),
                    );
                }
            }
        });

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&spec.x_label).weak());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::{render, ColumnNames, Quantity, SalesRecord, SalesTable, StoreSelection};

    fn spec() -> ChartSpec {
        let table = SalesTable::new(
            ColumnNames::default(),
            vec![
                SalesRecord::new("StoreA", "Widget", 5),
                SalesRecord::new("StoreB", "Widget", 3),
                SalesRecord::new("StoreA", "Gadget", 2),
                SalesRecord::new("StoreA", "Widget", 1),
            ],
        );
        render(&table, &StoreSelection::All)
    }

    #[test]
    fn test_bar_geometry_splits_slot() {
        let (center, width) = bar_geometry(0, 0, 2, 0.8);
        assert!((width - 0.4).abs() < 1e-9);
        assert!((center + 0.2).abs() < 1e-9);

        let (center, _) = bar_geometry(3, 1, 2, 0.8);
        assert!((center - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_single_group_fills_slot() {
        let (center, width) = bar_geometry(1, 0, 1, 0.8);
        assert!((center - 1.0).abs() < 1e-9);
        assert!((width - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_series_per_store() {
        let view = GroupedBarChartView::new("sales");
        let series = view.series(&spec());

        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_duplicate_rows_share_position() {
        let spec = spec();
        let positions: Vec<(f64, Quantity)> = spec
            .bars_in_group(0)
            .filter(|bar| bar.product == "Widget")
            .map(|bar| (bar_geometry(bar.category, bar.group, spec.groups.len(), 0.8).0, bar.quantity))
            .collect();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].0, positions[1].0);
        assert_ne!(positions[0].1, positions[1].1);
    }

    #[test]
    fn test_empty_chart_draws_placeholder() {
        let table = SalesTable::new(ColumnNames::default(), vec![SalesRecord::new("A", "Cup", 1)]);
        let empty = render(&table, &StoreSelection::Store("B".to_string()));
        let mut view = GroupedBarChartView::new("sales");

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| view.ui(ui, &empty));
        });
    }
}
