//! The single-page sales dashboard

use egui::Ui;
use sv_core::{DashboardState, PageText, SelectionPhase};

use crate::controls::store_dropdown;
use crate::page::{page_header, status_line};
use crate::plots::GroupedBarChartView;

/// Header, store dropdown and the chart bound to it
pub struct DashboardView {
    state: DashboardState,
    page: PageText,
    chart_view: GroupedBarChartView,
}

impl DashboardView {
    /// Create the dashboard and render the default selection
    pub fn new(mut state: DashboardState, page: PageText) -> Self {
        if *state.phase() == SelectionPhase::Unselected {
            state.start();
        }

        Self {
            state,
            page,
            chart_view: GroupedBarChartView::new("sales_quantity_chart"),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        page_header(ui, &self.page);
        ui.separator();

        let dataset = self.state.dataset().clone();
        let current = self.state.selection().cloned().unwrap_or_default();
        if let Some(selection) = store_dropdown(ui, &dataset.selector, &current) {
            tracing::info!("Store selection changed to '{}'", dataset.selector.label(&selection));
            self.state.select(selection);
        }

        ui.add_space(6.0);

        match self.state.chart() {
            Some(chart) => {
                status_line(ui, &dataset.selector, chart);
                self.chart_view.ui(ui, chart);
            }
            None => {
                ui.label("No chart rendered yet");
            }
        }
    }
}
