//! Main application entry point

use std::sync::Arc;
use eframe::egui;
use anyhow::{Context as _, Result};
use tracing::{error, info, Level};

use sv_core::{DashboardConfig, DashboardState};
use sv_data::load_dataset;
use sv_views::DashboardView;

mod theme;

/// Main application state
struct SalesViewerApp {
    /// Page with the store dropdown and chart
    dashboard: DashboardView,
}

impl SalesViewerApp {
    fn new(cc: &eframe::CreationContext<'_>, dashboard: DashboardView) -> Self {
        theme::apply_theme(&cc.egui_ctx);
        Self { dashboard }
    }
}

impl eframe::App for SalesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.ui(ui);
        });
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> Result<()> {
    let config = DashboardConfig::default();
    init_tracing(config.debug);

    info!("Starting store sales viewer");

    // Nothing can be served without the table
    let dataset = match load_dataset(&config) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load sales data: {}", e);
            return Err(e).with_context(|| format!("Failed to load {:?}", config.data_path));
        }
    };

    let state = DashboardState::new(Arc::new(dataset));
    let dashboard = DashboardView::new(state, config.page.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Store Sales",
        options,
        Box::new(move |cc| {
            Box::new(SalesViewerApp::new(cc, dashboard))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
