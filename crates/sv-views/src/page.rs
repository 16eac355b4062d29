//! Static page scaffolding around the chart

use egui::{RichText, Ui};
use sv_core::{ChartSpec, PageText, StoreSelector};

/// Title, subtitle and the units note
pub fn page_header(ui: &mut Ui, page: &PageText) {
    ui.heading(RichText::new(&page.title).size(26.0).strong());
    ui.label(RichText::new(&page.subtitle).size(17.0));
    ui.add_space(4.0);
    ui.label(RichText::new(&page.note).italics().weak());
}

/// One-line summary of what the chart currently shows
pub fn status_text(selector: &StoreSelector, chart: &ChartSpec) -> String {
    format!(
        "Showing {}: {} across {} and {}",
        selector.label(&chart.selection),
        count_noun(chart.bar_count(), "bar"),
        count_noun(chart.categories.len(), "product"),
        count_noun(chart.groups.len(), "store")
    )
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn status_line(ui: &mut Ui, selector: &StoreSelector, chart: &ChartSpec) {
    ui.label(RichText::new(status_text(selector, chart)).small());
}
