//! Selection handler: filtered sales rows to a grouped bar chart description

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Quantity, SalesTable};
use crate::selector::StoreSelection;

/// How bars sharing a category are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarMode {
    /// Side by side inside the category slot
    Group,
}

/// One bar, produced from exactly one table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub product: String,
    pub store_id: String,
    pub quantity: Quantity,
    /// Index into `ChartSpec::categories`
    pub category: usize,
    /// Index into `ChartSpec::groups`
    pub group: usize,
}

/// Grouped bar chart: x = product, height = quantity, color = store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub selection: StoreSelection,
    pub bar_mode: BarMode,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Products in first-seen order
    pub categories: Vec<String>,
    /// Stores in first-seen order, which is also legend order
    pub groups: Vec<String>,
    /// One entry per subset row, in row order
    pub bars: Vec<BarSpec>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Bars drawn in the color of one store group
    pub fn bars_in_group(&self, group: usize) -> impl Iterator<Item = &BarSpec> + '_ {
        self.bars.iter().filter(move |bar| bar.group == group)
    }

    /// (product, store, quantity) for every bar, in bar order
    pub fn triples(&self) -> Vec<(&str, &str, Quantity)> {
        self.bars
            .iter()
            .map(|bar| (bar.product.as_str(), bar.store_id.as_str(), bar.quantity))
            .collect()
    }
}

/// Build the chart for a selection.
///
/// Every call recomputes from the full table. Rows sharing a
/// (product, store) pair are not summed: each keeps its own bar.
pub fn render(table: &SalesTable, selection: &StoreSelection) -> ChartSpec {
    let subset = table.filter(selection);

    let mut categories: Vec<String> = Vec::new();
    let mut groups: Vec<String> = Vec::new();
    let mut category_index: AHashMap<&str, usize> = AHashMap::new();
    let mut group_index: AHashMap<&str, usize> = AHashMap::new();
    let mut bars = Vec::with_capacity(subset.len());

    for record in subset {
        let category = *category_index.entry(record.product.as_str()).or_insert_with(|| {
            categories.push(record.product.clone());
            categories.len() - 1
        });
        let group = *group_index.entry(record.store_id.as_str()).or_insert_with(|| {
            groups.push(record.store_id.clone());
            groups.len() - 1
        });

        bars.push(BarSpec {
            product: record.product.clone(),
            store_id: record.store_id.clone(),
            quantity: record.quantity,
            category,
            group,
        });
    }

    tracing::debug!(
        "Rendered {:?}: {} bars over {} products and {} stores",
        selection,
        bars.len(),
        categories.len(),
        groups.len()
    );

    let columns = table.columns();
    ChartSpec {
        selection: selection.clone(),
        bar_mode: BarMode::Group,
        x_label: columns.product.clone(),
        y_label: columns.quantity.clone(),
        color_label: columns.store.clone(),
        categories,
        groups,
        bars,
    }
}
