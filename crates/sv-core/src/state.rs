//! Dashboard state driven by the store dropdown

use std::sync::Arc;

use crate::chart::{render, ChartSpec};
use crate::model::SalesDataset;
use crate::selector::StoreSelection;

/// Where the dashboard is in its selection lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Dataset loaded, nothing rendered yet
    Unselected,
    /// A selection is active and its chart is current
    Selected(StoreSelection),
}

/// Current selection and the chart rendered for it
pub struct DashboardState {
    dataset: Arc<SalesDataset>,
    phase: SelectionPhase,
    chart: Option<ChartSpec>,
}

impl DashboardState {
    /// Create the state for a loaded dataset
    pub fn new(dataset: Arc<SalesDataset>) -> Self {
        Self {
            dataset,
            phase: SelectionPhase::Unselected,
            chart: None,
        }
    }

    pub fn dataset(&self) -> &Arc<SalesDataset> {
        &self.dataset
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    /// Active selection, `None` before `start`
    pub fn selection(&self) -> Option<&StoreSelection> {
        match &self.phase {
            SelectionPhase::Unselected => None,
            SelectionPhase::Selected(selection) => Some(selection),
        }
    }

    /// Chart for the active selection, `None` before `start`
    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }

    /// Initial render with the default "all stores" selection
    pub fn start(&mut self) -> &ChartSpec {
        tracing::info!(
            "Initial render over {} rows, {} stores",
            self.dataset.table.len(),
            self.dataset.selector.len() - 1
        );
        self.apply(StoreSelection::All)
    }

    /// Handle a raw value coming from the selection control.
    ///
    /// Values the selector does not offer fall back to "all stores".
    pub fn on_selection_changed(&mut self, value: &str) -> &ChartSpec {
        let selection = match self.dataset.selector.resolve(value) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::warn!("{}, showing all stores instead", e);
                StoreSelection::All
            }
        };
        self.apply(selection)
    }

    /// Handle a typed selection picked in the dropdown
    pub fn select(&mut self, selection: StoreSelection) -> &ChartSpec {
        if self.dataset.selector.contains(&selection) {
            self.apply(selection)
        } else {
            tracing::warn!("Selection {:?} is not offered, showing all stores instead", selection);
            self.apply(StoreSelection::All)
        }
    }

    fn apply(&mut self, selection: StoreSelection) -> &ChartSpec {
        tracing::debug!("Selection changed to {:?}", selection);
        let chart = render(&self.dataset.table, &selection);
        self.phase = SelectionPhase::Selected(selection);
        self.chart.insert(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnNames, SalesRecord, SalesTable};

    fn state() -> DashboardState {
        let table = SalesTable::new(
            ColumnNames::default(),
            vec![
                SalesRecord::new("StoreA", "Widget", 5),
                SalesRecord::new("StoreB", "Widget", 3),
                SalesRecord::new("StoreA", "Gadget", 2),
            ],
        );
        DashboardState::new(Arc::new(SalesDataset::new(table, "All Stores")))
    }

    #[test]
    fn test_starts_unselected() {
        let state = state();

        assert_eq!(state.phase(), &SelectionPhase::Unselected);
        assert!(state.chart().is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_start_selects_all_stores() {
        let mut state = state();
        let bars = state.start().bar_count();

        assert_eq!(bars, 3);
        assert_eq!(state.selection(), Some(&StoreSelection::All));
    }

    #[test]
    fn test_selection_changes_rebuild_chart() {
        let mut state = state();
        state.start();

        assert_eq!(state.on_selection_changed("StoreB").bar_count(), 1);
        assert_eq!(
            state.phase(),
            &SelectionPhase::Selected(StoreSelection::Store("StoreB".to_string()))
        );

        assert_eq!(state.on_selection_changed("All Stores").bar_count(), 3);
        assert_eq!(state.select(StoreSelection::Store("StoreA".to_string())).bar_count(), 2);
    }

    #[test]
    fn test_invalid_selection_falls_back_to_all() {
        let mut state = state();
        state.start();
        state.on_selection_changed("StoreA");

        assert_eq!(state.on_selection_changed("StoreZ").bar_count(), 3);
        assert_eq!(state.selection(), Some(&StoreSelection::All));

        assert_eq!(state.select(StoreSelection::Store("StoreZ".to_string())).bar_count(), 3);
        assert_eq!(state.selection(), Some(&StoreSelection::All));
    }
}
