//! Selection controls

use egui::{ComboBox, Ui};
use sv_core::{StoreSelection, StoreSelector};

/// Store dropdown over every selector value, sentinel last.
///
/// Returns the new selection when the user picked a different entry.
pub fn store_dropdown(ui: &mut Ui, selector: &StoreSelector, current: &StoreSelection) -> Option<StoreSelection> {
    let mut selected = current.clone();

    ui.horizontal(|ui| {
        ui.label("Store:");
        ComboBox::from_id_source("store_selector")
            .selected_text(selector.label(current))
            .width(240.0)
            .show_ui(ui, |ui| {
                for option in selector.options() {
                    let label = selector.label(&option).to_string();
                    ui.selectable_value(&mut selected, option, label);
                }
            });
    });

    (&selected != current).then_some(selected)
}
