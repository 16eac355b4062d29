use std::path::PathBuf;

use sv_core::{render, DashboardConfig, DashboardState, Quantity, StoreSelection};
use sv_data::{load_dataset, DataLoadError};

fn sample_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data").join(file_name)
}

fn sample_config() -> DashboardConfig {
    DashboardConfig {
        data_path: sample_path("sales.xlsx"),
        ..Default::default()
    }
}

#[test]
fn sample_file_loads_with_store_selector() {
    let dataset = load_dataset(&sample_config()).unwrap();

    assert_eq!(dataset.table.len(), 12);
    assert_eq!(dataset.table.columns().store, "ID Loja");
    assert_eq!(
        dataset.selector.store_ids().collect::<Vec<_>>(),
        vec!["Shopping Morumbi", "Iguatemi Campinas", "Bourbon Shopping SP", "Norte Shopping"]
    );
    assert_eq!(dataset.selector.options().last(), Some(&StoreSelection::All));
}

#[test]
fn workbook_and_csv_export_agree() {
    let workbook = load_dataset(&sample_config()).unwrap();
    let csv = load_dataset(&DashboardConfig {
        data_path: sample_path("sales.csv"),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(workbook.table.records(), csv.table.records());
    assert_eq!(workbook.table.columns(), csv.table.columns());
    assert_eq!(workbook.selector, csv.selector);
}

#[test]
fn every_store_filter_is_exact() {
    let dataset = load_dataset(&sample_config()).unwrap();

    for store_id in dataset.selector.store_ids() {
        let chart = render(&dataset.table, &StoreSelection::Store(store_id.to_string()));
        let expected: Vec<_> = dataset
            .table
            .records()
            .iter()
            .filter(|r| r.store_id == store_id)
            .map(|r| (r.product.as_str(), r.store_id.as_str(), r.quantity))
            .collect();

        assert_eq!(chart.triples(), expected);
        assert_eq!(chart.groups, vec![store_id.to_string()]);
    }
}

#[test]
fn repeated_product_rows_keep_separate_bars() {
    let dataset = load_dataset(&sample_config()).unwrap();
    let chart = render(
        &dataset.table,
        &StoreSelection::Store("Shopping Morumbi".to_string()),
    );

    let swimsuits: Vec<Quantity> = chart
        .bars
        .iter()
        .filter(|bar| bar.product == "Sunga Listrado")
        .map(|bar| bar.quantity)
        .collect();
    assert_eq!(swimsuits, vec![Quantity::Int(5), Quantity::Int(2)]);
}

#[test]
fn dashboard_runs_from_loaded_dataset() {
    let dataset = load_dataset(&sample_config()).unwrap();
    let mut state = DashboardState::new(std::sync::Arc::new(dataset));

    assert_eq!(state.start().bar_count(), 12);
    assert_eq!(state.on_selection_changed("Norte Shopping").bar_count(), 2);
    assert_eq!(state.on_selection_changed("All Stores").bar_count(), 12);
}

#[test]
fn missing_file_is_fatal() {
    for path in ["does/not/exist.csv", "does/not/exist.xlsx"] {
        let config = DashboardConfig {
            data_path: PathBuf::from(path),
            ..Default::default()
        };

        assert!(matches!(load_dataset(&config), Err(DataLoadError::Io(_))));
    }
}
