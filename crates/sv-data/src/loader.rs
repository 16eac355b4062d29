//! Startup load of the sales dataset

use sv_core::{DashboardConfig, SalesDataset};
use tracing::{debug, info};

use crate::sources::open_source;
use crate::DataLoadError;

/// Load the configured sales file and derive its store selector.
///
/// Any failure is final: no partial table is returned.
pub fn load_dataset(config: &DashboardConfig) -> Result<SalesDataset, DataLoadError> {
    info!("Loading sales data from {:?}", config.data_path);

    let source = open_source(&config.data_path, &config.columns)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!("First rows of {}:\n{}", source.source_name(), source.preview()?);
    }

    let table = source.to_table()?;
    let dataset = SalesDataset::new(table, config.all_stores_label.clone());

    info!(
        "Loaded {} rows from {} with {} stores",
        dataset.table.len(),
        source.source_name(),
        dataset.selector.len() - 1
    );

    Ok(dataset)
}
