use std::path::{Path, PathBuf};
use std::sync::Arc;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use csv::{ReaderBuilder, Trim};
use sv_core::{ColumnBinding, ColumnNames};

use super::{RawColumns, SalesSource};
use crate::schema::bind_columns;
use crate::DataLoadError;

/// CSV sales source, fully read into a single record batch
pub struct CsvSource {
    /// Path to the CSV file
    path: PathBuf,
    schema: Arc<Schema>,
    columns: ColumnNames,
    batch: RecordBatch,
}

impl CsvSource {
    /// Read a CSV file and keep only the bound sales columns
    pub fn open(path: impl AsRef<Path>, binding: &ColumnBinding) -> Result<Self, DataLoadError> {
        let path = path.as_ref().to_path_buf();
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_path(&path)?;

        // Get headers
        let headers: Vec<String> = csv_reader.headers()?.iter().map(|s| s.to_string()).collect();
        let (indices, columns) = bind_columns(&headers, binding)?;
        tracing::debug!(
            "Bound columns store='{}' product='{}' quantity='{}' in {:?}",
            columns.store, columns.product, columns.quantity, path
        );

        let mut raw = RawColumns::default();
        for result in csv_reader.records() {
            let record = result?;
            let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            raw.stores.push(field(indices.store));
            raw.products.push(field(indices.product));
            raw.quantities.push(field(indices.quantity));
        }

        let (schema, batch) = raw.into_batch(&columns)?;

        Ok(Self {
            path,
            schema,
            columns,
            batch,
        })
    }
}

impl SalesSource for CsvSource {
    fn schema(&self) -> Arc<Schema> {
        self.schema.clone()
    }

    fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    fn source_name(&self) -> &str {
        self.path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
    }
}
