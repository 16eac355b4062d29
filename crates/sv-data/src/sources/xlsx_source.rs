use std::path::{Path, PathBuf};
use std::sync::Arc;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use calamine::{open_workbook_auto, Data, Reader};
use sv_core::{ColumnBinding, ColumnNames};

use super::{RawColumns, SalesSource};
use crate::schema::bind_columns;
use crate::DataLoadError;

/// Spreadsheet sales source: the first worksheet, header on its first row
pub struct XlsxSource {
    path: PathBuf,
    schema: Arc<Schema>,
    columns: ColumnNames,
    batch: RecordBatch,
}

impl XlsxSource {
    /// Read the first worksheet of a workbook and keep only the bound sales columns
    pub fn open(path: impl AsRef<Path>, binding: &ColumnBinding) -> Result<Self, DataLoadError> {
        let path = path.as_ref().to_path_buf();
        // Surface a missing file as I/O rather than a workbook error
        std::fs::metadata(&path)?;

        let mut workbook = open_workbook_auto(&path)?;
        let sheet = workbook.sheet_names().first().cloned().unwrap_or_default();
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DataLoadError::Spreadsheet(format!("{:?} has no worksheets", path)))??;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let (indices, columns) = bind_columns(&headers, binding)?;
        tracing::debug!(
            "Bound columns store='{}' product='{}' quantity='{}' in sheet '{}' of {:?}",
            columns.store, columns.product, columns.quantity, sheet, path
        );

        let mut raw = RawColumns::default();
        for row in rows {
            if row.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }
            let field = |idx: usize| row.get(idx).map(cell_text).unwrap_or_default();
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

impl SalesSource for XlsxSource {
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
            .unwrap_or("unknown.xlsx")
    }
}

/// Cell text as the CSV reader would see it; whole floats print without a fraction
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
