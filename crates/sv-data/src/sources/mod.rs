//! Sales file sources

pub mod csv_source;
pub mod xlsx_source;

pub use csv_source::CsvSource;
pub use xlsx_source::XlsxSource;

use std::path::Path;
use std::sync::Arc;
use arrow::array::{Array, ArrayRef, Float64Array, Float64Builder, Int64Array, Int64Builder, StringArray, StringBuilder};
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use sv_core::{ColumnBinding, ColumnNames, Quantity, SalesRecord, SalesTable};

use crate::schema::{detect_quantity_type, sales_schema};
use crate::DataLoadError;

/// Rows shown in the debug preview of a loaded file
const PREVIEW_ROWS: usize = 5;

/// File extensions read as spreadsheets
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// A sales file fully read into one record batch of the bound columns
pub trait SalesSource {
    /// Schema of the bound sales columns
    fn schema(&self) -> Arc<Schema>;

    /// Header names the sales columns were bound to
    fn columns(&self) -> &ColumnNames;

    /// Sales rows in file order
    fn batch(&self) -> &RecordBatch;

    fn source_name(&self) -> &str;

    fn row_count(&self) -> usize {
        self.batch().num_rows()
    }

    /// Pretty-printed first rows, for debug logging
    fn preview(&self) -> Result<String, DataLoadError> {
        let rows = self.row_count().min(PREVIEW_ROWS);
        let formatted = arrow::util::pretty::pretty_format_batches(&[self.batch().slice(0, rows)])?;
        Ok(formatted.to_string())
    }

    /// Convert the batch into sales records, keeping row order and quantity type
    fn to_table(&self) -> Result<SalesTable, DataLoadError> {
        let batch = self.batch();
        let stores = string_column(batch, 0)?;
        let products = string_column(batch, 1)?;
        let quantities = batch.column(2);

        let mut records = Vec::with_capacity(batch.num_rows());
        for i in 0..batch.num_rows() {
            let quantity = if let Some(int_array) = quantities.as_any().downcast_ref::<Int64Array>() {
                Quantity::Int(int_array.value(i))
            } else if let Some(float_array) = quantities.as_any().downcast_ref::<Float64Array>() {
                Quantity::Float(float_array.value(i))
            } else {
                return Err(DataLoadError::Csv(format!(
                    "quantity column has unsupported type {:?}",
                    quantities.data_type()
                )));
            };

            records.push(SalesRecord::new(stores.value(i), products.value(i), quantity));
        }

        Ok(SalesTable::new(self.columns().clone(), records))
    }
}

/// Open a sales file, picking the reader from its extension.
///
/// Spreadsheet extensions go through calamine, everything else is read as CSV.
pub fn open_source(path: impl AsRef<Path>, binding: &ColumnBinding) -> Result<Box<dyn SalesSource>, DataLoadError> {
    let path = path.as_ref();
    if is_spreadsheet(path) {
        Ok(Box::new(XlsxSource::open(path, binding)?))
    } else {
        Ok(Box::new(CsvSource::open(path, binding)?))
    }
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            SPREADSHEET_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Raw cell text of the three bound columns, one entry per data row
#[derive(Debug, Default)]
pub(crate) struct RawColumns {
    pub stores: Vec<String>,
    pub products: Vec<String>,
    pub quantities: Vec<String>,
}

impl RawColumns {
    /// Detect the quantity type and build the typed batch
    pub(crate) fn into_batch(self, columns: &ColumnNames) -> Result<(Arc<Schema>, RecordBatch), DataLoadError> {
        let quantity_type = detect_quantity_type(&self.quantities)?;
        let schema = Arc::new(sales_schema(columns, quantity_type.clone()));

        let mut store_builder = StringBuilder::new();
        let mut product_builder = StringBuilder::new();
        for (store, product) in self.stores.iter().zip(&self.products) {
            store_builder.append_value(store);
            product_builder.append_value(product);
        }

        let quantity_array: ArrayRef = match quantity_type {
            DataType::Int64 => {
                let mut builder = Int64Builder::new();
                for (idx, value) in self.quantities.iter().enumerate() {
                    builder.append_value(parse_quantity(value, idx)?);
                }
                Arc::new(builder.finish())
            }
            _ => {
                let mut builder = Float64Builder::new();
                for (idx, value) in self.quantities.iter().enumerate() {
                    builder.append_value(parse_quantity(value, idx)?);
                }
                Arc::new(builder.finish())
            }
        };

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(store_builder.finish()) as ArrayRef,
                Arc::new(product_builder.finish()) as ArrayRef,
                quantity_array,
            ],
        )?;

        Ok((schema, batch))
    }
}

fn parse_quantity<T: std::str::FromStr>(value: &str, idx: usize) -> Result<T, DataLoadError> {
    value.trim().parse::<T>().map_err(|_| DataLoadError::InvalidQuantity {
        row: idx + 1,
        value: value.to_string(),
    })
}

fn string_column(batch: &RecordBatch, idx: usize) -> Result<&StringArray, DataLoadError> {
    batch.column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| DataLoadError::Csv(format!("column {} is not a string column", idx)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_picks_reader() {
        assert!(is_spreadsheet(Path::new("data/sales.xlsx")));
        assert!(is_spreadsheet(Path::new("Vendas.XLSX")));
        assert!(is_spreadsheet(Path::new("report.ods")));
        assert!(!is_spreadsheet(Path::new("data/sales.csv")));
        assert!(!is_spreadsheet(Path::new("sales")));
    }

    #[test]
    fn test_integer_quantities_survive_conversion() {
        let raw = RawColumns {
            stores: vec!["A".to_string()],
            products: vec!["Rope".to_string()],
            quantities: vec!["9007199254740993".to_string()],
        };
        let (schema, batch) = raw.into_batch(&ColumnNames::default()).unwrap();
        assert_eq!(schema.field(2).data_type(), &DataType::Int64);

        let quantities = batch.column(2).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(quantities.value(0), 9_007_199_254_740_993);
    }
}
