//! Column binding and type detection for sales files

use arrow::datatypes::{DataType, Field, Schema};
use sv_core::{ColumnBinding, ColumnNames};

use crate::DataLoadError;

/// Positions of the three sales columns in a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub store: usize,
    pub product: usize,
    pub quantity: usize,
}

/// Bind the required sales columns against a header row.
///
/// Returns the column positions and the header names as found in the file.
pub fn bind_columns(
    headers: &[String],
    binding: &ColumnBinding,
) -> Result<(ColumnIndices, ColumnNames), DataLoadError> {
    let store = find_column(headers, &binding.store, "Store-ID")?;
    let product = find_column(headers, &binding.product, "Product")?;
    let quantity = find_column(headers, &binding.quantity, "Quantity")?;

    let names = ColumnNames {
        store: headers[store].trim().to_string(),
        product: headers[product].trim().to_string(),
        quantity: headers[quantity].trim().to_string(),
    };

    Ok((ColumnIndices { store, product, quantity }, names))
}

fn find_column(headers: &[String], accepted: &[String], column: &'static str) -> Result<usize, DataLoadError> {
    // Accepted names are tried in order so the preferred spelling wins
    accepted
        .iter()
        .find_map(|name| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name.trim()))
        })
        .ok_or_else(|| DataLoadError::MissingColumn {
            column,
            accepted: accepted.to_vec(),
            found: headers.to_vec(),
        })
}

/// Detect the declared type of the quantity column.
///
/// `Int64` when every value is an integer, `Float64` when every value is
/// numeric. Empty, non-numeric or negative values are rejected with their
/// 1-based data row.
pub fn detect_quantity_type(values: &[String]) -> Result<DataType, DataLoadError> {
    let mut is_int = true;

    for (idx, raw) in values.iter().enumerate() {
        let value = raw.trim();
        let invalid = || DataLoadError::InvalidQuantity {
            row: idx + 1,
            value: raw.clone(),
        };

        if value.parse::<i64>().is_ok() {
            if value.starts_with('-') && value != "-0" {
                return Err(invalid());
            }
            continue;
        }

        match value.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => is_int = false,
            _ => return Err(invalid()),
        }
    }

    Ok(if is_int { DataType::Int64 } else { DataType::Float64 })
}

/// Arrow schema of a loaded sales table
pub fn sales_schema(names: &ColumnNames, quantity_type: DataType) -> Schema {
    Schema::new(vec![
        Field::new(&names.store, DataType::Utf8, false),
        Field::new(&names.product, DataType::Utf8, false),
        Field::new(&names.quantity, quantity_type, false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bind_source_headers() {
        let headers = headers(&["Data", "ID Loja", "Produto", "Quantidade", "Valor Unitário"]);
        let (indices, names) = bind_columns(&headers, &ColumnBinding::default()).unwrap();

        assert_eq!(indices, ColumnIndices { store: 1, product: 2, quantity: 3 });
        assert_eq!(names.store, "ID Loja");
    }

    #[test]
    fn test_bind_ignores_case_and_padding() {
        let headers = headers(&[" quantity", "PRODUCT ", "store-id"]);
        let (indices, names) = bind_columns(&headers, &ColumnBinding::default()).unwrap();

        assert_eq!(indices, ColumnIndices { store: 2, product: 1, quantity: 0 });
        assert_eq!(names.quantity, "quantity");
        assert_eq!(names.product, "PRODUCT");
    }

    #[test]
    fn test_missing_column() {
        let headers = headers(&["Store-ID", "Quantity"]);
        let err = bind_columns(&headers, &ColumnBinding::default()).unwrap_err();

        match err {
            DataLoadError::MissingColumn { column, found, .. } => {
                assert_eq!(column, "Product");
                assert_eq!(found, headers);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_detect_quantity_type() {
        assert_eq!(detect_quantity_type(&headers(&["1", "12", "0"])).unwrap(), DataType::Int64);
        assert_eq!(detect_quantity_type(&headers(&["1", "2.5"])).unwrap(), DataType::Float64);
        assert_eq!(detect_quantity_type(&[]).unwrap(), DataType::Int64);
    }

    #[test]
    fn test_reject_bad_quantities() {
        for (values, bad_row) in [
            (headers(&["3", "", "1"]), 2),
            (headers(&["3", "two"]), 2),
            (headers(&["-4"]), 1),
            (headers(&["1", "2", "-0.5"]), 3),
        ] {
            match detect_quantity_type(&values) {
                Err(DataLoadError::InvalidQuantity { row, .. }) => assert_eq!(row, bad_row),
                other => panic!("expected invalid quantity, got {other:?}"),
            }
        }
    }
}
