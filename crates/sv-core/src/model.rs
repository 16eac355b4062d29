//! Sales data model

use serde::{Deserialize, Serialize};

use crate::selector::{StoreSelection, StoreSelector};

/// Units sold, in the type the quantity column declares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    /// Bar height for plotting
    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Int(v) => v as f64,
            Quantity::Float(v) => v,
        }
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Quantity::Int(value.into())
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Int(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Float(value)
    }
}

/// One row of the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub store_id: String,
    pub product: String,
    /// Units sold, never a monetary amount
    pub quantity: Quantity,
}

impl SalesRecord {
    pub fn new(store_id: impl Into<String>, product: impl Into<String>, quantity: impl Into<Quantity>) -> Self {
        Self {
            store_id: store_id.into(),
            product: product.into(),
            quantity: quantity.into(),
        }
    }
}

/// Header names the three sales columns were bound to when loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub store: String,
    pub product: String,
    pub quantity: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            store: "Store-ID".to_string(),
            product: "Product".to_string(),
            quantity: "Quantity".to_string(),
        }
    }
}

/// Read-only sales table, rows kept in source order
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    columns: ColumnNames,
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Create a table from already loaded records
    pub fn new(columns: ColumnNames, records: Vec<SalesRecord>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows matching a selection, in table order.
    ///
    /// `All` returns every row. A store with no rows yields an empty subset.
    pub fn filter<'a>(&'a self, selection: &StoreSelection) -> Vec<&'a SalesRecord> {
        match selection {
            StoreSelection::All => self.records.iter().collect(),
            StoreSelection::Store(store_id) => self
                .records
                .iter()
                .filter(|record| &record.store_id == store_id)
                .collect(),
        }
    }
}

/// A loaded table together with the store selector derived from it
#[derive(Debug, Clone)]
pub struct SalesDataset {
    pub table: SalesTable,
    pub selector: StoreSelector,
}

impl SalesDataset {
    /// Wrap a table and derive its store selector
    pub fn new(table: SalesTable, all_stores_label: impl Into<String>) -> Self {
        let selector = StoreSelector::from_table(&table, all_stores_label);
        Self { table, selector }
    }
}
