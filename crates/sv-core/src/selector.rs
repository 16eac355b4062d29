//! Store selection values offered by the dropdown

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SalesTable;

/// A value picked in the store dropdown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreSelection {
    /// Do not filter by store
    All,
    /// Only rows of this store
    Store(String),
}

impl Default for StoreSelection {
    fn default() -> Self {
        StoreSelection::All
    }
}

/// Raised when a selection value is not one the selector offers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid store selection")]
pub struct InvalidSelectionError {
    pub value: String,
}

/// Ordered set of valid selections: distinct store IDs in first-seen order,
/// followed by the "all stores" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSelector {
    stores: IndexSet<String>,
    all_stores_label: String,
}

impl StoreSelector {
    /// Derive the selector from a loaded table
    pub fn from_table(table: &SalesTable, all_stores_label: impl Into<String>) -> Self {
        let stores = table
            .records()
            .iter()
            .map(|record| record.store_id.clone())
            .collect::<IndexSet<_>>();

        Self {
            stores,
            all_stores_label: all_stores_label.into(),
        }
    }

    /// Distinct store IDs, first-seen order
    pub fn store_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.stores.iter().map(String::as_str)
    }

    /// Every selectable value, in dropdown order (sentinel last)
    pub fn options(&self) -> Vec<StoreSelection> {
        self.stores
            .iter()
            .cloned()
            .map(StoreSelection::Store)
            .chain(std::iter::once(StoreSelection::All))
            .collect()
    }

    /// Number of selectable values, sentinel included
    pub fn len(&self) -> usize {
        self.stores.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn all_stores_label(&self) -> &str {
        &self.all_stores_label
    }

    /// Text shown for a selection in the dropdown
    pub fn label<'a>(&'a self, selection: &'a StoreSelection) -> &'a str {
        match selection {
            StoreSelection::All => &self.all_stores_label,
            StoreSelection::Store(store_id) => store_id,
        }
    }

    pub fn contains(&self, selection: &StoreSelection) -> bool {
        match selection {
            StoreSelection::All => true,
            StoreSelection::Store(store_id) => self.stores.contains(store_id),
        }
    }

    /// Map a raw control value onto a selection
    pub fn resolve(&self, value: &str) -> Result<StoreSelection, InvalidSelectionError> {
        if value == self.all_stores_label {
            Ok(StoreSelection::All)
        } else if self.stores.contains(value) {
            Ok(StoreSelection::Store(value.to_string()))
        } else {
            Err(InvalidSelectionError {
                value: value.to_string(),
            })
        }
    }
}
