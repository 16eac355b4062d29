//! Dashboard configuration

use std::path::PathBuf;

/// Accepted header names for each required sales column.
///
/// Headers are matched after trimming, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    pub store: Vec<String>,
    pub product: Vec<String>,
    pub quantity: Vec<String>,
}

impl Default for ColumnBinding {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            store: names(&["ID Loja", "Store-ID", "Store ID", "store_id", "Store"]),
            product: names(&["Produto", "Product"]),
            quantity: names(&["Quantidade", "Quantity", "Qty"]),
        }
    }
}

/// Static text shown above the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub subtitle: String,
    pub note: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: "Store Sales".to_string(),
            subtitle: "Quantity of every product sold, split by store".to_string(),
            note: "Note: this chart shows units sold, not revenue.".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Sales file, relative to the working directory
    pub data_path: PathBuf,
    pub columns: ColumnBinding,
    /// Dropdown label of the "all stores" entry
    pub all_stores_label: String,
    pub page: PageText,
    /// Verbose logging
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sales.xlsx"),
            columns: ColumnBinding::default(),
            all_stores_label: "All Stores".to_string(),
            page: PageText::default(),
            debug: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();

        assert_eq!(config.data_path, PathBuf::from("data/sales.xlsx"));
        assert_eq!(config.all_stores_label, "All Stores");
        assert!(config.columns.store.iter().any(|name| name == "ID Loja"));
        assert!(config.columns.quantity.iter().any(|name| name == "Quantidade"));
    }
}
