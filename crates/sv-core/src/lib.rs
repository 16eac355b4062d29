//! Core functionality for the store sales viewer
//! 
//! This crate provides the sales domain model, the selection handler that
//! turns a store selection into a grouped bar chart description, and the
//! dashboard state driven by the store dropdown.

pub mod chart;
pub mod config;
pub mod model;
pub mod selector;
pub mod state;

// Re-export commonly used types
pub use chart::{render, BarMode, BarSpec, ChartSpec};
pub use config::{ColumnBinding, DashboardConfig, PageText};
pub use model::{ColumnNames, Quantity, SalesDataset, SalesRecord, SalesTable};
pub use selector::{InvalidSelectionError, StoreSelection, StoreSelector};
pub use state::{DashboardState, SelectionPhase};
