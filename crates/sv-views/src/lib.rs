//! View system for the store sales viewer

mod controls;
mod dashboard;
mod page;
pub mod plots;

pub use controls::store_dropdown;
pub use dashboard::DashboardView;
pub use page::{page_header, status_line};
pub use plots::{GroupedBarChartConfig, GroupedBarChartView};
