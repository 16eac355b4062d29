//! Plot views

pub mod bar;
pub mod colors;

pub use bar::{GroupedBarChartConfig, GroupedBarChartView};
pub use colors::categorical_color;
