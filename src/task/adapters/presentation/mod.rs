//! Rendering of flow reports for charts, spreadsheets, and JSON consumers.

mod chart;
mod csv;
mod summary;

pub use chart::ChartSeries;
pub use csv::{CSV_HEADER, render_csv, write_csv};
pub use summary::{DayRow, FlowSummary};
