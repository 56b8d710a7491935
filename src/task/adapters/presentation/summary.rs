//! Serialisable summary of a flow report.

use serde::Serialize;

use crate::task::domain::{FlowReport, day};

/// One bucket with its day rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    /// Bucket day.
    pub date: String,
    /// Cumulative incomplete count.
    pub incomplete: usize,
    /// Cumulative complete count.
    pub complete: usize,
}

/// Report rendered for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSummary {
    /// First bucket day.
    pub first_day: Option<String>,
    /// Last bucket day.
    pub last_day: Option<String>,
    /// Number of buckets.
    pub window_days: usize,
    /// Completed tasks per day.
    pub avg_daily_throughput: f64,
    /// Incomplete tasks per day.
    pub avg_daily_backlog: f64,
    /// Per-day buckets.
    pub days: Vec<DayRow>,
}

impl FlowSummary {
    /// Builds the summary from a report.
    #[must_use]
    pub fn from_report(report: &FlowReport) -> Self {
        Self {
            first_day: report.first_day().map(day::format_day),
            last_day: report.last_day().map(day::format_day),
            window_days: report.window_days(),
            avg_daily_throughput: report.avg_daily_throughput(),
            avg_daily_backlog: report.avg_daily_backlog(),
            days: report
                .iter()
                .map(|(bucket_day, bucket)| DayRow {
                    date: day::format_day(bucket_day),
                    incomplete: bucket.cumulative_incomplete,
                    complete: bucket.cumulative_complete,
                })
                .collect(),
        }
    }
}
