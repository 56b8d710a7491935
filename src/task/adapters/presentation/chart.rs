//! Parallel series for plotting a cumulative flow diagram.

use chrono::NaiveDate;
use serde::Serialize;

use crate::task::domain::FlowReport;

/// One x-series of days and two y-series of counts, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Bucket days.
    pub dates: Vec<NaiveDate>,
    /// Cumulative incomplete counts.
    pub incomplete: Vec<usize>,
    /// Cumulative complete counts.
    pub complete: Vec<usize>,
}

impl ChartSeries {
    /// Builds the series from a report, in ascending day order.
    #[must_use]
    pub fn from_report(report: &FlowReport) -> Self {
        let mut series = Self {
            dates: Vec::with_capacity(report.window_days()),
            incomplete: Vec::with_capacity(report.window_days()),
            complete: Vec::with_capacity(report.window_days()),
        };
        for (day, bucket) in report.iter() {
            series.dates.push(day.date_naive());
            series.incomplete.push(bucket.cumulative_incomplete);
            series.complete.push(bucket.cumulative_complete);
        }
        series
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
