//! CSV rendering of a cumulative flow report.

use std::io::{self, Write};

use crate::task::domain::{FlowReport, day};

/// Header row columns.
pub const CSV_HEADER: [&str; 3] = ["Date", "Incomplete", "Complete"];

/// Renders the report as CSV text, one `YYYY-MM-DD` row per bucket.
#[must_use]
pub fn render_csv(report: &FlowReport) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(report.iter().map(|(bucket_day, bucket)| {
            format!(
                "{},{},{}",
                day::format_day(bucket_day),
                bucket.cumulative_incomplete,
                bucket.cumulative_complete
            )
        }))
        .map(|line| line + "\n")
        .collect()
}

/// Writes the CSV rendering of the report to `out`.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_csv(report: &FlowReport, out: &mut impl Write) -> io::Result<()> {
    out.write_all(render_csv(report).as_bytes())
}
