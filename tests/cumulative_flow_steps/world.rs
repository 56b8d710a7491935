//! Shared world state for cumulative flow BDD scenarios.

use chrono::{DateTime, Utc};
use rstest::fixture;
use taskflow::task::domain::{FlowError, FlowReport, TaskRecord, day::MILLIS_PER_DAY};

/// Scenario world for cumulative flow behaviour tests.
#[derive(Default)]
pub struct FlowWorld {
    pub tasks: Vec<TaskRecord>,
    pub last_result: Option<Result<FlowReport, FlowError>>,
}

impl FlowWorld {
    /// Returns the report from the last computation.
    ///
    /// # Errors
    ///
    /// Fails when nothing was computed or the computation failed.
    pub fn report(&self) -> Result<&FlowReport, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("flow computation failed: {err}")),
            None => Err(eyre::eyre!("flow was not computed in this scenario")),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FlowWorld {
    FlowWorld::default()
}

/// UTC midnight `n` days after the Unix epoch.
///
/// # Errors
///
/// Fails when the offset is out of range.
pub fn day(n: u32) -> Result<DateTime<Utc>, eyre::Report> {
    DateTime::from_timestamp_millis(i64::from(n) * MILLIS_PER_DAY)
        .ok_or_else(|| eyre::eyre!("day {n} out of range"))
}
