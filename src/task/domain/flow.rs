//! Cumulative flow engine.
//!
//! Derives, for every day between the earliest task's creation day and a
//! reference instant, how many tasks existed and how many of those were
//! complete, together with average daily throughput and backlog.

use super::{FlowError, TaskRecord, day};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Cumulative counts for one day boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyFlowBucket {
    /// Tasks created by the day that were not complete by the day.
    pub cumulative_incomplete: usize,
    /// Tasks created by the day that were complete by the day.
    pub cumulative_complete: usize,
}

impl DailyFlowBucket {
    /// Tallies tasks created on or before `day`.
    ///
    /// `tasks` must be sorted by creation instant.
    fn tally(tasks: &[&TaskRecord], day: DateTime<Utc>) -> Self {
        tasks
            .iter()
            .take_while(|task| task.is_created_by(day))
            .fold(Self::default(), |mut bucket, task| {
                if task.is_complete_by(day) {
                    bucket.cumulative_complete += 1;
                } else {
                    bucket.cumulative_incomplete += 1;
                }
                bucket
            })
    }

    /// Returns the number of tasks that existed on the day.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.cumulative_incomplete + self.cumulative_complete
    }
}

/// Output of [`compute_flow`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReport {
    cumulative_flow: BTreeMap<DateTime<Utc>, DailyFlowBucket>,
    avg_daily_throughput: f64,
    avg_daily_backlog: f64,
}

impl FlowReport {
    /// Returns the per-day buckets keyed by UTC midnight, ascending.
    #[must_use]
    pub const fn cumulative_flow(&self) -> &BTreeMap<DateTime<Utc>, DailyFlowBucket> {
        &self.cumulative_flow
    }

    /// Returns completed tasks per day over the window.
    #[must_use]
    pub const fn avg_daily_throughput(&self) -> f64 {
        self.avg_daily_throughput
    }

    /// Returns incomplete tasks per day over the window.
    #[must_use]
    pub const fn avg_daily_backlog(&self) -> f64 {
        self.avg_daily_backlog
    }

    /// Returns the number of day buckets.
    #[must_use]
    pub fn window_days(&self) -> usize {
        self.cumulative_flow.len()
    }

    /// Returns the first day of the window.
    #[must_use]
    pub fn first_day(&self) -> Option<DateTime<Utc>> {
        self.cumulative_flow.keys().next().copied()
    }

    /// Returns the last day of the window.
    #[must_use]
    pub fn last_day(&self) -> Option<DateTime<Utc>> {
        self.cumulative_flow.keys().next_back().copied()
    }

    /// Returns the bucket for `day`, if it lies in the window.
    #[must_use]
    pub fn bucket(&self, day: DateTime<Utc>) -> Option<&DailyFlowBucket> {
        self.cumulative_flow.get(&day)
    }

    /// Iterates over `(day, bucket)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, &DailyFlowBucket)> {
        self.cumulative_flow.iter().map(|(day, bucket)| (*day, bucket))
    }
}

/// Computes the cumulative flow of `tasks` up to `as_of`.
///
/// Tasks created before `since` are dropped first; the window is then
/// anchored on the UTC day of the earliest remaining creation instant and
/// spans the whole days up to `as_of`.
///
/// # Errors
///
/// Returns [`FlowError::EmptyInput`] when no task remains after filtering,
/// and [`FlowError::DegenerateWindow`] when `as_of` lies less than one whole
/// day after the first day.
pub fn compute_flow(
    tasks: &[TaskRecord],
    since: Option<DateTime<Utc>>,
    as_of: DateTime<Utc>,
) -> Result<FlowReport, FlowError> {
    let mut in_scope: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| since.is_none_or(|cutoff| task.created_at() >= cutoff))
        .collect();
    in_scope.sort_unstable_by_key(|task| task.created_at());

    let earliest = in_scope.first().ok_or(FlowError::EmptyInput)?;
    let first_day = day::floor_to_day(earliest.created_at());
    let window_days = day::whole_days_between(first_day, as_of);
    if window_days <= 0 {
        return Err(FlowError::DegenerateWindow { window_days });
    }

    let cumulative_flow = (0..window_days)
        .map(|offset| {
            let bucket_day = day::add_days(first_day, offset);
            (bucket_day, DailyFlowBucket::tally(&in_scope, bucket_day))
        })
        .collect();

    let completed = in_scope.iter().filter(|task| task.done()).count();
    let outstanding = in_scope.len() - completed;

    Ok(FlowReport {
        cumulative_flow,
        avg_daily_throughput: per_day(completed, window_days),
        avg_daily_backlog: per_day(outstanding, window_days),
    })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "daily rates are approximate averages"
)]
fn per_day(count: usize, window_days: i64) -> f64 {
    count as f64 / window_days as f64
}
