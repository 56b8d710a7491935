//! Created-versus-completed selection over an arbitrary interval.

use super::{TaskRecord, day};
use chrono::{DateTime, Utc};

/// Open interval `(start, end)` used to select tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl WindowBounds {
    /// Creates bounds from explicit instants.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Fills in missing bounds: the start defaults to the UTC midnight of
    /// `now`, the end to one day after the start.
    #[must_use]
    pub fn resolve(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let resolved_start = start.unwrap_or_else(|| day::floor_to_day(now));
        let resolved_end = end.unwrap_or_else(|| day::add_days(resolved_start, 1));
        Self::new(resolved_start, resolved_end)
    }

    /// Returns the exclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether `instant` lies strictly inside the bounds.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start < instant && instant < self.end
    }
}

/// Tasks created and completed inside a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowSelection {
    /// Tasks whose creation instant lies inside the window.
    pub created_in_window: Vec<TaskRecord>,
    /// Tasks whose completion instant lies inside the window.
    pub completed_in_window: Vec<TaskRecord>,
}

impl WindowSelection {
    /// Returns the number of tasks created in the window.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created_in_window.len()
    }

    /// Returns the number of tasks completed in the window.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_in_window.len()
    }

    /// Returns whether more tasks were created than completed.
    #[must_use]
    pub fn is_backlog_growing(&self) -> bool {
        self.created_count() > self.completed_count()
    }

    /// Returns created minus completed; positive when the backlog grew.
    #[must_use]
    pub fn net_change(&self) -> i64 {
        let created = i64::try_from(self.created_count()).unwrap_or(i64::MAX);
        let completed = i64::try_from(self.completed_count()).unwrap_or(i64::MAX);
        created.saturating_sub(completed)
    }
}

/// Partitions `tasks` into those created and those completed inside
/// `bounds`.
///
/// A task without a completion instant is treated as completed at the Unix
/// epoch, so it only matches a window spanning the epoch.
#[must_use]
pub fn select_window(tasks: &[TaskRecord], bounds: WindowBounds) -> WindowSelection {
    let created_in_window = tasks
        .iter()
        .filter(|task| bounds.contains(task.created_at()))
        .cloned()
        .collect();
    let completed_in_window = tasks
        .iter()
        .filter(|task| bounds.contains(task.done_at().unwrap_or(DateTime::UNIX_EPOCH)))
        .cloned()
        .collect();

    WindowSelection {
        created_in_window,
        completed_in_window,
    }
}
