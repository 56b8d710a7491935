//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use rstest::fixture;
use taskflow::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskRecord, day},
    services::TaskStatsService,
};

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used across in-memory tests.
pub type TestService = TaskStatsService<InMemoryTaskRepository, FixedClock>;

/// Reference instant shared by fixtures and services: 09:30 UTC on
/// 2024-03-15.
pub fn now() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::days(19_797) + TimeDelta::minutes(570)
}

/// UTC midnight `days` days before [`now`].
pub fn days_ago(days: i64) -> DateTime<Utc> {
    day::add_days(day::floor_to_day(now()), -days)
}

/// Provides an empty in-memory repository.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a service reading from `repo` with the clock at `instant`.
pub fn service_at(repo: &InMemoryTaskRepository, instant: DateTime<Utc>) -> TestService {
    TaskStatsService::new(Arc::new(repo.clone()), Arc::new(FixedClock(instant)))
}

/// Builds a service reading from `repo` with the clock at [`now`].
pub fn service_over(repo: &InMemoryTaskRepository) -> TestService {
    service_at(repo, now())
}

/// Open task created `created` days ago.
pub fn open(title: &str, created: i64) -> TaskRecord {
    TaskRecord::new(title, days_ago(created)).with_id(format!("task-{title}"))
}

/// Task created `created` days ago and completed `completed` days ago.
///
/// # Errors
///
/// Returns an error when the completion precedes the creation.
pub fn completed(title: &str, created: i64, completed: i64) -> Result<TaskRecord, eyre::Report> {
    Ok(open(title, created).completed_at(days_ago(completed))?)
}
