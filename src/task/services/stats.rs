//! Service layer combining task retrieval, the clock, and the flow engine.

use crate::task::{
    domain::{
        FlowError, FlowReport, TaskRecord, WindowBounds, WindowSelection, compute_flow,
        select_window,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task statistics.
#[derive(Debug, Error)]
pub enum TaskStatsError {
    /// The flow engine could not produce a report.
    #[error(transparent)]
    Flow(#[from] FlowError),
    /// Task retrieval failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task statistics operations.
pub type TaskStatsResult<T> = Result<T, TaskStatsError>;

/// Task statistics orchestration service.
///
/// Every call fetches a fresh snapshot; nothing is cached between calls.
#[derive(Clone)]
pub struct TaskStatsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStatsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task statistics service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task in the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatsError::Repository`] when retrieval fails.
    pub async fn all_tasks(&self) -> TaskStatsResult<Vec<TaskRecord>> {
        Ok(self.repository.all_tasks().await?)
    }

    /// Computes the cumulative flow up to the current clock instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatsError::Repository`] when retrieval fails and
    /// [`TaskStatsError::Flow`] when no report can be computed.
    pub async fn flow_report(&self, since: Option<DateTime<Utc>>) -> TaskStatsResult<FlowReport> {
        let tasks = match since {
            Some(cutoff) => self.repository.tasks_created_since(cutoff).await?,
            None => self.repository.all_tasks().await?,
        };
        let as_of = self.clock.utc();
        let report = compute_flow(&tasks, since, as_of)?;
        debug!(
            tasks = tasks.len(),
            window_days = report.window_days(),
            %as_of,
            "computed cumulative flow"
        );
        Ok(report)
    }

    /// Selects tasks created and completed strictly between `start` and
    /// `end`, defaulting to the current UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatsError::Repository`] when retrieval fails.
    pub async fn tasks_between(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> TaskStatsResult<WindowSelection> {
        let bounds = WindowBounds::resolve(start, end, self.clock.utc());
        let tasks = self.repository.all_tasks().await?;
        let selection = select_window(&tasks, bounds);
        debug!(
            start = %bounds.start(),
            end = %bounds.end(),
            created = selection.created_count(),
            completed = selection.completed_count(),
            "selected tasks in window"
        );
        Ok(selection)
    }
}
