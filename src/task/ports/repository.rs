//! Repository port for fetching task records from a document store.

use crate::task::domain::TaskRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Read-only task retrieval contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task-type document as a typed record.
    ///
    /// Documents that cannot be converted into a [`TaskRecord`] are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the store cannot be queried.
    async fn all_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>>;

    /// Returns tasks created at or after `since`.
    ///
    /// The default implementation filters [`Self::all_tasks`] client-side.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the store cannot be queried.
    async fn tasks_created_since(
        &self,
        since: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let tasks = self.all_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.created_at() >= since)
            .collect())
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store rejected the supplied credentials.
    #[error("document store rejected the credentials (HTTP {0})")]
    Unauthorized(u16),

    /// The store answered with a non-success status.
    #[error("document store returned HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response could not be decoded.
    #[error("failed to decode document store response: {0}")]
    Decode(String),

    /// The store could not be reached.
    #[error("document store unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// Local storage failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
