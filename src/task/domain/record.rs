//! Task record adapter over raw synced task documents.
//!
//! A document whose `doneAt` precedes its `createdAt`, even by a single
//! millisecond, does not convert into a [`TaskRecord`]. Such a task is left
//! out of every flow bucket and of the throughput and backlog rates.

use super::{TaskRecordError, day};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator value marking a stored document as a task.
pub const TASK_DOCUMENT_TYPE: &str = "Tasks";

/// Starred marker as stored: older documents use a flag, newer ones a
/// numeric star level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StarMarker {
    /// Boolean form.
    Flag(bool),
    /// Numeric form; any non-zero level counts as starred.
    Level(i64),
}

impl StarMarker {
    /// Returns whether the marker denotes a starred task.
    #[must_use]
    pub const fn is_starred(self) -> bool {
        match self {
            Self::Flag(flag) => flag,
            Self::Level(level) => level != 0,
        }
    }
}

/// Task document as stored in the document store.
///
/// Every field is optional at this level; defaults and validation are
/// applied when converting into a [`TaskRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTaskDocument {
    /// Document identifier.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Document type discriminator.
    pub db: Option<String>,
    /// Task title.
    pub title: Option<String>,
    /// Creation instant in milliseconds since the Unix epoch.
    pub created_at: Option<i64>,
    /// Completion flag.
    pub done: Option<bool>,
    /// Completion instant in milliseconds since the Unix epoch.
    pub done_at: Option<i64>,
    /// Starred marker.
    pub is_starred: Option<StarMarker>,
}

impl RawTaskDocument {
    /// Returns whether the discriminator marks this document as a task.
    #[must_use]
    pub fn is_task_document(&self) -> bool {
        self.db.as_deref() == Some(TASK_DOCUMENT_TYPE)
    }
}

/// Typed, read-only view of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    id: String,
    title: String,
    created_at: DateTime<Utc>,
    done: bool,
    done_at: Option<DateTime<Utc>>,
    is_starred: bool,
}

impl TaskRecord {
    /// Creates an open, unstarred task.
    #[must_use]
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            created_at,
            done: false,
            done_at: None,
            is_starred: false,
        }
    }

    /// Sets the document identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Marks the task done at `done_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::CompletedBeforeCreated`] when `done_at`
    /// precedes the creation instant.
    pub fn completed_at(mut self, done_at: DateTime<Utc>) -> Result<Self, TaskRecordError> {
        if done_at < self.created_at {
            return Err(TaskRecordError::CompletedBeforeCreated {
                created_at: self.created_at,
                done_at,
            });
        }
        self.done = true;
        self.done_at = Some(done_at);
        Ok(self)
    }

    /// Marks the task done without a completion instant.
    ///
    /// Such records occur in synced data; they never count as complete in a
    /// cumulative flow.
    #[must_use]
    pub fn marked_done_without_timestamp(mut self) -> Self {
        self.done = true;
        self.done_at = None;
        self
    }

    /// Marks the task as starred.
    #[must_use]
    pub const fn starred(mut self) -> Self {
        self.is_starred = true;
        self
    }

    /// Returns the document identifier (empty for synthetic records).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is flagged done.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the completion instant, if recorded.
    #[must_use]
    pub const fn done_at(&self) -> Option<DateTime<Utc>> {
        self.done_at
    }

    /// Returns whether the task is starred.
    #[must_use]
    pub const fn is_starred(&self) -> bool {
        self.is_starred
    }

    /// Returns whether the task existed at `instant`.
    #[must_use]
    pub fn is_created_by(&self, instant: DateTime<Utc>) -> bool {
        self.created_at <= instant
    }

    /// Returns whether the task was completed on or before `instant`.
    ///
    /// A done task without a completion instant is never complete.
    #[must_use]
    pub fn is_complete_by(&self, instant: DateTime<Utc>) -> bool {
        self.done && self.done_at.is_some_and(|done_at| done_at <= instant)
    }

    /// Days elapsed between creation and completion.
    ///
    /// Callers should check [`Self::done`] first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::MissingField`] when no completion instant
    /// is recorded.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "cycle time is reported as fractional days"
    )]
    pub fn cycle_time(&self) -> Result<f64, TaskRecordError> {
        let done_at = self.done_at.ok_or(TaskRecordError::MissingField("doneAt"))?;
        let elapsed_millis = done_at.signed_duration_since(self.created_at).num_milliseconds();
        Ok(elapsed_millis as f64 / day::MILLIS_PER_DAY as f64)
    }
}

impl TryFrom<RawTaskDocument> for TaskRecord {
    type Error = TaskRecordError;

    fn try_from(raw: RawTaskDocument) -> Result<Self, Self::Error> {
        let created_millis = raw
            .created_at
            .ok_or(TaskRecordError::MissingField("createdAt"))?;
        let created_at = day::from_millis("createdAt", created_millis)?;
        let done = raw.done.unwrap_or(false);
        let done_at = match raw.done_at {
            Some(millis) if done => Some(day::from_millis("doneAt", millis)?),
            _ => None,
        };

        let record = Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            created_at,
            done: false,
            done_at: None,
            is_starred: raw.is_starred.is_some_and(StarMarker::is_starred),
        };

        match (done, done_at) {
            (true, Some(instant)) => record.completed_at(instant),
            (true, None) => Ok(record.marked_done_without_timestamp()),
            (false, _) => Ok(record),
        }
    }
}
