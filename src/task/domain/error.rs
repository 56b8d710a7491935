//! Error types for task record parsing and flow computation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while building or interrogating task records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRecordError {
    /// A field required by the requested operation is absent.
    #[error("task record is missing required field `{0}`")]
    MissingField(&'static str),

    /// A millisecond timestamp falls outside the representable range.
    #[error("field `{field}` holds an out-of-range timestamp: {value}")]
    InvalidTimestamp {
        /// Name of the offending document field.
        field: &'static str,
        /// Raw millisecond value.
        value: i64,
    },

    /// The completion instant precedes the creation instant.
    #[error("task completed at {done_at} before it was created at {created_at}")]
    CompletedBeforeCreated {
        /// Creation instant.
        created_at: DateTime<Utc>,
        /// Completion instant.
        done_at: DateTime<Utc>,
    },
}

/// Errors returned by the cumulative flow engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FlowError {
    /// No tasks remain to anchor the reporting window.
    #[error("nothing to report: no tasks in scope")]
    EmptyInput,

    /// The window between the first task day and the reference instant is
    /// shorter than one whole day.
    #[error("window too small: {window_days} whole day(s) between the first task and the reference instant")]
    DegenerateWindow {
        /// Whole days computed for the window.
        window_days: i64,
    },
}
