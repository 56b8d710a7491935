//! Domain model for task flow statistics.
//!
//! Raw synced documents are normalised into [`TaskRecord`]s at the boundary;
//! everything downstream of that conversion is pure computation over
//! in-memory records with an explicitly supplied reference instant.

pub mod day;
mod error;
mod flow;
mod record;
mod window;

pub use error::{FlowError, TaskRecordError};
pub use flow::{DailyFlowBucket, FlowReport, compute_flow};
pub use record::{RawTaskDocument, StarMarker, TASK_DOCUMENT_TYPE, TaskRecord};
pub use window::{WindowBounds, WindowSelection, select_window};
