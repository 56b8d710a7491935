//! Application services for task flow reporting.

mod stats;

pub use stats::{TaskStatsError, TaskStatsResult, TaskStatsService};
