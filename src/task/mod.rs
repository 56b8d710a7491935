//! Task flow statistics.
//!
//! Turns a snapshot of synced task documents into a day-by-day cumulative
//! flow of complete and incomplete tasks, average throughput and backlog,
//! and created-versus-completed comparisons for arbitrary intervals. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the flow engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
