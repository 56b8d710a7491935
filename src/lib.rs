//! Taskflow: productivity statistics for synced task documents.
//!
//! This crate reads task documents from a CouchDB-compatible store and
//! derives a cumulative flow diagram, average daily throughput, and average
//! daily backlog from them.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure computation over task records with an injected
//!   reference instant
//! - **Ports**: Abstract trait interfaces for task retrieval
//! - **Adapters**: Document store and task API clients, in-memory storage,
//!   and report rendering
//!
//! # Modules
//!
//! - [`task`]: Task records, the cumulative flow engine, and reporting
//! - [`config`]: Startup configuration from the environment
//! - [`telemetry`]: Logging initialisation

pub mod config;
pub mod task;
pub mod telemetry;
