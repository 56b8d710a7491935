//! CouchDB-compatible document store adapter.
//!
//! Task documents live alongside other synced document types in one
//! database; the adapter reads every document and keeps the task-typed ones.

mod config;
mod models;
mod repository;

pub use config::{BasicCredentials, CloudantConfig};
pub use models::{DatabaseInfo, ServerInfo, VendorInfo};
pub use repository::CloudantTaskRepository;
