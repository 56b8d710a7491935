//! Wire types for the document store HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an `_all_docs` query.
#[derive(Debug, Serialize)]
pub(super) struct AllDocsRequest {
    pub(super) include_docs: bool,
}

/// Response of an `_all_docs` query.
#[derive(Debug, Deserialize)]
pub(super) struct AllDocsResponse {
    #[serde(default)]
    pub(super) rows: Vec<AllDocsRow>,
}

/// One row of an `_all_docs` response.
///
/// The document is kept untyped until its discriminator has been checked.
#[derive(Debug, Deserialize)]
pub(super) struct AllDocsRow {
    #[serde(default)]
    pub(super) id: String,
    pub(super) doc: Option<Value>,
}

/// Server welcome document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerInfo {
    /// Welcome banner, `"Welcome"` on CouchDB-compatible servers.
    pub couchdb: String,
    /// Server version.
    #[serde(default)]
    pub version: Option<String>,
    /// Vendor details.
    #[serde(default)]
    pub vendor: Option<VendorInfo>,
}

/// Server vendor details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VendorInfo {
    /// Vendor name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Database metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseInfo {
    /// Database name.
    pub db_name: String,
    /// Live document count.
    #[serde(default)]
    pub doc_count: u64,
    /// Deleted document count.
    #[serde(default)]
    pub doc_del_count: u64,
}
