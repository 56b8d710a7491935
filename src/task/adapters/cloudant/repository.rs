//! HTTP-backed task repository over a CouchDB-compatible document store.
//!
//! Task documents that fail conversion, including those completed before
//! they were created, are skipped with a warning and never reach the flow
//! report.

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::CloudantConfig;
use super::models::{AllDocsRequest, AllDocsResponse, DatabaseInfo, ServerInfo};
use crate::task::{
    domain::{RawTaskDocument, TASK_DOCUMENT_TYPE, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Task repository reading the `_all_docs` view of one database.
#[derive(Debug, Clone)]
pub struct CloudantTaskRepository {
    client: reqwest::Client,
    config: CloudantConfig,
}

impl CloudantTaskRepository {
    /// Builds a repository and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: CloudantConfig) -> TaskRepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TaskRepositoryError::transport)?;
        Ok(Self { client, config })
    }

    /// Returns the connection settings.
    #[must_use]
    pub const fn config(&self) -> &CloudantConfig {
        &self.config
    }

    /// Fetches the server welcome document.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn server_information(&self) -> TaskRepositoryResult<ServerInfo> {
        let url = format!("{}/", self.config.base_url());
        self.send_json(self.client.get(url)).await
    }

    /// Fetches metadata for the configured database.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn database_information(&self) -> TaskRepositoryResult<DatabaseInfo> {
        self.send_json(self.client.get(self.database_url())).await
    }

    fn database_url(&self) -> String {
        format!("{}/{}", self.config.base_url(), self.config.database())
    }

    fn authorised(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.config.credentials() {
            Some(credentials) => {
                builder.basic_auth(credentials.username(), Some(credentials.password()))
            }
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> TaskRepositoryResult<T> {
        let response = self
            .authorised(builder)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TaskRepositoryError::Unauthorized(status.as_u16()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaskRepositoryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(TaskRepositoryError::transport)?;
        serde_json::from_slice(&bytes).map_err(|err| TaskRepositoryError::Decode(err.to_string()))
    }
}

#[async_trait]
impl TaskRepository for CloudantTaskRepository {
    async fn all_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let url = format!("{}/_all_docs", self.database_url());
        let request = self
            .client
            .post(url)
            .json(&AllDocsRequest { include_docs: true });
        let response: AllDocsResponse = self.send_json(request).await?;

        let row_count = response.rows.len();
        let tasks: Vec<TaskRecord> = response
            .rows
            .into_iter()
            .filter_map(|row| row.doc.and_then(|doc| decode_task(&row.id, doc)))
            .collect();

        debug!(
            database = self.config.database(),
            rows = row_count,
            tasks = tasks.len(),
            "fetched task documents"
        );
        Ok(tasks)
    }
}

fn is_task_document(doc: &Value) -> bool {
    doc.get("db").and_then(Value::as_str) == Some(TASK_DOCUMENT_TYPE)
}

fn decode_task(row_id: &str, doc: Value) -> Option<TaskRecord> {
    if !is_task_document(&doc) {
        return None;
    }
    let raw = serde_json::from_value::<RawTaskDocument>(doc)
        .inspect_err(|err| {
            warn!(
                document = row_id,
                error = %err,
                "skipping task document with unexpected shape"
            );
        })
        .ok()?;
    TaskRecord::try_from(raw)
        .inspect_err(|err| {
            warn!(
                document = row_id,
                error = %err,
                "skipping malformed task document"
            );
        })
        .ok()
}
