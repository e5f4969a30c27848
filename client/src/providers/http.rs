//! HTTP implementation of the remote todo service provider.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::providers::TodoApi;
use crate::types::{CompletedPatch, TodoId, TodoRecord};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Remote todo service client backed by reqwest
///
/// Reads go through `/todos`; mutations go through the `/posts` collection,
/// matching the service contract this client was built against.
#[derive(Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Create a new client with an explicit base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Parse a response, mapping non-success statuses to [`ApiError::Status`]
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl TodoApi for HttpTodoApi {
    async fn fetch_todos(&self) -> Result<Vec<TodoRecord>> {
        let response = self
            .client
            .get(format!("{}/todos", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    async fn create_todo(&self, todo: &TodoRecord) -> Result<TodoRecord> {
        let response = self
            .client
            .post(format!("{}/posts", self.base_url))
            .json(todo)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    async fn update_todo(&self, todo: &TodoRecord) -> Result<TodoRecord> {
        let response = self
            .client
            .put(format!("{}/posts/{}", self.base_url, todo.id))
            .json(todo)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<CompletedPatch> {
        let response = self
            .client
            .put(format!("{}/posts/{id}", self.base_url))
            .json(&serde_json::json!({ "completed": completed }))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/posts/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}
