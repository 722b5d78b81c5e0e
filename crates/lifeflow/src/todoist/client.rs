//! Todoist REST API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use tracing::{debug, warn};

use super::models::{Label, Task, UpdateTaskBody};
use super::TaskService;
use crate::error::{FlowError, Result};
use crate::filter::Filter;

/// Base URL for the Todoist REST API.
pub const API_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Todoist REST client bound to one API token.
#[derive(Clone)]
pub struct TodoistClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TodoistClient {
    /// Create a client against the public Todoist API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers, proxies).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lifeflow/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(method = %method, url = %url, "Todoist request");
        self.client.request(method, url).bearer_auth(&self.token)
    }

    /// Send a request and decode a JSON body.
    async fn fetch<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FlowError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, body = %text, "Failed to parse response");
            FlowError::Serialization(e)
        })
    }

    /// Send a request whose response body is ignored.
    async fn execute(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(FlowError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl TaskService for TodoistClient {
    async fn list_labels(&self) -> Result<Vec<Label>> {
        let labels: Vec<Label> = self.fetch(self.request(Method::GET, "/labels")).await?;
        debug!(count = labels.len(), "Fetched labels");
        Ok(labels)
    }

    async fn filter_tasks(&self, filter: &Filter) -> Result<Vec<Task>> {
        let query = filter.to_string();
        let request = self
            .request(Method::GET, "/tasks")
            .query(&[("filter", query.as_str())]);
        let tasks: Vec<Task> = self.fetch(request).await?;
        debug!(filter = %query, count = tasks.len(), "Fetched tasks");
        Ok(tasks)
    }

    async fn update_labels(&self, task: &Task) -> Result<()> {
        let body = UpdateTaskBody {
            labels: &task.labels,
        };
        let request = self
            .request(Method::POST, &format!("/tasks/{}", task.id))
            .json(&body);
        self.execute(request).await
    }

    async fn close_task(&self, task: &Task) -> Result<()> {
        self.execute(self.request(Method::POST, &format!("/tasks/{}/close", task.id)))
            .await
    }

    async fn delete_task(&self, task: &Task) -> Result<()> {
        self.execute(self.request(Method::DELETE, &format!("/tasks/{}", task.id)))
            .await
    }
}
