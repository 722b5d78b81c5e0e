//! Task service seam and the Todoist REST implementation.

pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::Filter;

pub use client::TodoistClient;
pub use models::{Due, Label, Task};

/// Operations lifeflow needs from the remote task service.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// List every personal label.
    async fn list_labels(&self) -> Result<Vec<Label>>;

    /// Query tasks matching a filter expression.
    async fn filter_tasks(&self, filter: &Filter) -> Result<Vec<Task>>;

    /// Persist the task's current label set.
    async fn update_labels(&self, task: &Task) -> Result<()>;

    /// Mark a task complete.
    async fn close_task(&self, task: &Task) -> Result<()>;

    async fn delete_task(&self, task: &Task) -> Result<()>;
}
