//! The lifeflow facade: aspect map cache plus aspect-aware task queries.

use std::sync::Arc;

use tracing::{debug, info};

use crate::aspect::AspectCategoryMap;
use crate::config::Config;
use crate::error::Result;
use crate::filter::{self, Filter};
use crate::retry::RetryPolicy;
use crate::todoist::{Task, TaskService, TodoistClient};

/// Aspect-aware view over one task service account.
pub struct LifeFlow<S> {
    service: S,
    aspects: Option<Arc<AspectCategoryMap>>,
    retry: RetryPolicy,
}

impl LifeFlow<TodoistClient> {
    /// Connect to Todoist with the configured token.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = TodoistClient::with_base_url(&config.token, &config.api_base)?;
        Ok(Self::new(client))
    }
}

impl<S: TaskService> LifeFlow<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            aspects: None,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// The aspect map, fetched on first use and cached afterwards.
    ///
    /// Repeated calls return the same `Arc` until [`Self::refresh_aspects`] or
    /// [`Self::invalidate_aspects`] is called.
    pub async fn list_aspects(&mut self) -> Result<Arc<AspectCategoryMap>> {
        match &self.aspects {
            Some(aspects) => Ok(Arc::clone(aspects)),
            None => self.refresh_aspects().await,
        }
    }

    /// Re-fetch labels and rebuild the aspect map.
    pub async fn refresh_aspects(&mut self) -> Result<Arc<AspectCategoryMap>> {
        let labels = self.service.list_labels().await?;
        let aspects = Arc::new(AspectCategoryMap::from_labels(&labels));
        info!(
            labels = labels.len(),
            categories = aspects.len(),
            "Built aspect map"
        );
        self.aspects = Some(Arc::clone(&aspects));
        Ok(aspects)
    }

    /// Drop the cached map so the next access re-fetches it.
    pub fn invalidate_aspects(&mut self) {
        self.aspects = None;
    }

    /// Top-level tasks that have no aspect of `category`.
    ///
    /// With `ignore_future`, only tasks due today, overdue, or undated count.
    /// An unknown category yields no tasks and no remote query.
    pub async fn tasks_missing_aspect(
        &mut self,
        category: &str,
        ignore_future: bool,
    ) -> Result<Vec<Task>> {
        let aspects = self.list_aspects().await?;
        let Some(filter) = filter::missing_aspect_query(aspects.get(category), ignore_future)
        else {
            debug!(category, "No aspects registered, nothing is missing");
            return Ok(Vec::new());
        };

        self.top_level_tasks(&filter).await
    }

    /// Top-level tasks that have at least one aspect of `category`.
    pub async fn tasks_with_aspect(&mut self, category: &str) -> Result<Vec<Task>> {
        let aspects = self.list_aspects().await?;
        let Some(filter) = filter::has_aspect_query(aspects.get(category)) else {
            debug!(category, "No aspects registered, no task can have one");
            return Ok(Vec::new());
        };

        self.top_level_tasks(&filter).await
    }

    /// Run a raw filter query. No nesting filter is applied.
    pub async fn tasks_by_filter(&self, filter: &Filter) -> Result<Vec<Task>> {
        self.service.filter_tasks(filter).await
    }

    /// Persist the task's labels, retrying transient failures.
    pub async fn save_task(&self, task: &Task) -> Result<()> {
        self.retry
            .run("save", || self.service.update_labels(task))
            .await
    }

    pub async fn complete_task(&self, task: &Task) -> Result<()> {
        self.service.close_task(task).await
    }

    pub async fn delete_task(&self, task: &Task) -> Result<()> {
        self.service.delete_task(task).await
    }

    // The filter grammar cannot express nesting depth, so it is applied here.
    async fn top_level_tasks(&self, filter: &Filter) -> Result<Vec<Task>> {
        let tasks = self.service.filter_tasks(filter).await?;
        Ok(tasks.into_iter().filter(Task::is_top_level).collect())
    }
}
