//! In-memory task service and scripted prompter for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::aspect::Aspect;
use crate::error::{FlowError, Result};
use crate::filter::Filter;
use crate::todoist::{Label, Task, TaskService};
use crate::workflow::{PlanMenu, PlanResponse, Prompter};

pub fn task(id: &str, content: &str) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        due: None,
        url: format!("https://todoist.com/showTask?id={id}"),
        labels: vec![],
        parent_id: None,
    }
}

fn server_error() -> FlowError {
    FlowError::Api {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[derive(Default)]
struct State {
    labels: Vec<Label>,
    tasks: Vec<Task>,
    /// Tasks returned for one exact filter string, overriding `tasks`.
    by_filter: Vec<(String, Vec<Task>)>,
    label_calls: usize,
    filters: Vec<String>,
    saved: Vec<Task>,
    save_attempts: usize,
    failing_saves: usize,
    closed: Vec<String>,
    deleted: Vec<String>,
    fail_close: bool,
    fail_delete: bool,
}

/// Records every call and answers from canned data.
#[derive(Default)]
pub struct FakeService {
    state: Mutex<State>,
}

impl FakeService {
    pub fn with_labels(names: &[&str]) -> Self {
        let service = Self::default();
        service.state.lock().unwrap().labels = names
            .iter()
            .enumerate()
            .map(|(i, name)| Label::new(format!("l{i}"), *name))
            .collect();
        service
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state.lock().unwrap().tasks = tasks;
    }

    pub fn set_tasks_for(&self, filter: &Filter, tasks: Vec<Task>) {
        self.state
            .lock()
            .unwrap()
            .by_filter
            .push((filter.to_string(), tasks));
    }

    pub fn fail_next_saves(&self, count: usize) {
        self.state.lock().unwrap().failing_saves = count;
    }

    /// Make every `close_task` call answer with a server error.
    pub fn fail_closes(&self) {
        self.state.lock().unwrap().fail_close = true;
    }

    /// Make every `delete_task` call answer with a server error.
    pub fn fail_deletes(&self) {
        self.state.lock().unwrap().fail_delete = true;
    }

    pub fn label_calls(&self) -> usize {
        self.state.lock().unwrap().label_calls
    }

    pub fn filters(&self) -> Vec<String> {
        self.state.lock().unwrap().filters.clone()
    }

    pub fn saved(&self) -> Vec<Task> {
        self.state.lock().unwrap().saved.clone()
    }

    pub fn save_attempts(&self) -> usize {
        self.state.lock().unwrap().save_attempts
    }

    pub fn closed(&self) -> Vec<String> {
        self.state.lock().unwrap().closed.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }
}

#[async_trait]
impl TaskService for FakeService {
    async fn list_labels(&self) -> Result<Vec<Label>> {
        let mut state = self.state.lock().unwrap();
        state.label_calls += 1;
        Ok(state.labels.clone())
    }

    async fn filter_tasks(&self, filter: &Filter) -> Result<Vec<Task>> {
        let query = filter.to_string();
        let mut state = self.state.lock().unwrap();
        state.filters.push(query.clone());
        let canned = state
            .by_filter
            .iter()
            .find(|(q, _)| *q == query)
            .map(|(_, tasks)| tasks.clone());
        Ok(canned.unwrap_or_else(|| state.tasks.clone()))
    }

    async fn update_labels(&self, task: &Task) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.save_attempts += 1;
        if state.failing_saves > 0 {
            state.failing_saves -= 1;
            return Err(server_error());
        }
        state.saved.push(task.clone());
        Ok(())
    }

    async fn close_task(&self, task: &Task) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_close {
            return Err(server_error());
        }
        state.closed.push(task.id.clone());
        Ok(())
    }

    async fn delete_task(&self, task: &Task) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(server_error());
        }
        state.deleted.push(task.id.clone());
        Ok(())
    }
}

/// Prompter that replays canned answers and records what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    aspect_answers: VecDeque<Vec<Label>>,
    plan_answers: VecDeque<PlanResponse>,
    asked_categories: Vec<String>,
    menus: Vec<PlanMenu>,
}

impl ScriptedPrompter {
    pub fn aspects(answers: Vec<Vec<Label>>) -> Self {
        Self {
            aspect_answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn plan(answers: Vec<PlanResponse>) -> Self {
        Self {
            plan_answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn asked_categories(&self) -> Vec<String> {
        self.asked_categories.clone()
    }

    pub fn menus(&self) -> Vec<PlanMenu> {
        self.menus.clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn choose_aspects(&mut self, category: &str, _aspects: &[Aspect]) -> Result<Vec<Label>> {
        self.asked_categories.push(category.to_string());
        Ok(self.aspect_answers.pop_front().unwrap_or_default())
    }

    fn choose_plan_action(&mut self, menu: &PlanMenu) -> Result<PlanResponse> {
        self.menus.push(menu.clone());
        Ok(self.plan_answers.pop_front().unwrap_or(PlanResponse::Skip))
    }
}
