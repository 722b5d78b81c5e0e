//! Assign time slots to tasks while keeping an eye on slot load.

use std::collections::HashMap;
use std::fmt;

use futures::future::try_join_all;
use tracing::{info, warn};

use super::{actionable, Prompter};
use crate::aspect::Aspect;
use crate::error::{FlowError, Result};
use crate::filter::slot_load_query;
use crate::flow::LifeFlow;
use crate::todoist::{Label, TaskService};
use crate::ui;

/// Aspect category whose leaves are the time slots.
pub const DEFAULT_SLOT_CATEGORY: &str = "time";

/// Number of menu rows shown at once.
pub const PAGE_SIZE: usize = 10;

/// The user's answer to "When will you do this?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanResponse {
    Skip,
    CompleteTask,
    DeleteTask,
    AssignSlot(Label),
}

/// One row of the planning menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Choice { name: String, response: PlanResponse },
    Separator,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice { name, .. } => f.write_str(name),
            Self::Separator => f.write_str("──────────────"),
        }
    }
}

/// The planning menu: fixed actions, a separator, then one row per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanMenu {
    pub entries: Vec<MenuEntry>,
}

impl PlanMenu {
    pub fn new(slots: &[Aspect], counter: &SlotCounter) -> Self {
        let mut entries = vec![
            MenuEntry::Choice {
                name: "Skip for now".to_string(),
                response: PlanResponse::Skip,
            },
            MenuEntry::Choice {
                name: "I've already done this.".to_string(),
                response: PlanResponse::CompleteTask,
            },
            MenuEntry::Choice {
                name: "I've decided not to do this.".to_string(),
                response: PlanResponse::DeleteTask,
            },
            MenuEntry::Separator,
        ];

        entries.extend(slots.iter().map(|slot| MenuEntry::Choice {
            name: format!("{} ({})", slot.leaf, counter.get(&slot.label)),
            response: PlanResponse::AssignSlot(slot.label.clone()),
        }));

        Self { entries }
    }

    /// Response for a selected row; `None` for the separator.
    pub fn response(&self, index: usize) -> Option<&PlanResponse> {
        match self.entries.get(index)? {
            MenuEntry::Choice { response, .. } => Some(response),
            MenuEntry::Separator => None,
        }
    }
}

/// Number of actionable tasks per slot label, kept current during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCounter {
    counts: HashMap<String, usize>,
}

impl SlotCounter {
    pub fn set(&mut self, label: &Label, count: usize) {
        self.counts.insert(label.name.clone(), count);
    }

    pub fn increment(&mut self, label: &Label) {
        *self.counts.entry(label.name.clone()).or_default() += 1;
    }

    pub fn get(&self, label: &Label) -> usize {
        self.counts.get(&label.name).copied().unwrap_or_default()
    }
}

/// What a `plan` run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub slotted: usize,
    pub completed: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub headings: usize,
}

/// Count the tasks already in each slot, one query per slot, all in flight
/// together.
pub async fn count_slots<S: TaskService>(
    flow: &LifeFlow<S>,
    slots: &[Aspect],
) -> Result<SlotCounter> {
    let counts = try_join_all(slots.iter().map(|slot| async move {
        let tasks = flow
            .tasks_by_filter(&slot_load_query(&slot.label.name))
            .await?;
        Ok::<_, FlowError>((&slot.label, tasks.len()))
    }))
    .await?;

    let mut counter = SlotCounter::default();
    for (label, count) in counts {
        counter.set(label, count);
    }
    Ok(counter)
}

/// Walk the tasks without a slot in `slot_category` that are due now (or
/// undated) and ask when each will be done.
pub async fn plan<S, P>(
    flow: &mut LifeFlow<S>,
    prompter: &mut P,
    slot_category: &str,
) -> Result<PlanSummary>
where
    S: TaskService,
    P: Prompter + ?Sized,
{
    let aspects = flow.list_aspects().await?;
    let slots = aspects.get(slot_category);
    let mut summary = PlanSummary::default();

    if slots.is_empty() {
        ui::print_warning(&format!(
            "No \"{slot_category}/...\" labels found, nothing to plan."
        ));
        return Ok(summary);
    }

    ui::print_info("Calculating current time slot counts...");
    let mut counter = count_slots(flow, slots).await?;

    let (tasks, headings) = actionable(flow.tasks_missing_aspect(slot_category, true).await?);
    summary.headings = headings;
    let total = tasks.len();
    let today = chrono::Local::now().date_naive();

    for (index, mut task) in tasks.into_iter().enumerate() {
        ui::print_position(index + 1, total);
        ui::print_task_digest(&task, today);

        let menu = PlanMenu::new(slots, &counter);
        match prompter.choose_plan_action(&menu)? {
            PlanResponse::AssignSlot(label) => {
                task.add_label(&label);
                flow.save_task(&task).await?;
                counter.increment(&label);
                summary.slotted += 1;
                info!(task = %task.id, slot = %label.name, "Slotted task");
                ui::print_success("Slotted task.");
            }
            PlanResponse::CompleteTask => match flow.complete_task(&task).await {
                Ok(()) => {
                    summary.completed += 1;
                    ui::print_success("Completed task.");
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(task = %task.id, error = %e, "Failed to complete task");
                    ui::print_error(&format!("Couldn't complete task: {e}"));
                }
            },
            PlanResponse::DeleteTask => match flow.delete_task(&task).await {
                Ok(()) => {
                    summary.deleted += 1;
                    ui::print_success("Deleted task.");
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(task = %task.id, error = %e, "Failed to delete task");
                    ui::print_error(&format!("Couldn't delete task: {e}"));
                }
            },
            PlanResponse::Skip => {
                summary.skipped += 1;
                ui::print_info("Skipped task.");
            }
        }
    }

    Ok(summary)
}
