//! Interactive workflows built on [`crate::flow::LifeFlow`].
//!
//! Both workflows walk a list of tasks one at a time, ask the user what to do
//! through a [`Prompter`], and persist the answer before moving on.

pub mod ensure;
pub mod plan;
pub mod prompt;

use crate::aspect::Aspect;
use crate::error::Result;
use crate::todoist::{Label, Task};

pub use ensure::{ensure_aspects, EnsureSummary};
pub use plan::{plan, MenuEntry, PlanMenu, PlanResponse, PlanSummary, SlotCounter};
pub use prompt::DialoguerPrompter;

/// The questions the workflows ask a human.
pub trait Prompter {
    /// Pick zero or more leaves of `category` for a task.
    fn choose_aspects(&mut self, category: &str, aspects: &[Aspect]) -> Result<Vec<Label>>;

    /// Pick one entry of the planning menu.
    fn choose_plan_action(&mut self, menu: &PlanMenu) -> Result<PlanResponse>;
}

/// Split out heading tasks, returning the actionable ones and the heading count.
pub(crate) fn actionable(tasks: Vec<Task>) -> (Vec<Task>, usize) {
    let total = tasks.len();
    let actionable: Vec<Task> = tasks.into_iter().filter(|t| !t.is_heading()).collect();
    let headings = total - actionable.len();
    (actionable, headings)
}
