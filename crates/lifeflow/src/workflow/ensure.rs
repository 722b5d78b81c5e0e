//! Make sure every task has a value for every aspect category.

use tracing::info;

use super::{actionable, Prompter};
use crate::error::Result;
use crate::flow::LifeFlow;
use crate::todoist::TaskService;
use crate::ui;

/// What an `ensure_aspects` run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureSummary {
    /// Tasks the user was asked about.
    pub prompted: usize,
    /// Tasks that received at least one label.
    pub updated: usize,
    /// Heading tasks skipped without a prompt.
    pub headings: usize,
}

/// Walk every category (or only `categories`, when non-empty) and ask which
/// leaves apply to each task that has none.
pub async fn ensure_aspects<S, P>(
    flow: &mut LifeFlow<S>,
    prompter: &mut P,
    categories: &[String],
) -> Result<EnsureSummary>
where
    S: TaskService,
    P: Prompter + ?Sized,
{
    let aspects = flow.list_aspects().await?;
    let mut summary = EnsureSummary::default();

    for category in categories {
        if !aspects.contains(category) {
            ui::print_warning(&format!("No aspects registered for \"{category}\""));
        }
    }

    for (category, list) in aspects.iter() {
        if !categories.is_empty() && !categories.iter().any(|c| c == category) {
            continue;
        }

        ui::print_section(&format!("Ensuring {category}"));
        let (tasks, headings) = actionable(flow.tasks_missing_aspect(category, false).await?);
        summary.headings += headings;

        if tasks.is_empty() {
            ui::print_success(&format!("Every task has a {category} aspect."));
            continue;
        }

        let total = tasks.len();
        for (index, mut task) in tasks.into_iter().enumerate() {
            ui::print_position(index + 1, total);
            ui::print_task(&task);

            let labels = prompter.choose_aspects(category, list)?;
            summary.prompted += 1;

            if labels.is_empty() {
                continue;
            }

            task.add_labels(&labels);
            flow.save_task(&task).await?;
            summary.updated += 1;
            info!(task = %task.id, category, labels = labels.len(), "Assigned aspects");
        }
    }

    Ok(summary)
}
