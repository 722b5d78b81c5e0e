//! Terminal prompts backed by dialoguer.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

use super::plan::{PlanMenu, PlanResponse, PAGE_SIZE};
use super::Prompter;
use crate::aspect::Aspect;
use crate::error::Result;
use crate::todoist::Label;

/// Asks questions on the controlling terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn choose_aspects(&mut self, category: &str, aspects: &[Aspect]) -> Result<Vec<Label>> {
        let leaves: Vec<&str> = aspects.iter().map(|a| a.leaf.as_str()).collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("What {category} aspects apply here?"))
            .items(&leaves)
            .max_length(PAGE_SIZE)
            .interact()?;

        Ok(picked
            .into_iter()
            .map(|i| aspects[i].label.clone())
            .collect())
    }

    fn choose_plan_action(&mut self, menu: &PlanMenu) -> Result<PlanResponse> {
        let rows: Vec<String> = menu.entries.iter().map(ToString::to_string).collect();

        // The separator row is selectable in dialoguer; ask again if it is picked.
        loop {
            let index = Select::with_theme(&self.theme)
                .with_prompt("When will you do this?")
                .items(&rows)
                .default(0)
                .max_length(PAGE_SIZE)
                .interact()?;

            if let Some(response) = menu.response(index) {
                return Ok(response.clone());
            }
        }
    }
}
