//! lifeflow CLI.
//!
//! Interactive helpers that keep Todoist tasks tagged with aspect labels and
//! spread across time slots.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lifeflow::workflow::{self, plan::DEFAULT_SLOT_CATEGORY, DialoguerPrompter};
use lifeflow::{ui, Config, ConfigOverrides, LifeFlow};

/// Aspect tagging and time-slot planning for Todoist.
#[derive(Parser)]
#[command(
    name = "lifeflow",
    version,
    about = "Aspect tagging and time-slot planning for Todoist",
    long_about = "Treats Todoist labels named \"category/leaf\" as aspects of a task.\n\n\
                  ensure-aspects walks every task that is missing a category and asks\n\
                  which leaves apply. plan assigns time slots to tasks due now while\n\
                  showing how full each slot already is."
)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Todoist API token.
    #[arg(long, global = true, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// JSON config file containing {"token": "..."}.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the Todoist REST API base URL.
    #[arg(long, global = true, env = "TODOIST_API_BASE", value_name = "URL")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask which aspects apply to every task that is missing one.
    EnsureAspects {
        /// Only ensure these categories (repeatable). Defaults to all.
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,
    },

    /// Assign time slots to tasks that are due now or undated.
    Plan {
        /// Aspect category whose leaves are the time slots.
        #[arg(long, default_value = DEFAULT_SLOT_CATEGORY)]
        category: String,
    },

    /// Print the aspect taxonomy built from your labels.
    Aspects,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("info,lifeflow=debug")
        } else {
            EnvFilter::new("warn,lifeflow=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::resolve(ConfigOverrides {
        token: cli.token,
        config_path: cli.config,
        api_base: cli.api_base,
    })?;
    let mut flow = LifeFlow::from_config(&config)?;

    match cli.command {
        Commands::EnsureAspects { categories } => {
            let mut prompter = DialoguerPrompter::new();
            let summary = workflow::ensure_aspects(&mut flow, &mut prompter, &categories).await?;
            ui::print_section("Done");
            ui::print_success(&format!(
                "{} of {} tasks updated ({} headings skipped)",
                summary.updated, summary.prompted, summary.headings
            ));
        }
        Commands::Plan { category } => {
            let mut prompter = DialoguerPrompter::new();
            let summary = workflow::plan(&mut flow, &mut prompter, &category).await?;
            ui::print_section("Done");
            ui::print_success(&format!(
                "{} slotted, {} completed, {} deleted, {} skipped",
                summary.slotted, summary.completed, summary.deleted, summary.skipped
            ));
            if summary.failed > 0 {
                ui::print_warning(&format!("{} tasks could not be updated", summary.failed));
            }
        }
        Commands::Aspects => {
            let aspects = flow.list_aspects().await?;
            ui::print_aspect_map(&aspects);
        }
    }

    Ok(())
}
