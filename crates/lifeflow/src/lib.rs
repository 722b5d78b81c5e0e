//! Aspect tagging and time-slot planning on top of Todoist labels.
//!
//! Labels named `category/leaf` (e.g. `time/morning`, `focus/deep`) form an
//! aspect taxonomy. This crate builds that taxonomy, finds tasks that are
//! missing an aspect, and drives two interactive workflows:
//!
//! - [`workflow::ensure_aspects`] asks which leaves apply to every task that
//!   lacks a category.
//! - [`workflow::plan`] assigns time slots while showing how many tasks each
//!   slot already holds.
//!
//! # Usage
//!
//! ```no_run
//! use lifeflow::{Config, LifeFlow};
//!
//! # async fn run() -> lifeflow::Result<()> {
//! let mut flow = LifeFlow::from_config(&Config::new("api-token"))?;
//! let untimed = flow.tasks_missing_aspect("time", true).await?;
//! println!("{} tasks have no time slot", untimed.len());
//! # Ok(())
//! # }
//! ```

pub mod aspect;
pub mod config;
pub mod error;
pub mod filter;
pub mod flow;
pub mod retry;
pub mod todoist;
pub mod ui;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use aspect::{Aspect, AspectCategoryMap};
pub use config::{Config, ConfigOverrides};
pub use error::{FlowError, Result};
pub use filter::Filter;
pub use flow::LifeFlow;
pub use retry::RetryPolicy;
pub use todoist::{Label, Task, TaskService, TodoistClient};
