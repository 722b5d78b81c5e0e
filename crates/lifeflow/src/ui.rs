//! Console output helpers for the interactive workflows.

use chrono::NaiveDate;
use colored::Colorize;

use crate::aspect::AspectCategoryMap;
use crate::todoist::Task;

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", title.cyan().bold());
    println!("{}", "═".repeat(60).bright_black());
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message.
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print the `(current of total)` marker before a prompt.
pub fn print_position(current: usize, total: usize) {
    println!();
    println!("{}", format!("({current} of {total})").bright_black());
}

/// Print a task's content and link.
pub fn print_task(task: &Task) {
    println!("{}", task.content.bold());
    println!("{}", format!("[{}]", task.url).bright_black());
}

/// Print the full digest shown before a planning prompt.
pub fn print_task_digest(task: &Task, today: NaiveDate) {
    println!("Task: {}", task.content.bold());

    if let Some(due) = &task.due {
        match due.days_overdue(today) {
            Some(days) => println!(
                " Due: {} {}",
                due.date,
                format!("({days} days overdue)").red()
            ),
            None => println!(" Due: {}", due.date),
        }
    }

    let kind = if task.is_recurring() {
        "Recurring"
    } else {
        "Single-action"
    };
    println!("Type: {kind}");
    println!("Link: {}", task.url.bright_black());
}

/// Print every category with its leaves.
pub fn print_aspect_map(aspects: &AspectCategoryMap) {
    if aspects.is_empty() {
        print_warning("No aspect labels found (expected names like \"time/morning\").");
        return;
    }

    for (category, list) in aspects.iter() {
        println!(
            "{} {}",
            category.cyan().bold(),
            format!("({})", list.len()).bright_black()
        );
        for aspect in list {
            println!("  {} {}", "→".cyan(), aspect.leaf);
        }
    }
}
