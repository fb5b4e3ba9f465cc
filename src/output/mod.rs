//! Output formatting for taskbot.
//!
//! Two presentation targets: `pretty`/`json` for the terminal (switched
//! by `--output`), and `chat` for plain-text replies to a messaging
//! window.

pub mod chat;
mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::core::Category;
use crate::error::TaskbotError;
use crate::storage::{Task, TaskStats};

pub use json::*;
pub use pretty::*;

/// Format a task list based on output format
///
/// # Errors
///
/// Returns `TaskbotError::Json` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, today)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskbotError::Json` if JSON serialization fails.
pub fn format_task(
    task: &Task,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, today)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format aggregate stats based on output format
///
/// # Errors
///
/// Returns `TaskbotError::Json` if JSON serialization fails.
pub fn format_stats(stats: &TaskStats, format: OutputFormat) -> Result<String, TaskbotError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats)),
        OutputFormat::Json => format_stats_json(stats),
    }
}

/// Format per-category counts based on output format
///
/// # Errors
///
/// Returns `TaskbotError::Json` if JSON serialization fails.
pub fn format_categories(
    counts: &[(Category, i64)],
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    match format {
        OutputFormat::Pretty => Ok(format_categories_pretty(counts)),
        OutputFormat::Json => format_categories_json(counts),
    }
}
