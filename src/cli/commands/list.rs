//! List, show, search, deadlines, and categories commands.

use chrono::NaiveDate;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::core::Category;
use crate::error::TaskbotError;
use crate::output;
use crate::storage::TaskStore;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error on an unknown category name or a storage failure.
pub fn list(
    store: &TaskStore,
    owner: &str,
    args: &ListArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let category = args.category.as_deref().map(parse_category).transpose()?;
    let tasks = store.list(owner, args.completed, category)?;

    let title = if args.completed {
        "Completed tasks"
    } else {
        "Pending tasks"
    };
    output::format_tasks(&tasks, title, today, format)
}

/// Execute the show command.
///
/// # Errors
///
/// Returns `TaskNotFound` for an unknown id.
pub fn show(
    store: &TaskStore,
    owner: &str,
    id: i64,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let task = store
        .get(owner, id)?
        .ok_or(TaskbotError::TaskNotFound(id))?;
    output::format_task(&task, today, format)
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn search(
    store: &TaskStore,
    owner: &str,
    query: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let tasks = store.search(owner, query)?;
    output::format_tasks(&tasks, &format!("Tasks matching \"{query}\""), today, format)
}

/// Execute the deadlines command.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn deadlines(
    store: &TaskStore,
    owner: &str,
    days: i64,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let tasks = store.upcoming(owner, days.max(0), today)?;
    output::format_tasks(
        &tasks,
        &format!("Due within {days} days"),
        today,
        format,
    )
}

/// Execute the categories command.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn categories(
    store: &TaskStore,
    owner: &str,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let counts = store.category_counts(owner)?;
    output::format_categories(&counts, format)
}

fn parse_category(name: &str) -> Result<Category, TaskbotError> {
    let normalized = name.to_lowercase();
    if normalized == "general" {
        return Ok(Category::General);
    }
    Category::from_keyword(&normalized)
        .ok_or_else(|| TaskbotError::Command(format!("Unknown category: {name}")))
}
