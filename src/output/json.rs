use serde_json::json;

use crate::core::Category;
use crate::error::TaskbotError;
use crate::storage::{Task, TaskStats};

/// Format tasks as JSON with metadata
///
/// # Errors
///
/// Returns `TaskbotError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[Task], title: &str) -> Result<String, TaskbotError> {
    let output = json!({
        "title": title,
        "count": tasks.len(),
        "tasks": tasks,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TaskbotError::Json` if serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TaskbotError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Format aggregate stats as JSON
///
/// # Errors
///
/// Returns `TaskbotError::Json` if serialization fails.
pub fn format_stats_json(stats: &TaskStats) -> Result<String, TaskbotError> {
    let output = json!({
        "total": stats.total,
        "completed": stats.completed,
        "pending": stats.pending,
        "completion_rate": stats.completion_rate(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format per-category counts as JSON
///
/// # Errors
///
/// Returns `TaskbotError::Json` if serialization fails.
pub fn format_categories_json(counts: &[(Category, i64)]) -> Result<String, TaskbotError> {
    let output: serde_json::Map<String, serde_json::Value> = counts
        .iter()
        .map(|(category, count)| (category.as_str().to_string(), json!(count)))
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}
