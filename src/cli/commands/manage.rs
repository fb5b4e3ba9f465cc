//! Done, delete, clear, and export commands.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::TaskbotError;
use crate::storage::TaskStore;

/// Mark a task complete.
///
/// # Errors
///
/// Returns `TaskNotFound` for an unknown id.
pub fn done(
    store: &TaskStore,
    owner: &str,
    id: i64,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    if !store.complete(owner, id)? {
        return Err(TaskbotError::TaskNotFound(id));
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "completed": true,
            "id": id,
        }))?),
        OutputFormat::Pretty => Ok(format!("{} task {id}", "Completed:".green().bold())),
    }
}

/// Delete a task.
///
/// # Errors
///
/// Returns `TaskNotFound` for an unknown id.
pub fn delete(
    store: &TaskStore,
    owner: &str,
    id: i64,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    if !store.delete(owner, id)? {
        return Err(TaskbotError::TaskNotFound(id));
    }

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "deleted": true,
            "id": id,
        }))?),
        OutputFormat::Pretty => Ok(format!("{} task {id}", "Deleted:".red().bold())),
    }
}

/// Delete every task for the owner. Requires `--yes`.
///
/// # Errors
///
/// Returns a command error when the flag is missing.
pub fn clear(
    store: &TaskStore,
    owner: &str,
    yes: bool,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    if !yes {
        return Err(TaskbotError::Command(
            "this deletes ALL tasks; pass --yes to confirm".to_string(),
        ));
    }

    let removed = store.clear(owner)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "cleared": true,
            "removed": removed,
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "{} {removed} task(s)",
            "Removed:".red().bold()
        )),
    }
}

/// Export every task as JSON, completed included.
///
/// Always JSON regardless of `--output`; the point is a machine-readable
/// dump.
///
/// # Errors
///
/// Returns an error if the query or serialization fails.
pub fn export(store: &TaskStore, owner: &str) -> Result<String, TaskbotError> {
    let tasks = store.export(owner)?;
    Ok(serde_json::to_string_pretty(&tasks)?)
}
