//! Add command implementation.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::core::{parse, Category, ParsedTask, Priority};
use crate::error::TaskbotError;
use crate::storage::TaskStore;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if storing the task fails.
pub fn add(
    store: &TaskStore,
    owner: &str,
    args: AddArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TaskbotError> {
    let task = parse(&args.text, today);

    if args.parse_only {
        return format_parsed_task(&task, format);
    }

    let id = store.add(owner, &task, args.notes.as_deref().unwrap_or(""))?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "created": true,
                "id": id,
                "title": task.title,
                "category": task.category,
                "priority": task.priority,
                "tags": task.tags,
                "due_date": task.due_date_iso(),
                "notes": args.notes,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} {} (ID: {id})\n",
                "Created:".green().bold(),
                task.title
            );
            write_fields(&mut output, &task);
            Ok(output)
        }
    }
}

/// Format a parsed task for display (parse-only mode).
fn format_parsed_task(task: &ParsedTask, format: OutputFormat) -> Result<String, TaskbotError> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "parsed": true,
                "title": task.title,
                "category": task.category,
                "priority": task.priority,
                "tags": task.tags,
                "due_date": task.due_date_iso(),
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => {
            let mut output = format!("{}\n", "Parsed task (not stored)".yellow().bold());
            writeln!(output, "  {} {}", "Title:".cyan().bold(), task.title).ok();
            write_fields(&mut output, task);
            Ok(output)
        }
    }
}

fn write_fields(output: &mut String, task: &ParsedTask) {
    if task.category != Category::General {
        writeln!(output, "  {} {}", "Category:".magenta(), task.category).ok();
    }
    if task.priority != Priority::Medium {
        writeln!(output, "  {} {}", "Priority:".red().bold(), task.priority).ok();
    }
    if let Some(due) = task.due_date_iso() {
        writeln!(output, "  {} {due}", "Due:".yellow()).ok();
    }
    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(output, "  {} {}", "Tags:".cyan(), tags.join(" ")).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn args(text: &str, parse_only: bool) -> AddArgs {
        AddArgs {
            text: text.to_string(),
            notes: None,
            parse_only,
        }
    }

    #[test]
    fn test_add_stores_and_reports() {
        let store = TaskStore::open_in_memory().unwrap();
        let output = add(
            &store,
            "u1",
            args("Finish report #work by friday", false),
            monday(),
            OutputFormat::Pretty,
        )
        .unwrap();

        assert!(output.contains("Finish report"));
        assert!(output.contains("2024-06-14"));
        assert_eq!(store.list("u1", false, None).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_only_stores_nothing() {
        let store = TaskStore::open_in_memory().unwrap();
        let output = add(
            &store,
            "u1",
            args("dry run #work", true),
            monday(),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["parsed"], true);
        assert_eq!(value["category"], "work");
        assert!(store.list("u1", false, None).unwrap().is_empty());
    }

    #[test]
    fn test_add_json_output() {
        let store = TaskStore::open_in_memory().unwrap();
        let output = add(
            &store,
            "u1",
            args("buy milk #shopping by tomorrow", false),
            monday(),
            OutputFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["created"], true);
        assert_eq!(value["title"], "buy milk");
        assert_eq!(value["due_date"], "2024-06-11");
    }
}
