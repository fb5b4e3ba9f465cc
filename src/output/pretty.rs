use colored::Colorize;

use chrono::NaiveDate;

use crate::core::{Category, Priority};
use crate::storage::{Task, TaskStats};

/// Format a list of tasks as a pretty table
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task], title: &str, today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let mut line = format!(
            "{} {} {}",
            format!("#{}", task.id).dimmed(),
            status_icon,
            task.title.bold()
        );

        if task.priority != Priority::Medium {
            line.push_str(&format!("  {}", priority_label(task.priority)));
        }

        if task.category != Category::General {
            line.push_str(&format!("  {}", task.category.to_string().dimmed()));
        }

        if let Some(due) = &task.due_date {
            let due_str = due.to_string();
            if task.is_overdue(today) {
                line.push_str(&format!("  {}", due_str.red().bold()));
            } else {
                line.push_str(&format!("  {}", due_str.yellow()));
            }
        }

        if !task.tags.is_empty() {
            let tags_str = task
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!("  {}", tags_str.cyan()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task with all fields
#[must_use]
pub fn format_task_pretty(task: &Task, today: NaiveDate) -> String {
    let status_icon = if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, task.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!("  {}: {}\n", "Category".dimmed(), task.category));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        priority_label(task.priority)
    ));

    if !task.description.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Notes".dimmed(), task.description));
    }

    if let Some(due) = &task.due_date {
        let marker = if task.is_overdue(today) { " (overdue)" } else { "" };
        output.push_str(&format!("  {}: {due}{marker}\n", "Due".dimmed()));
    }

    if !task.tags.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Tags".dimmed(), task.tags.join(", ")));
    }

    output.push_str(&format!("  {}: {}\n", "Created".dimmed(), task.created_at));

    if let Some(completed_at) = &task.completed_at {
        output.push_str(&format!("  {}: {completed_at}\n", "Completed".dimmed()));
    }

    output
}

/// Format aggregate stats
#[must_use]
pub fn format_stats_pretty(stats: &TaskStats) -> String {
    let mut output = format!("{}\n", "Task Statistics".bold());
    output.push_str(&"─".repeat(30));
    output.push('\n');
    output.push_str(&format!("  {}: {}\n", "Total".dimmed(), stats.total));
    output.push_str(&format!(
        "  {}: {}\n",
        "Completed".dimmed(),
        stats.completed.to_string().green()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Pending".dimmed(),
        stats.pending.to_string().yellow()
    ));
    output.push_str(&format!(
        "  {}: {:.0}%\n",
        "Completion rate".dimmed(),
        stats.completion_rate()
    ));
    output
}

/// Format pending counts per category
#[must_use]
pub fn format_categories_pretty(counts: &[(Category, i64)]) -> String {
    let mut output = format!("{}\n", "Pending per category".bold());
    output.push_str(&"─".repeat(30));
    output.push('\n');

    for (category, count) in counts {
        let count_str = if *count > 0 {
            count.to_string().yellow().to_string()
        } else {
            count.to_string().dimmed().to_string()
        };
        output.push_str(&format!("  {category}: {count_str}\n"));
    }

    output
}

fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::Urgent => "urgent".red().bold().to_string(),
        Priority::Medium => "medium".yellow().to_string(),
        Priority::Low => "low".dimmed().to_string(),
    }
}
