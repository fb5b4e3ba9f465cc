//! Chat reply rendering.
//!
//! Plain text shaped for a messaging window: no ANSI colors, compact
//! lines, record ids up front so users can answer with `/done <id>`.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::core::{Category, ParsedTask, Priority};
use crate::storage::{Task, TaskStats};

/// Command overview sent for `/help` and unknown commands.
#[must_use]
pub fn help() -> String {
    "Commands:\n\
     /add <text> - add a task (#category, #tags, by <date>)\n\
     /list - pending tasks\n\
     /completed - finished tasks\n\
     /done <id> - mark a task complete\n\
     /delete <id> - remove a task\n\
     /search <keyword> - find tasks\n\
     /stats - your numbers\n\
     /deadlines [days] - what is due soon\n\
     /categories - pending tasks per category\n\
     /export - all tasks as JSON\n\
     /clear - remove everything (asks to confirm)\n\
     \n\
     Bare text is captured as a task too:\n\
     buy milk #shopping by friday"
        .to_string()
}

/// Greeting for `/start`.
#[must_use]
pub fn greeting() -> String {
    format!("Hi! I keep track of your tasks.\n\n{}", help())
}

/// Confirmation for a newly captured task.
#[must_use]
pub fn task_added(id: i64, task: &ParsedTask) -> String {
    let mut reply = format!("Added task {id}: {}", task.title);

    if task.category != Category::General {
        write!(reply, "\n  Category: {}", task.category).ok();
    }
    if task.priority != Priority::Medium {
        write!(reply, "\n  Priority: {}", task.priority).ok();
    }
    if let Some(due) = task.due_date_iso() {
        write!(reply, "\n  Due: {due}").ok();
    }
    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
        write!(reply, "\n  Tags: {}", tags.join(" ")).ok();
    }

    reply
}

/// A titled task list.
#[must_use]
pub fn task_list(title: &str, tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{title}: nothing here.");
    }

    let mut reply = format!("{title} ({}):", tasks.len());
    for task in tasks {
        reply.push('\n');
        reply.push_str(&task_line(task, today));
    }
    reply
}

/// Search results, or a shrug.
#[must_use]
pub fn search_results(keyword: &str, tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("No tasks matching \"{keyword}\".");
    }
    task_list(&format!("Tasks matching \"{keyword}\""), tasks, today)
}

/// Aggregate counts.
#[must_use]
pub fn stats(stats: &TaskStats) -> String {
    format!(
        "Your stats:\n  Total: {}\n  Completed: {}\n  Pending: {}\n  Completion rate: {:.0}%",
        stats.total,
        stats.completed,
        stats.pending,
        stats.completion_rate()
    )
}

/// Pending counts per category.
#[must_use]
pub fn categories(counts: &[(Category, i64)]) -> String {
    let mut reply = "Pending tasks per category:".to_string();
    for (category, count) in counts {
        write!(reply, "\n  {category}: {count}").ok();
    }
    reply
}

#[must_use]
pub fn completed(id: i64) -> String {
    format!("Task {id} completed. Nice work!")
}

#[must_use]
pub fn deleted(id: i64) -> String {
    format!("Task {id} deleted.")
}

#[must_use]
pub fn not_found(id: i64) -> String {
    format!("Task {id} not found.")
}

/// Asks the user to confirm `/clear`.
#[must_use]
pub fn clear_prompt() -> String {
    "This removes ALL of your tasks. Send /clear yes to confirm.".to_string()
}

#[must_use]
pub fn cleared(count: usize) -> String {
    format!("Removed {count} task(s).")
}

#[must_use]
pub fn usage(hint: &str) -> String {
    format!("Usage: {hint}")
}

#[must_use]
pub fn unknown() -> String {
    format!("I don't know that command.\n\n{}", help())
}

/// One task line: id, status icon, title, then priority, due date, tags.
fn task_line(task: &Task, today: NaiveDate) -> String {
    let icon = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("  {}. {icon} {}", task.id, task.title);

    if task.priority != Priority::Medium {
        write!(line, " ({})", task.priority).ok();
    }
    if let Some(due) = task.due_date {
        write!(line, " due {}", due.format("%Y-%m-%d")).ok();
        if task.is_overdue(today) {
            line.push_str(" (overdue)");
        }
    }
    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
        write!(line, " {}", tags.join(" ")).ok();
    }

    line
}
