//! Chat command routing.
//!
//! One entry point, [`handle`]: text in, reply text out. The router owns
//! no state; the caller supplies the store, the owner identity, and the
//! reference date so every dispatch is deterministic.

mod command;

pub use command::Command;

use chrono::NaiveDate;

use crate::core::parse;
use crate::error::TaskbotError;
use crate::output::chat;
use crate::storage::TaskStore;

/// Dispatch one chat line and produce the reply.
///
/// User mistakes (missing arguments, unknown ids, unknown commands) come
/// back as friendly reply text, never as errors; only storage failures
/// propagate.
///
/// # Errors
///
/// Returns an error if a storage operation fails.
pub fn handle(
    store: &TaskStore,
    owner: &str,
    line: &str,
    today: NaiveDate,
    deadline_window: i64,
) -> Result<String, TaskbotError> {
    match Command::parse(line) {
        Command::Start => Ok(chat::greeting()),
        Command::Help => Ok(chat::help()),

        Command::Add { text: Some(text) } | Command::Quick(text) => {
            add_task(store, owner, &text, today)
        }
        Command::Add { text: None } => Ok(chat::usage("/add <text>")),

        Command::List => {
            let tasks = store.list(owner, false, None)?;
            Ok(chat::task_list("Your tasks", &tasks, today))
        }
        Command::Completed => {
            let tasks = store.list(owner, true, None)?;
            Ok(chat::task_list("Completed tasks", &tasks, today))
        }

        Command::Done { id: Some(id) } => {
            if store.complete(owner, id)? {
                Ok(chat::completed(id))
            } else {
                Ok(chat::not_found(id))
            }
        }
        Command::Done { id: None } => Ok(chat::usage("/done <id>")),

        Command::Delete { id: Some(id) } => {
            if store.delete(owner, id)? {
                Ok(chat::deleted(id))
            } else {
                Ok(chat::not_found(id))
            }
        }
        Command::Delete { id: None } => Ok(chat::usage("/delete <id>")),

        Command::Search {
            keyword: Some(keyword),
        } => {
            let tasks = store.search(owner, &keyword)?;
            Ok(chat::search_results(&keyword, &tasks, today))
        }
        Command::Search { keyword: None } => Ok(chat::usage("/search <keyword>")),

        Command::Stats => {
            let stats = store.stats(owner)?;
            Ok(chat::stats(&stats))
        }

        Command::Deadlines { days } => {
            let window = days.unwrap_or(deadline_window).max(0);
            let tasks = store.upcoming(owner, window, today)?;
            Ok(chat::task_list("Due soon", &tasks, today))
        }

        Command::Categories => {
            let counts = store.category_counts(owner)?;
            Ok(chat::categories(&counts))
        }

        Command::Clear { confirmed: false } => Ok(chat::clear_prompt()),
        Command::Clear { confirmed: true } => {
            let removed = store.clear(owner)?;
            Ok(chat::cleared(removed))
        }

        Command::Export => {
            let tasks = store.export(owner)?;
            Ok(serde_json::to_string_pretty(&tasks)?)
        }

        Command::Unknown(_) => Ok(chat::unknown()),
    }
}

fn add_task(
    store: &TaskStore,
    owner: &str,
    text: &str,
    today: NaiveDate,
) -> Result<String, TaskbotError> {
    let parsed = parse(text, today);
    let id = store.add(owner, &parsed, "")?;
    Ok(chat::task_added(id, &parsed))
}
