//! Chat command implementation.
//!
//! Feeds one raw chat line through the command router, exactly as a
//! message arriving from a chat transport would be handled.

use chrono::NaiveDate;

use crate::error::TaskbotError;
use crate::router;
use crate::storage::TaskStore;

/// Execute the chat command.
///
/// # Errors
///
/// Returns an error if a storage operation fails.
pub fn chat(
    store: &TaskStore,
    owner: &str,
    line: &str,
    today: NaiveDate,
    deadline_window: i64,
) -> Result<String, TaskbotError> {
    router::handle(store, owner, line, today, deadline_window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_routes_to_router() {
        let store = TaskStore::open_in_memory().unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let reply = chat(&store, "u1", "/add buy milk by tomorrow", monday, 7).unwrap();
        assert!(reply.contains("Added task 1: buy milk"));

        let reply = chat(&store, "u1", "/list", monday, 7).unwrap();
        assert!(reply.contains("buy milk"));
    }
}
