//! Chat command parsing.
//!
//! Turns one incoming chat line into a typed [`Command`]. Telegram-style
//! lines start with `/` and may carry an `@botname` suffix; anything else
//! is treated as quick capture of a new task.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/command@botname args`; the bot-name suffix is accepted and ignored.
static COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/([A-Za-z_]+)(?:@\w+)?(?:\s+(.+))?$")
        .unwrap_or_else(|e| panic!("Invalid command regex: {e}"))
});

/// A parsed chat command.
///
/// Argument payloads stay optional here; the dispatcher answers missing
/// ones with a usage hint instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`: greeting plus command overview.
    Start,
    /// `/help`
    Help,
    /// `/add <text>`
    Add { text: Option<String> },
    /// `/list`: pending tasks.
    List,
    /// `/completed`
    Completed,
    /// `/done <id>`
    Done { id: Option<i64> },
    /// `/delete <id>`
    Delete { id: Option<i64> },
    /// `/search <keyword>`
    Search { keyword: Option<String> },
    /// `/stats`
    Stats,
    /// `/deadlines [days]`
    Deadlines { days: Option<i64> },
    /// `/categories`
    Categories,
    /// `/clear` then `/clear yes` to confirm.
    Clear { confirmed: bool },
    /// `/export`
    Export,
    /// Bare text without a leading slash: quick capture.
    Quick(String),
    /// Anything slash-prefixed we do not recognize.
    Unknown(String),
}

impl Command {
    /// Parse one chat line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Help;
        }

        let Some(captures) = COMMAND_PATTERN.captures(line) else {
            if line.starts_with('/') {
                return Self::Unknown(line.to_string());
            }
            return Self::Quick(line.to_string());
        };

        let name = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let arg = captures.get(2).map(|m| m.as_str().trim().to_string());

        match name.as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "add" => Self::Add { text: arg },
            "list" | "tasks" => Self::List,
            "completed" => Self::Completed,
            "done" | "complete" => Self::Done {
                id: arg.and_then(|a| a.parse().ok()),
            },
            "delete" | "del" => Self::Delete {
                id: arg.and_then(|a| a.parse().ok()),
            },
            "search" => Self::Search { keyword: arg },
            "stats" => Self::Stats,
            "deadlines" => Self::Deadlines {
                days: arg.and_then(|a| a.parse().ok()),
            },
            "categories" => Self::Categories,
            "clear" | "clear_all" => Self::Clear {
                confirmed: arg.as_deref() == Some("yes"),
            },
            "export" => Self::Export,
            _ => Self::Unknown(line.to_string()),
        }
    }
}
