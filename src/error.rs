//! Error types for taskbot.

use thiserror::Error;

/// All errors the crate surfaces to callers.
///
/// The task-text parser itself never fails; errors come from the storage
/// layer, configuration, and command handling around it.
#[derive(Debug, Error)]
pub enum TaskbotError {
    /// Database open, migration, or query failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration file or path resolution failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A task id that does not exist for the requesting owner.
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    /// A malformed CLI argument or chat command.
    #[error("Invalid command: {0}")]
    Command(String),
}
