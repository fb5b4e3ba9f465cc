//! Command implementations for the taskbot CLI.

mod add;
mod chat;
mod list;
mod manage;
mod shell;
mod stats;

pub use add::add;
pub use chat::chat;
pub use list::{categories, deadlines, list, search, show};
pub use manage::{clear, delete, done, export};
pub use shell::completions;
pub use stats::stats;
