//! Persistent task storage.
//!
//! `SQLite`-backed store for structured task records, keyed by owner
//! identity. Schema changes go through versioned migrations.

mod database;
mod migrations;
mod tasks;

pub use database::Database;
pub use tasks::{Task, TaskStats, TaskStore};
