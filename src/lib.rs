//! taskbot - a conversational task tracker
//!
//! Free-text task instructions are parsed into structured records:
//! `#` markers encode categories, priorities, and tags; `by <date>` and
//! `due <date>` shorthand resolves against an explicit reference date.
//! Records are stored per owner in `SQLite` and served back through a
//! chat-style command router or the CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod router;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::{parse, resolve_date, Category, ParsedTask, Priority};
pub use error::TaskbotError;
pub use storage::TaskStore;
