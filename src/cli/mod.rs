//! Command-line interface for taskbot.

pub mod args;
pub mod commands;
