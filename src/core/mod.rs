//! Core task-text parsing.
//!
//! Everything in here is pure: no I/O, no clock reads, no shared state.
//! Callers supply the reference date explicitly.

mod dates;
mod parser;

pub use dates::resolve_date;
pub use parser::{parse, Category, ParsedTask, Priority};
