use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskbot")]
#[command(about = "A conversational task tracker with inline tags and due-date shorthand")]
#[command(long_about = "taskbot - a conversational task tracker

Capture tasks in plain language: #category and #tag markers, priority
keywords, and 'by <date>' / 'due <date>' shorthand are picked out of the
text and stored as structured fields.

QUICK START:
  taskbot add \"Finish report #work #urgent by friday\"
  taskbot list                 Pending tasks
  taskbot done 3               Mark task 3 complete
  taskbot chat \"/stats\"        Route a raw chat line

DATE EXPRESSIONS:
  today, tomorrow, monday..sunday, 2024-06-15, 15.06.2024, 15/06/2024

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskbot <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the configured format (normally pretty).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Owner identity the command acts for
    ///
    /// Every record is scoped to an owner; defaults to the configured
    /// identity (or "local").
    #[arg(short, long, env = "TASKBOT_USER", global = true)]
    pub user: Option<String>,

    /// Database file to use instead of ~/.taskbot/taskbot.db
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Reference date for resolving relative expressions (YYYY-MM-DD)
    ///
    /// Defaults to the current local date. Useful for scripting and
    /// reproducible runs.
    #[arg(long, value_name = "DATE", global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task from free text
    ///
    /// The text is parsed for markers and date shorthand:
    ///
    ///   taskbot add "Finish report #work #urgent #q3 by friday"
    ///   taskbot add "buy milk #shopping due 15.06.2024"
    ///
    /// Categories: work, personal, study, shopping, health, other.
    /// Priorities: urgent/important/high, medium, low.
    /// Anything else after # is a free tag.
    #[command(alias = "a")]
    Add(AddArgs),

    /// List pending tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one task with all fields
    Show {
        /// Task id
        id: i64,
    },

    /// Mark a task complete
    #[command(alias = "d")]
    Done {
        /// Task id
        id: i64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id
        id: i64,
    },

    /// Search pending tasks by keyword
    ///
    /// Substring match across title, notes, and tags.
    Search {
        /// Keyword to look for
        query: String,
    },

    /// Show task statistics
    Stats,

    /// Show tasks due soon (overdue included)
    Deadlines {
        /// Window in days (default from config, normally 7)
        days: Option<i64>,
    },

    /// Show pending task counts per category
    Categories,

    /// Delete ALL tasks for the owner
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Export every task (completed included) as JSON
    Export,

    /// Route one raw chat line through the command router
    ///
    /// Behaves exactly like a message sent to the bot:
    ///
    ///   taskbot chat "/add buy milk by tomorrow"
    ///   taskbot chat "/done 3"
    ///   taskbot chat "bare text is quick capture"
    Chat {
        /// The chat line, slash command or bare text
        line: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Task text with markers and date shorthand
    pub text: String,

    /// Free-form notes stored with the task
    #[arg(long)]
    pub notes: Option<String>,

    /// Parse the text and show the result without storing anything
    #[arg(long)]
    pub parse_only: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show completed tasks instead of pending ones
    #[arg(long)]
    pub completed: bool,

    /// Only show one category (work, personal, study, shopping, health,
    /// other, general)
    #[arg(long)]
    pub category: Option<String>,
}
