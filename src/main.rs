use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use taskbot::cli::args::{Cli, Commands};
use taskbot::cli::commands;
use taskbot::config::Config;
use taskbot::storage::TaskStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Completions need no store or config.
    if let Commands::Completions { shell } = &cli.command {
        print!("{}", commands::completions(*shell)?);
        return Ok(());
    }

    let config = Config::load()?;
    let owner = cli
        .user
        .clone()
        .unwrap_or_else(|| config.general.default_user.clone());
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let format = cli.output.unwrap_or(config.general.default_output);
    let deadline_window = i64::from(config.deadlines.window_days);

    let store = match &cli.db {
        Some(path) => TaskStore::open_at(path)?,
        None => TaskStore::open()?,
    };

    let output = match cli.command {
        Commands::Add(args) => commands::add(&store, &owner, args, today, format)?,
        Commands::List(args) => commands::list(&store, &owner, &args, today, format)?,
        Commands::Show { id } => commands::show(&store, &owner, id, today, format)?,
        Commands::Done { id } => commands::done(&store, &owner, id, format)?,
        Commands::Delete { id } => commands::delete(&store, &owner, id, format)?,
        Commands::Search { query } => commands::search(&store, &owner, &query, today, format)?,
        Commands::Stats => commands::stats(&store, &owner, format)?,
        Commands::Deadlines { days } => {
            let window = days.unwrap_or(deadline_window);
            commands::deadlines(&store, &owner, window, today, format)?
        }
        Commands::Categories => commands::categories(&store, &owner, format)?,
        Commands::Clear { yes } => commands::clear(&store, &owner, yes, format)?,
        Commands::Export => commands::export(&store, &owner)?,
        Commands::Chat { line } => {
            commands::chat(&store, &owner, &line, today, deadline_window)?
        }
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
