use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use crate::aggregate::{count_all, lookup, rank_descending, take_top, top_above_threshold};
use crate::logging::init_logging;
use crate::models::RankedEntry;
use crate::parsers::{HistoryParse, parse_history_file};
use crate::utils::{format_path_with_tilde, get_history_path, sanitize_for_display};

/// Name that asks for the ranked list instead of a single lookup
pub const ALL_COMMANDS: &str = "all";

/// Commands run this many times or fewer are left out of the ranked list by default
pub const DEFAULT_THRESHOLD: usize = 30;

#[derive(Parser)]
#[command(name = "cmdfreq")]
#[command(version = "0.1.0")]
#[command(about = "Count how often commands appear in your shell history", long_about = None)]
pub struct Cli {
    /// History file to read instead of ~/.zhistory
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log skipped lines and the parse summary to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how often a command was run, or `all` for the ranked list
    Count {
        /// Command name to look up, or `all`
        name: String,

        /// With `all`: only list commands run more than this many times
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// With `all`: list at most this many commands
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show statistics about the history
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve and read everything before printing anything
    let history_path = match &cli.file {
        Some(path) => path.clone(),
        None => get_history_path()?,
    };
    let history = parse_history_file(&history_path)?;

    match &cli.command {
        Commands::Count { name, threshold, limit } if name == ALL_COMMANDS => {
            show_ranking(&history, *threshold, *limit, cli.json)?;
        }
        Commands::Count { name, .. } => {
            show_count(&history, name, cli.json)?;
        }
        Commands::Stats => {
            show_stats(&history, &history_path, cli.json)?;
        }
    }

    Ok(())
}

fn show_count(history: &HistoryParse, name: &str, json: bool) -> Result<()> {
    let table = count_all(&history.records);
    let count = lookup(&table, name);

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "command": name, "count": count }))?);
    } else {
        println!("{}", render_count(name, count));
    }

    Ok(())
}

fn show_ranking(
    history: &HistoryParse,
    threshold: usize,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let table = count_all(&history.records);
    let ranked = rank_descending(&table);
    let mut entries = top_above_threshold(&ranked, threshold);
    if let Some(limit) = limit {
        entries = take_top(&entries, limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_ranking(&entries));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct HistoryStats {
    total_commands: usize,
    unique_commands: usize,
    skipped_lines: usize,
    history_file: String,
    oldest_entry: Option<DateTime<Utc>>,
    newest_entry: Option<DateTime<Utc>>,
}

fn collect_stats(history: &HistoryParse, history_file: String) -> HistoryStats {
    let table = count_all(&history.records);
    let timestamps = history.records.iter().filter_map(|r| r.timestamp());

    HistoryStats {
        total_commands: table.total(),
        unique_commands: table.len(),
        skipped_lines: history.skipped.len(),
        history_file,
        oldest_entry: timestamps.clone().min(),
        newest_entry: timestamps.max(),
    }
}

fn show_stats(history: &HistoryParse, history_path: &Path, json: bool) -> Result<()> {
    let stats = collect_stats(history, format_path_with_tilde(history_path));

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Shell History Statistics");
    println!("========================");
    println!("Total commands: {}", stats.total_commands);
    println!("  Unique commands: {}", stats.unique_commands);
    println!("  Skipped lines: {}", stats.skipped_lines);
    println!();
    println!("History file: {}", stats.history_file);

    if let Some(oldest) = stats.oldest_entry {
        println!("Oldest entry: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = stats.newest_entry {
        println!("Newest entry: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn render_count(name: &str, count: usize) -> String {
    format!("{} was executed {} times", sanitize_for_display(name), count)
}

/// One `<count>  <name>` line per entry, in the given order
fn render_ranking(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{:>7}  {}\n", entry.count, sanitize_for_display(&entry.name)))
        .collect()
}
