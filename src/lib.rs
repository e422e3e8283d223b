//! cmdfreq - Count how often each command appears in a shell history file
//!
//! This library parses semicolon-delimited history files (`<metadata>;<command>`, as
//! written by zsh's extended history) and aggregates the commands by name. It provides:
//!
//! - Line parsing into [`HistoryRecord`]s with typed rejection reasons
//! - Frequency counting by command name
//! - Deterministic ranking, threshold filtering and top-N selection
//!
//! The core never reads the environment or the filesystem on its own; callers hand it
//! a stream or a path and get plain data back.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use cmdfreq::{count_all, parse_history, rank_descending, top_above_threshold};
//!
//! let history = parse_history(Cursor::new("1;ls -la\n2;ls -l\n3;git status\n4;ls\n"))?;
//! let table = count_all(&history.records);
//! let ranked = rank_descending(&table);
//! let top = top_above_threshold(&ranked, 1);
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].name, "ls");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use aggregate::{count_all, lookup, rank_descending, take_top, top_above_threshold};
pub use models::{FrequencyTable, HistoryRecord, RankedEntry};
pub use parsers::{HistoryParse, ParseError, SkippedLine, parse_history, parse_history_file, parse_line};
