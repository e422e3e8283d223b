//! Parsers for semicolon-delimited shell history files
//!
//! # Error Handling Strategy
//!
//! - **Individual line failures**: A line that is not `<metadata>;<command>` is rejected
//!   with a [`ParseError`] variant carrying the line. The stream driver records it as a
//!   [`SkippedLine`], logs it at debug level, and moves on. No partial records are built.
//!
//! - **Stream failures**: Only I/O errors (unopenable or unreadable file) abort parsing.
//!   They are returned as `anyhow::Error` with the file path in the context.
//!
//! Unlike I/O errors, parse errors are a closed set so callers can match on the kind.

pub mod history;
pub mod line;

pub use history::{HistoryParse, SkippedLine, parse_history, parse_history_file};
pub use line::{ParseError, parse_line};
