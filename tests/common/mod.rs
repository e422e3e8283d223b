//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary home directory holding a `.zhistory` file
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    /// Create a new builder with an empty home directory (no history file)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the history file is written to
    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join(".zhistory")
    }

    /// Write the history file with the given raw content
    pub fn with_history(self, content: &str) -> Self {
        self.with_history_bytes(content.as_bytes())
    }

    /// Write the history file with raw bytes (for encoding tests)
    pub fn with_history_bytes(self, content: &[u8]) -> Self {
        fs::write(self.history_path(), content).expect("Failed to write .zhistory");
        self
    }

    /// Write history lines built programmatically
    pub fn with_history_lines(self, lines: &[HistoryLineBuilder]) -> Self {
        let content = lines.iter().map(|l| l.to_line()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for zsh extended-history lines (`: <epoch>:<elapsed>;<command>`)
pub struct HistoryLineBuilder {
    timestamp: i64,
    elapsed: u32,
    command: String,
}

impl HistoryLineBuilder {
    /// Create a new line running `command`
    pub fn new(command: &str) -> Self {
        Self { timestamp: 1700000000, elapsed: 0, command: command.to_string() }
    }

    /// Set the start timestamp (seconds since epoch)
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the elapsed time in seconds
    pub fn elapsed(mut self, elapsed: u32) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Render as one history line
    pub fn to_line(&self) -> String {
        format!(": {}:{};{}", self.timestamp, self.elapsed, self.command)
    }
}

/// Create a home directory with a realistic history:
/// git x4, ls x3, cargo x2, vim x1, plus one assignment line and one garbage line
pub fn realistic_home() -> TempDir {
    let commands = [
        "git status",
        "ls -la",
        "git add .",
        "cargo build",
        "ls",
        "RUST_LOG=debug cargo run",
        "git commit -m wip",
        "vim src/main.rs",
        "cargo test",
        "ls -l",
        "git push",
    ];

    let mut lines: Vec<HistoryLineBuilder> = commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| HistoryLineBuilder::new(cmd).timestamp(1700000000 + i as i64 * 60))
        .collect();
    lines.push(HistoryLineBuilder::new("").timestamp(1700009999));

    let home = HomeDirBuilder::new().with_history_lines(&lines);
    let history_path = home.history_path();
    let mut content = fs::read_to_string(&history_path).expect("Failed to read .zhistory");
    content.push_str("\nthis line has no delimiter\n");
    fs::write(&history_path, content).expect("Failed to write .zhistory");
    home.build()
}
