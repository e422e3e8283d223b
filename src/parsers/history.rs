use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::line::{ParseError, parse_line};
use crate::models::HistoryRecord;

/// A line that was rejected by the line parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the stream
    pub line_number: usize,
    pub error: ParseError,
}

/// Result of parsing a whole history stream
#[derive(Debug, Default)]
pub struct HistoryParse {
    pub records: Vec<HistoryRecord>,
    pub skipped: Vec<SkippedLine>,
    /// Non-blank lines seen, accepted or not
    pub total_lines: usize,
}

/// Parse the history file at `path`
///
/// Fails only if the file cannot be opened or read. Malformed lines are recorded in
/// [`HistoryParse::skipped`] and do not stop parsing.
pub fn parse_history_file(path: &Path) -> Result<HistoryParse> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;

    parse_history(BufReader::new(file))
        .with_context(|| format!("Failed to read history file: {}", path.display()))
}

/// Parse a history stream line by line
///
/// Invalid UTF-8 is replaced rather than rejected, since shells write their own byte
/// encodings into these files. Blank lines are not entries and are skipped silently.
pub fn parse_history<R: BufRead>(mut reader: R) -> Result<HistoryParse> {
    let mut parsed = HistoryParse::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).context("Failed to read line")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            continue;
        }

        parsed.total_lines += 1;

        match parse_line(line) {
            Ok(record) => parsed.records.push(record),
            Err(error) => {
                debug!(line_number, reason = error.reason(), line = error.line(), "Skipping line");
                parsed.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    info!(
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "Parsed history: {} entries ({} skipped)",
        parsed.records.len(),
        parsed.skipped.len()
    );

    Ok(parsed)
}
