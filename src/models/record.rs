use chrono::{DateTime, Utc};
use serde::Serialize;

/// One accepted history entry.
///
/// Only built by [`crate::parsers::parse_line`], so `command_name` is never empty and
/// `command_text` never carries an assignment prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    raw_line: String,
    command_text: String,
    command_name: String,
}

impl HistoryRecord {
    pub(crate) fn new(raw_line: String, command_text: String, command_name: String) -> Self {
        Self { raw_line, command_text, command_name }
    }

    /// The line exactly as read from the history file
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Everything after the first `;`, unsplit
    pub fn command_text(&self) -> &str {
        &self.command_text
    }

    /// First whitespace-delimited token of the command text; the aggregation key
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// Start time of the command, when the metadata uses zsh's extended history form
    /// (`: <epoch>:<elapsed>`). Any other metadata is opaque and yields `None`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let (metadata, _) = self.raw_line.split_once(';')?;
        let rest = metadata.trim_start().strip_prefix(':')?;
        let (epoch, _elapsed) = rest.trim_start().split_once(':')?;
        let secs = epoch.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}
