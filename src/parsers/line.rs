use std::error::Error;
use std::fmt;

use crate::models::HistoryRecord;

const METADATA_DELIMITER: char = ';';
const ASSIGNMENT_MARKER: char = '=';

/// Why a history line was rejected. Every variant carries the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `;` separating metadata from the command
    MissingCommandSegment { line: String },
    /// The command segment contains `=` and is treated as a variable assignment
    AssignmentPrefix { line: String },
    /// The command segment is empty or only whitespace
    EmptyCommand { line: String },
}

impl ParseError {
    /// The rejected line, verbatim
    pub fn line(&self) -> &str {
        match self {
            ParseError::MissingCommandSegment { line }
            | ParseError::AssignmentPrefix { line }
            | ParseError::EmptyCommand { line } => line,
        }
    }

    /// Short machine-friendly name of the failure
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::MissingCommandSegment { .. } => "missing command segment",
            ParseError::AssignmentPrefix { .. } => "assignment prefix",
            ParseError::EmptyCommand { .. } => "empty command",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.reason(), self.line())
    }
}

impl Error for ParseError {}

/// Parse one history line of the form `<metadata>;<command segment>`
///
/// Only the first `;` is significant; anything after it, further `;` included, is the
/// command text. The metadata is not interpreted here.
///
/// Any `=` in the command segment rejects the line as an assignment prefix
/// (`FOO=bar make`). This over-approximates: `grep a=b file` is rejected too.
///
/// # Examples
///
/// ```
/// use cmdfreq::parsers::{ParseError, parse_line};
///
/// let record = parse_line("1;git commit -m wip").unwrap();
/// assert_eq!(record.command_name(), "git");
///
/// assert!(matches!(parse_line("no delimiter"), Err(ParseError::MissingCommandSegment { .. })));
/// ```
pub fn parse_line(line: &str) -> Result<HistoryRecord, ParseError> {
    let Some((_metadata, command)) = line.split_once(METADATA_DELIMITER) else {
        return Err(ParseError::MissingCommandSegment { line: line.to_string() });
    };

    if command.contains(ASSIGNMENT_MARKER) {
        return Err(ParseError::AssignmentPrefix { line: line.to_string() });
    }

    let Some(name) = command.split_whitespace().next() else {
        return Err(ParseError::EmptyCommand { line: line.to_string() });
    };

    Ok(HistoryRecord::new(line.to_string(), command.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let record = parse_line("t;cmd arg1 arg2").unwrap();
        assert_eq!(record.command_name(), "cmd");
        assert_eq!(record.command_text(), "cmd arg1 arg2");
        assert_eq!(record.raw_line(), "t;cmd arg1 arg2");
    }

    #[test]
    fn test_parse_zsh_extended_line() {
        let record = parse_line(": 1700000000:0;cargo build --release").unwrap();
        assert_eq!(record.command_name(), "cargo");
        assert_eq!(record.command_text(), "cargo build --release");
    }

    #[test]
    fn test_parse_bare_command_without_args() {
        let record = parse_line("4;ls").unwrap();
        assert_eq!(record.command_name(), "ls");
    }

    #[test]
    fn test_missing_delimiter() {
        let err = parse_line("ls -la").unwrap_err();
        assert_eq!(err, ParseError::MissingCommandSegment { line: "ls -la".to_string() });
        assert_eq!(err.line(), "ls -la");
    }

    #[test]
    fn test_empty_line_has_no_segment() {
        assert!(matches!(parse_line(""), Err(ParseError::MissingCommandSegment { .. })));
    }

    #[test]
    fn test_assignment_prefix_rejected() {
        let err = parse_line("t;FOO=1 cmd").unwrap_err();
        assert!(matches!(err, ParseError::AssignmentPrefix { .. }));
        assert_eq!(err.line(), "t;FOO=1 cmd");
    }

    #[test]
    fn test_equals_in_argument_also_rejected() {
        // Known over-approximation
        assert!(matches!(parse_line("1;grep a=b file"), Err(ParseError::AssignmentPrefix { .. })));
    }

    #[test]
    fn test_equals_in_metadata_is_ignored() {
        let record = parse_line("k=v;make test").unwrap();
        assert_eq!(record.command_name(), "make");
    }

    #[test]
    fn test_empty_command_segment() {
        assert!(matches!(parse_line("1;"), Err(ParseError::EmptyCommand { .. })));
        assert!(matches!(parse_line("1;   \t "), Err(ParseError::EmptyCommand { .. })));
    }

    #[test]
    fn test_leading_whitespace_in_segment() {
        let record = parse_line("1;   vim notes.md  ").unwrap();
        assert_eq!(record.command_name(), "vim");
        assert_eq!(record.command_text(), "   vim notes.md  ");
    }

    #[test]
    fn test_only_first_delimiter_splits() {
        let record = parse_line("1;cd /tmp; ls; pwd").unwrap();
        assert_eq!(record.command_name(), "cd");
        assert_eq!(record.command_text(), "cd /tmp; ls; pwd");
    }

    #[test]
    fn test_error_display_names_reason_and_line() {
        let err = parse_line("t;A=b x").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("assignment prefix"));
        assert!(msg.contains("t;A=b x"));
    }
}
