//! Terminal output sanitization
//!
//! Command names and command text come straight from the history file. Anything
//! printed from it goes through [`sanitize_for_display`] so escape sequences recorded
//! in history cannot move the cursor or recolor the report.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Strips ANSI CSI sequences and control characters from a single-line value
///
/// Returns the input unchanged (borrowed) when there is nothing to strip.
///
/// # Examples
///
/// ```
/// use cmdfreq::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mls\x1b[0m"), "ls");
/// assert_eq!(sanitize_for_display("git"), "git");
/// ```
pub fn sanitize_for_display(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC && chars.peek() == Some(&'[') {
            chars.next();
            // CSI runs until its final byte, a letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch == '\t' {
            result.push(' ');
        } else if !ch.is_control() {
            result.push(ch);
        }
    }

    Cow::Owned(result)
}
