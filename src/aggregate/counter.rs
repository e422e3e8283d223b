use std::borrow::Borrow;

use crate::models::{FrequencyTable, HistoryRecord};

/// Count how often each command name occurs in `records`
///
/// Builds a fresh table on every call; nothing carries over between calls.
///
/// # Examples
///
/// ```
/// use cmdfreq::aggregate::{count_all, lookup};
/// use cmdfreq::parsers::parse_line;
///
/// let records: Vec<_> = ["1;ls -la", "2;ls", "3;git status"]
///     .iter()
///     .filter_map(|line| parse_line(line).ok())
///     .collect();
/// let table = count_all(&records);
/// assert_eq!(lookup(&table, "ls"), 2);
/// assert_eq!(lookup(&table, "cargo"), 0);
/// ```
pub fn count_all<I>(records: I) -> FrequencyTable
where
    I: IntoIterator,
    I::Item: Borrow<HistoryRecord>,
{
    let mut table = FrequencyTable::new();
    for record in records {
        table.increment(record.borrow().command_name());
    }
    table
}

/// Count for `name`; absence is 0, not an error
pub fn lookup(table: &FrequencyTable, name: &str) -> usize {
    table.get(name)
}
