//! Data models for shell history analysis.
//!
//! - [`HistoryRecord`] - One accepted line of the history file
//! - [`FrequencyTable`] - Command name to occurrence count
//! - [`RankedEntry`] - A `(name, count)` pair in ranked output
//!
//! Records are immutable once the parser hands them out. Tables are built fresh by the
//! aggregator and owned by whoever asked for them.

pub mod frequency;
pub mod record;

pub use frequency::{FrequencyTable, RankedEntry};
pub use record::HistoryRecord;
