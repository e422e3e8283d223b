//! Frequency counting and ranking over parsed history records
//!
//! Nothing here fails: empty input gives an empty table, an absent name counts as 0,
//! and ranking an empty table gives an empty list.

pub mod counter;
pub mod ranking;

pub use counter::{count_all, lookup};
pub use ranking::{rank_descending, take_top, top_above_threshold};
