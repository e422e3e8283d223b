use crate::models::{FrequencyTable, RankedEntry};

/// All entries of `table`, highest count first
///
/// Ties are broken by command name ascending so the table's iteration order never
/// shows up in output.
pub fn rank_descending(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> =
        table.iter().map(|(name, &count)| RankedEntry::new(name.as_str(), count)).collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked
}

/// Entries whose count is strictly greater than `min_count`, in their incoming order
pub fn top_above_threshold(ranked: &[RankedEntry], min_count: usize) -> Vec<RankedEntry> {
    ranked.iter().filter(|entry| entry.count > min_count).cloned().collect()
}

/// The first `n` entries of an already ranked list
///
/// A cardinality cap, unlike [`top_above_threshold`]. Entries tied with the last one
/// kept are cut off by name order.
pub fn take_top(ranked: &[RankedEntry], n: usize) -> Vec<RankedEntry> {
    ranked.iter().take(n).cloned().collect()
}
