use std::collections::HashMap;
use std::collections::hash_map::Iter;

use serde::Serialize;

/// Occurrence count per command name, built once per run by
/// [`crate::aggregate::count_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `name`; unseen names start at zero
    pub(crate) fn increment(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    /// Stored count for `name`, or 0 when it was never observed
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct command names
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of records that were counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate in unspecified order; use [`crate::aggregate::rank_descending`] for
    /// anything user-visible
    pub fn iter(&self) -> Iter<'_, String, usize> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a usize);
    type IntoIter = Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `(command name, count)` pair for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self { name: name.into(), count }
    }
}
