use serde::Serialize;
use std::collections::HashMap;

/// One bar of a chart: grouping key and number of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub key: String,
    pub count: usize,
}

/// Row counts per grouping key, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    entries: Vec<SeriesPoint>,
    total_actions: usize,
}

impl AggregateTable {
    /// Count `keys` in the order they are yielded.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut entries: Vec<SeriesPoint> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total = 0;

        for key in keys {
            let key = key.into();
            total += 1;

            match index.get(&key) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(SeriesPoint { key, count: 1 });
                }
            }
        }

        Self {
            entries,
            total_actions: total,
        }
    }

    pub fn entries(&self) -> &[SeriesPoint] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    /// Sum of all counts, i.e. the number of aggregated rows.
    pub fn total_actions(&self) -> usize {
        self.total_actions
    }

    /// Number of distinct keys.
    pub fn total_groups(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`total_groups`](Self::total_groups) for per-day aggregates.
    pub fn total_days(&self) -> usize {
        self.total_groups()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
