//! Per-table merge counters, scoped to a single merge call.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use getset::CopyGetters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    /// A merge was attempted on an existing row. Says nothing about whether it changed.
    Updated,
    /// A shared reference row already merged earlier in the same transaction.
    Noop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct TableCounts {
    inserted: usize,
    updated: usize,
    noop: usize,
}

impl TableCounts {
    pub fn new(inserted: usize, updated: usize, noop: usize) -> Self {
        Self {
            inserted,
            updated,
            noop,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MergeStats {
    tables: BTreeMap<String, TableCounts>,
    seen: HashSet<(String, String)>,
}

impl MergeStats {
    pub fn record(&mut self, table: &str, outcome: MergeOutcome) {
        let counts = self.tables.entry(table.to_string()).or_default();
        match outcome {
            MergeOutcome::Inserted => counts.inserted += 1,
            MergeOutcome::Updated => counts.updated += 1,
            MergeOutcome::Noop => counts.noop += 1,
        }
    }

    /// True the first time `key` is offered for `table` within this merge.
    pub fn first_sighting(&mut self, table: &str, key: &str) -> bool {
        self.seen.insert((table.to_string(), key.to_string()))
    }

    pub fn table(&self, table: &str) -> TableCounts {
        self.tables.get(table).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.tables.is_empty() {
            return write!(f, "nothing merged");
        }
        let rendered: Vec<String> = self
            .tables
            .iter()
            .map(|(name, c)| {
                format!(
                    "{}(inserted={}, updated={}, noop={})",
                    name, c.inserted, c.updated, c.noop
                )
            })
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_count_per_table() {
        let mut stats = MergeStats::default();
        stats.record("war", MergeOutcome::Inserted);
        stats.record("biome", MergeOutcome::Updated);
        stats.record("biome", MergeOutcome::Noop);
        stats.record("biome", MergeOutcome::Noop);

        assert_eq!(stats.table("war"), TableCounts::new(1, 0, 0));
        assert_eq!(stats.table("biome"), TableCounts::new(0, 1, 2));
        assert_eq!(stats.table("dispatch"), TableCounts::default());
        assert_eq!(
            stats.to_string(),
            "biome(inserted=0, updated=1, noop=2) war(inserted=1, updated=0, noop=0)"
        );
    }

    #[test]
    fn it_should_report_first_sighting_once() {
        let mut stats = MergeStats::default();

        assert!(stats.first_sighting("hazard", "Fire Tornadoes"));
        assert!(!stats.first_sighting("hazard", "Fire Tornadoes"));
        assert!(stats.first_sighting("biome", "Fire Tornadoes"));
    }
}
