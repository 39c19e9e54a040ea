//! Aggregation of parsed BOM entries.
//!
//! The aggregator folds a stream of [`BomEntry`] values into one entry per
//! identity (canonical manufacturer plus part number), summing occurrence
//! counts and unioning designator sets, then ranks the result.
//!
//! Insertion order is load-bearing: entries that tie on both ranking keys
//! keep the order in which their identities were first seen, so the mapping
//! is a `HashMap` index into an insertion-ordered `Vec` rather than an
//! unordered map iterated directly.

use std::collections::HashMap;

use tracing::debug;

use bom_model::BomEntry;

/// Accumulates entries for one aggregation run.
///
/// One `Aggregator` owns the identity mapping for exactly one run; entries
/// are never removed once inserted.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    entries: Vec<BomEntry>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one entry into the aggregate: insert on first sight of its
    /// identity, otherwise merge into the existing entry in place.
    pub fn ingest(&mut self, entry: BomEntry) {
        let key = entry.identity();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].merge(entry),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Number of distinct entities seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank the accumulated entries and return them.
    ///
    /// Sort is by occurrence count descending, then designator-set size
    /// descending; the sort is stable, so exact ties keep first-seen order.
    /// When `limit` is given the ranked list is truncated to that many
    /// entries.
    pub fn finalize(self, limit: Option<usize>) -> Vec<BomEntry> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| {
            b.occurrences.cmp(&a.occurrences).then(
                b.reference_designators
                    .len()
                    .cmp(&a.reference_designators.len()),
            )
        });
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        debug!(entries = ranked.len(), "aggregation finalized");
        ranked
    }
}

/// Aggregate a stream of entries and return the ranked result. Composes
/// repeated [`Aggregator::ingest`] with a single [`Aggregator::finalize`].
pub fn aggregate<I>(entries: I, limit: Option<usize>) -> Vec<BomEntry>
where
    I: IntoIterator<Item = BomEntry>,
{
    let mut aggregator = Aggregator::new();
    for entry in entries {
        aggregator.ingest(entry);
    }
    aggregator.finalize(limit)
}
