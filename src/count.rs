//! Exact phrase frequency accumulation
//!
//! This module provides the frequency table built during the single linear
//! scan over the input. It uses FxHashMap for fast string-keyed lookups;
//! for a fixed insertion sequence its iteration order is deterministic,
//! which keeps tie handling in the selection stage stable across runs of
//! the same input.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::tokenize::PhraseTokenizer;

/// Lines per rayon work unit in [`FrequencyTable::par_build`].
const PAR_CHUNK_LINES: usize = 4_096;

/// Exact mapping from distinct phrase to occurrence count.
///
/// Owned exclusively by the counting stage while it is being built, then
/// frozen and moved to the selector. Counts are never zero: a phrase enters
/// the table on first observation with count 1.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            total: 0,
        }
    }

    /// Record one occurrence of `phrase`.
    ///
    /// Allocates only on first observation of a phrase.
    pub fn record(&mut self, phrase: &str) {
        if let Some(count) = self.counts.get_mut(phrase) {
            *count += 1;
        } else {
            self.counts.insert(phrase.to_string(), 1);
        }
        self.total += 1;
    }

    /// Tokenize `line` and record every non-empty phrase in it.
    ///
    /// Returns the number of phrases recorded.
    pub fn record_line(&mut self, tokenizer: &PhraseTokenizer, line: &str) -> u64 {
        let mut recorded = 0;
        for phrase in tokenizer.phrases(line) {
            self.record(phrase);
            recorded += 1;
        }
        recorded
    }

    /// The occurrence count for `phrase`, or 0 if never observed.
    pub fn count(&self, phrase: &str) -> u64 {
        self.counts.get(phrase).copied().unwrap_or(0)
    }

    /// Number of distinct phrases in the table.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts — equals the total number of non-empty tokens
    /// observed.
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    /// Returns `true` if no phrase has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(phrase, count)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(p, &c)| (p.as_str(), c))
    }

    /// Fold `other` into this table, summing counts for shared phrases.
    ///
    /// Merging is commutative and associative, so partial tables built over
    /// disjoint chunks of the input can be combined in any order.
    pub fn merge(&mut self, other: FrequencyTable) {
        self.total += other.total;
        for (phrase, count) in other.counts {
            *self.counts.entry(phrase).or_insert(0) += count;
        }
    }

    /// Build a table over an in-memory slice of lines in parallel.
    ///
    /// Partitions the lines into chunks, builds a partial table per chunk,
    /// and merges the partials. The merge completes before this function
    /// returns, so the caller always hands a finalized table to the
    /// selector. Counts are identical to a sequential build over the same
    /// lines.
    pub fn par_build<S>(lines: &[S], tokenizer: &PhraseTokenizer) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_chunks(PAR_CHUNK_LINES)
            .map(|chunk| {
                let mut partial = FrequencyTable::new();
                for line in chunk {
                    partial.record_line(tokenizer, line.as_ref());
                }
                partial
            })
            .reduce(FrequencyTable::new, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = std::collections::hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
