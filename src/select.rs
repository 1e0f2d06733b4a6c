//! Bounded top-K selection
//!
//! Selects the K highest-count entries of a frequency table through a
//! size-bounded min-heap, holding at most K candidates at any point. This
//! is O(D log K) over D distinct phrases, versus O(D log D) for sorting the
//! whole table.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::count::FrequencyTable;
use crate::types::PhraseCount;

/// A candidate entry held in the selection heap.
///
/// Ordering is keyed on count only; the phrase is payload and never
/// compared, keeping each heap comparison O(1).
#[derive(Debug, Clone)]
struct Candidate {
    count: u64,
    phrase: String,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

/// Bounded min-heap selector producing the result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    limit: usize,
}

impl TopKSelector {
    /// Create a selector keeping at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The maximum number of entries this selector returns.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Consume a finalized frequency table and return its top entries in
    /// strictly descending count order.
    ///
    /// The returned sequence holds `min(limit, distinct)` entries. When the
    /// heap is full and an incoming entry's count equals the current
    /// minimum, the incomer is discarded: survivors among equal-count
    /// phrases at the boundary follow table iteration order, which is
    /// stable for a given build of the table but otherwise unspecified.
    pub fn select(&self, table: FrequencyTable) -> Vec<PhraseCount> {
        if self.limit == 0 {
            return Vec::new();
        }

        let capacity = self.limit.min(table.distinct());
        let mut candidates: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(capacity);

        for (phrase, count) in table {
            if candidates.len() < self.limit {
                candidates.push(Reverse(Candidate { count, phrase }));
                continue;
            }
            // Full: evict the current minimum only for a strictly greater
            // count; an equal count is discarded.
            let min_count = candidates.peek().map_or(0, |entry| entry.0.count);
            if count > min_count {
                candidates.pop();
                candidates.push(Reverse(Candidate { count, phrase }));
            }
        }

        // Ascending drain of a Reverse-wrapped heap yields descending counts.
        candidates
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(c)| PhraseCount::new(c.phrase, c.count))
            .collect()
    }
}
