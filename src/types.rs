//! Core configuration and result types.

use serde::{Deserialize, Serialize};

/// Field separator used when formatting output rows.
pub const FIELD_SEPARATOR: char = '\t';

/// Configuration for a top-K extraction run.
///
/// Defaults mirror the classic "top phrases" problem statement: phrases
/// separated by `|`, keep the 100 000 most frequent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopKConfig {
    /// Single-character delimiter separating phrases within a line.
    ///
    /// Caller contract: the delimiter never legitimately appears inside a
    /// phrase. No escaping or quoting is performed.
    pub delimiter: char,

    /// Maximum number of results to return.
    ///
    /// `0` is legal and yields an empty result. The selection structure
    /// never holds more than this many entries.
    pub limit: usize,
}

impl Default for TopKConfig {
    fn default() -> Self {
        Self {
            delimiter: '|',
            limit: 100_000,
        }
    }
}

impl TopKConfig {
    /// Create a config with the default delimiter and limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phrase delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the maximum number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One entry of the result sequence: a phrase and its exact occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCount {
    /// The phrase text.
    pub phrase: String,
    /// Exact number of times the phrase was observed. Always ≥ 1.
    pub count: u64,
}

impl PhraseCount {
    /// Create a new phrase/count pair.
    pub fn new(phrase: impl Into<String>, count: u64) -> Self {
        Self {
            phrase: phrase.into(),
            count,
        }
    }

    /// Format this entry as a single output row: `<phrase><TAB><count>`.
    pub fn to_row(&self) -> String {
        format!("{}{}{}", self.phrase, FIELD_SEPARATOR, self.count)
    }
}

/// Per-run accounting produced by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lines consumed from the source.
    pub lines_read: u64,
    /// Non-empty tokens observed across all lines.
    pub tokens_counted: u64,
    /// Distinct phrases in the frequency table.
    pub distinct_phrases: usize,
    /// Rows written to the sink.
    pub rows_emitted: usize,
}
