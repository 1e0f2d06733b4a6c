//! # rapid-topk
//!
//! Exact top-K phrase frequency extraction with bounded-memory selection.
//!
//! Input is a stream of lines, each holding phrases separated by a fixed
//! single-character delimiter (default `|`). The pipeline counts every
//! distinct phrase exactly, then selects the K most frequent through a
//! size-bounded min-heap — O(D log K) over D distinct phrases instead of
//! the O(D log D) of a full sort — and emits `<phrase>\t<count>` rows in
//! descending count order.
//!
//! The crate never opens files or parses arguments; callers supply a
//! [`pipeline::LineSource`] and a [`pipeline::RowSink`].
//!
//! # Quick start
//!
//! ```
//! use rapid_topk::pipeline::{NoopObserver, SliceSource, VecSink};
//! use rapid_topk::{TopKConfig, TopKPipeline};
//!
//! let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(2));
//! let lines = ["a|b|a", "c|a"];
//! let mut source = SliceSource::new(&lines);
//! let mut sink = VecSink::new();
//!
//! let summary = pipeline.run(&mut source, &mut sink, &mut NoopObserver)?;
//!
//! assert_eq!(summary.rows_emitted, 2);
//! assert_eq!(sink.rows()[0], "a\t3");
//! # Ok::<(), rapid_topk::TopKError>(())
//! ```

pub mod count;
pub mod error;
pub mod pipeline;
pub mod select;
pub mod tokenize;
pub mod types;

pub use count::FrequencyTable;
pub use error::{Result, TopKError};
pub use pipeline::runner::TopKPipeline;
pub use select::TopKSelector;
pub use tokenize::PhraseTokenizer;
pub use types::{PhraseCount, RunSummary, TopKConfig};
