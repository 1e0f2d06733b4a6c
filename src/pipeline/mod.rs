//! Pipeline composition
//!
//! Orchestrates the count → select → emit stages over abstract line
//! sources and row sinks, with observer hooks at each stage boundary.

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::TopKPipeline;
pub use traits::{BufLineSource, LineSource, RowSink, SliceSource, VecSink, WriteSink};
