//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::count::FrequencyTable;
use crate::types::PhraseCount;

/// Counting stage: scan lines, tokenize, accumulate the frequency table.
pub const STAGE_COUNT: &str = "count";
/// Selection stage: bounded min-heap top-K over the table.
pub const STAGE_SELECT: &str = "select";
/// Emission stage: format result rows and hand them to the sink.
pub const STAGE_EMIT: &str = "emit";

/// Monotonic clock for timing a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since [`StageClock::start`].
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics reported at the end of one stage.
///
/// Only the fields relevant to a stage are populated; the rest stay `None`.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    lines: Option<u64>,
    tokens: Option<u64>,
    distinct: Option<usize>,
    rows: Option<usize>,
}

impl StageReport {
    /// A report carrying only the elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    /// Stage wall-clock duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Lines consumed (counting stage).
    pub fn lines(&self) -> Option<u64> {
        self.lines
    }

    /// Tokens recorded (counting stage).
    pub fn tokens(&self) -> Option<u64> {
        self.tokens
    }

    /// Distinct phrases in the table (counting stage).
    pub fn distinct(&self) -> Option<usize> {
        self.distinct
    }

    /// Rows in the result sequence (selection / emission stages).
    pub fn rows(&self) -> Option<usize> {
        self.rows
    }
}

/// Fluent builder for a [`StageReport`] with metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start from an elapsed duration.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    /// Record lines consumed.
    pub fn lines(mut self, lines: u64) -> Self {
        self.report.lines = Some(lines);
        self
    }

    /// Record tokens counted.
    pub fn tokens(mut self, tokens: u64) -> Self {
        self.report.tokens = Some(tokens);
        self
    }

    /// Record distinct phrase count.
    pub fn distinct(mut self, distinct: usize) -> Self {
        self.report.distinct = Some(distinct);
        self
    }

    /// Record result row count.
    pub fn rows(mut self, rows: usize) -> Self {
        self.report.rows = Some(rows);
        self
    }

    /// Finish the report.
    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks invoked at pipeline stage boundaries.
///
/// All methods default to no-ops so implementors only override what they
/// need. Artifact hooks receive read-only views; observers cannot mutate
/// pipeline state.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished; `report` carries its timing and metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The frequency table is finalized (before selection).
    fn on_table(&mut self, _table: &FrequencyTable) {}

    /// The result sequence is finalized (before emission).
    fn on_results(&mut self, _results: &[PhraseCount]) {}
}

/// Observer that does nothing. Zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per completed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports collected so far, in stage order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
