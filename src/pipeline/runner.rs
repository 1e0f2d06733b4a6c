//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`TopKPipeline`] composes the three core stages and runs them in strict
//! order: count → select → emit. Each artifact (the frequency table, the
//! result sequence) is owned by exactly one stage at a time and moved to
//! the next; no stage retains a writable reference to a structure another
//! stage reads. An optional [`PipelineObserver`] is notified at each stage
//! boundary.

use crate::count::FrequencyTable;
use crate::error::{Result, TopKError};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_COUNT, STAGE_EMIT, STAGE_SELECT,
};
use crate::pipeline::traits::{LineSource, RowSink};
use crate::select::TopKSelector;
use crate::tokenize::PhraseTokenizer;
use crate::types::{PhraseCount, RunSummary, TopKConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The top-K extraction pipeline.
///
/// Stateless across runs: each call to [`TopKPipeline::run`] executes the
/// whole pipeline once, start to finish, against a fresh frequency table.
#[derive(Debug, Clone)]
pub struct TopKPipeline {
    tokenizer: PhraseTokenizer,
    selector: TopKSelector,
    config: TopKConfig,
}

impl Default for TopKPipeline {
    fn default() -> Self {
        Self::new(TopKConfig::default())
    }
}

impl TopKPipeline {
    /// Build a pipeline from a config.
    pub fn new(config: TopKConfig) -> Self {
        Self {
            tokenizer: PhraseTokenizer::new(config.delimiter),
            selector: TopKSelector::new(config.limit),
            config,
        }
    }

    /// The config this pipeline was built from.
    pub fn config(&self) -> &TopKConfig {
        &self.config
    }

    /// Execute the pipeline: count phrases from `source`, select the top
    /// entries, and emit one `<phrase>\t<count>` row per entry to `sink`.
    ///
    /// Returns per-run accounting. On a source failure no rows are emitted;
    /// on a sink failure, rows already accepted remain written. Pass
    /// [`crate::pipeline::observer::NoopObserver`] for zero-overhead
    /// execution.
    pub fn run(
        &self,
        source: &mut impl LineSource,
        sink: &mut impl RowSink,
        observer: &mut impl PipelineObserver,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        // Stage 1: Count
        trace_stage!(STAGE_COUNT);
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let table = self.build_table(source, &mut summary)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .lines(summary.lines_read)
            .tokens(summary.tokens_counted)
            .distinct(table.distinct())
            .build();
        observer.on_stage_end(STAGE_COUNT, &report);
        observer.on_table(&table);

        // Stage 2: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let results = self.selector.select(table);
        let report = StageReportBuilder::new(clock.elapsed())
            .rows(results.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_results(&results);

        // Stage 3: Emit
        trace_stage!(STAGE_EMIT);
        observer.on_stage_start(STAGE_EMIT);
        let clock = StageClock::start();
        for entry in &results {
            sink.write_row(&entry.to_row()).map_err(TopKError::sink)?;
            summary.rows_emitted += 1;
        }
        let report = StageReportBuilder::new(clock.elapsed())
            .rows(summary.rows_emitted)
            .build();
        observer.on_stage_end(STAGE_EMIT, &report);

        Ok(summary)
    }

    /// Count and select without emitting: returns the result sequence
    /// directly. Useful when the caller wants structured results instead of
    /// formatted rows.
    pub fn extract(&self, source: &mut impl LineSource) -> Result<Vec<PhraseCount>> {
        let mut summary = RunSummary::default();
        let table = self.build_table(source, &mut summary)?;
        Ok(self.selector.select(table))
    }

    /// Single linear scan: tokenize each line and accumulate the table.
    ///
    /// A source error aborts the scan; the partial table is dropped.
    fn build_table(
        &self,
        source: &mut impl LineSource,
        summary: &mut RunSummary,
    ) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        loop {
            match source.next_line() {
                Ok(Some(line)) => {
                    summary.lines_read += 1;
                    summary.tokens_counted += table.record_line(&self.tokenizer, line);
                }
                Ok(None) => break,
                Err(err) => return Err(TopKError::source(err)),
            }
        }
        summary.distinct_phrases = table.distinct();
        Ok(table)
    }
}
