//! End-to-end pipeline flow tests over buffered readers and writers.

use std::collections::BTreeMap;
use std::io::Cursor;

use rapid_topk::pipeline::{
    BufLineSource, NoopObserver, SliceSource, StageTimingObserver, VecSink, WriteSink,
};
use rapid_topk::{PhraseCount, TopKConfig, TopKPipeline};

/// Reference count of non-empty `|`-separated tokens, independent of the
/// crate's own table.
fn model_counts(input: &str) -> BTreeMap<String, u64> {
    let mut model = BTreeMap::new();
    for line in input.lines() {
        for token in line.split('|').filter(|t| !t.is_empty()) {
            *model.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    model
}

#[test]
fn reader_to_writer_round_trip() {
    let input = "red|green|red|blue\ngreen|red\n||red|\n";
    let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(2));

    let mut source = BufLineSource::new(Cursor::new(input));
    let mut sink = WriteSink::new(Vec::new());
    let summary = pipeline
        .run(&mut source, &mut sink, &mut NoopObserver)
        .unwrap();

    let written = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(written, "red\t4\ngreen\t2\n");

    assert_eq!(summary.lines_read, 3);
    assert_eq!(summary.tokens_counted, 7);
    assert_eq!(summary.distinct_phrases, 3);
    assert_eq!(summary.rows_emitted, 2);
}

#[test]
fn rows_agree_with_independent_model() {
    // 600 lines over a small vocabulary with skewed repetition.
    let vocab = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
    let mut input = String::new();
    for i in 0..600usize {
        let a = vocab[i % vocab.len()];
        let b = vocab[(i * i) % vocab.len()];
        let c = vocab[i % 2];
        input.push_str(&format!("{a}|{b}|{c}\n"));
    }
    let model = model_counts(&input);

    let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(3));
    let mut source = BufLineSource::new(Cursor::new(input.as_str()));
    let mut sink = VecSink::new();
    pipeline
        .run(&mut source, &mut sink, &mut NoopObserver)
        .unwrap();

    let rows = sink.rows();
    assert_eq!(rows.len(), 3);

    // Every emitted row must carry the model's exact count, and rows must
    // be non-increasing in count.
    let mut previous = u64::MAX;
    for row in rows {
        let (phrase, count) = row.split_once('\t').expect("tab-separated row");
        let count: u64 = count.parse().unwrap();
        assert_eq!(model[phrase], count, "wrong count for {phrase}");
        assert!(count <= previous, "rows not descending");
        previous = count;
    }

    // The smallest emitted count dominates every phrase left out.
    let emitted: Vec<&str> = rows.iter().map(|r| r.split_once('\t').unwrap().0).collect();
    let excluded_max = model
        .iter()
        .filter(|(p, _)| !emitted.contains(&p.as_str()))
        .map(|(_, &c)| c)
        .max()
        .unwrap_or(0);
    assert!(previous >= excluded_max);
}

#[test]
fn limit_at_least_distinct_is_a_full_descending_permutation() {
    let input = "a|a|a\nb|b\nc\nd|d|d|d\n";
    let model = model_counts(input);

    let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(100));
    let mut source = BufLineSource::new(Cursor::new(input));
    let results = pipeline.extract(&mut source).unwrap();

    assert_eq!(results.len(), model.len());
    for pair in results.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
    for entry in &results {
        assert_eq!(model[&entry.phrase], entry.count);
    }
}

#[test]
fn empty_reader_produces_no_rows() {
    let pipeline = TopKPipeline::default();
    let mut source = BufLineSource::new(Cursor::new(""));
    let mut sink = VecSink::new();
    let summary = pipeline
        .run(&mut source, &mut sink, &mut NoopObserver)
        .unwrap();

    assert!(sink.rows().is_empty());
    assert_eq!(summary.lines_read, 0);
}

#[test]
fn limit_zero_produces_no_rows_for_nonempty_input() {
    let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(0));
    let mut source = BufLineSource::new(Cursor::new("a|b|c\n"));
    let mut sink = VecSink::new();
    let summary = pipeline
        .run(&mut source, &mut sink, &mut NoopObserver)
        .unwrap();

    assert!(sink.rows().is_empty());
    assert_eq!(summary.tokens_counted, 3);
}

#[test]
fn timing_observer_reports_three_stages() {
    let pipeline = TopKPipeline::default();
    let lines = ["a|b|a"];
    let mut source = SliceSource::new(&lines);
    let mut sink = VecSink::new();
    let mut obs = StageTimingObserver::new();

    pipeline.run(&mut source, &mut sink, &mut obs).unwrap();
    assert_eq!(obs.reports().len(), 3);
}

#[test]
fn results_serialize_to_json() {
    let pipeline = TopKPipeline::new(TopKConfig::new().with_limit(1));
    let lines = ["tick|tock|tick"];
    let mut source = SliceSource::new(&lines);
    let results = pipeline.extract(&mut source).unwrap();

    let json = serde_json::to_string(&results).unwrap();
    assert_eq!(json, r#"[{"phrase":"tick","count":2}]"#);

    let back: Vec<PhraseCount> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, results);
}
